//! Rule engine: combines a base value with a [`StatSetting`].
//!
//! Precedence is fixed:
//!
//! ```text
//! base absent → no change
//! hard-set    → hard_set_value
//! additive    → base + additive_value
//! multiplier  → base × multiplier   (negative ergonomics: base ÷ multiplier)
//! otherwise   → no change
//! ```
//!
//! The returned value is unrounded; the attribute writer applies the
//! attribute's [`RoundingPolicy`](crate::catalog::RoundingPolicy).

use super::setting::{RuleMode, StatSetting};
use crate::catalog::AttributeKind;

/// Smallest multiplier magnitude the negative-ergonomics division accepts.
pub const MIN_DIVISOR: f64 = 0.01;

/// Computes the new value for `attribute`, or `None` when nothing should be written.
///
/// # Examples
///
/// ```
/// # use attachment_core::{AttributeKind, StatSetting, evaluate};
/// // Negative ergonomics are divided so a "better" multiplier still helps.
/// let setting = StatSetting::multiplier(2.0);
/// assert_eq!(evaluate(AttributeKind::Ergonomics, Some(-10.0), &setting), Some(-5.0));
/// let recoil = StatSetting::multiplier(1.5);
/// assert_eq!(evaluate(AttributeKind::Recoil, Some(40.0), &recoil), Some(60.0));
/// assert_eq!(evaluate(AttributeKind::Recoil, None, &setting), None);
/// ```
pub fn evaluate(attribute: AttributeKind, base: Option<f64>, setting: &StatSetting) -> Option<f64> {
    let base = base?;

    match setting.mode() {
        RuleMode::HardSet => Some(setting.hard_set_value),
        RuleMode::Additive => Some(base + setting.additive_value),
        RuleMode::Multiplicative => Some(scale(attribute, base, setting.multiplier)),
        RuleMode::PassThrough => None,
    }
}

fn scale(attribute: AttributeKind, base: f64, multiplier: f64) -> f64 {
    if attribute == AttributeKind::Ergonomics && base < 0.0 {
        // Near-zero divisors would blow the value up; keep the base instead.
        if multiplier.abs() > MIN_DIVISOR {
            base / multiplier
        } else {
            base
        }
    } else {
        base * multiplier
    }
}
