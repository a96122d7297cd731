//! Stat rules: configured settings and the engine that evaluates them.
//!
//! # Architecture
//!
//! ```text
//! [ Config schema (legacy | per-category) ]
//!      ↓  normalized by the loader
//! [ StatTable: (Category, Attribute) → StatSetting ]
//!      ↓
//! [ evaluate(attribute, base, setting) ]
//!      ↓
//! [ ItemProperties::write (rounding) ]
//! ```
//!
//! The engine never sees which schema produced a setting.

pub mod rule;
pub mod setting;

pub use rule::{MIN_DIVISOR, evaluate};
pub use setting::{RuleKey, RuleMode, StatSetting, StatTable};
