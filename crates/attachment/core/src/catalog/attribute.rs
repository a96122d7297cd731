//! Adjustable attributes and their storage rules.

use crate::error::{ErrorSeverity, TunerError};

/// Numeric attribute the engine knows how to read, evaluate and write.
///
/// Parsing accepts the external catalog names as well as a few aliases,
/// case-insensitively:
///
/// ```
/// # use attachment_core::AttributeKind;
/// let kind: AttributeKind = "durabilityburn".parse().unwrap();
/// assert_eq!(kind, AttributeKind::DurabilityBurn);
/// assert_eq!(kind.to_string(), "DurabilityBurnModificator");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum AttributeKind {
    /// Handling weight; negative values penalize the weapon.
    #[strum(to_string = "Ergonomics", serialize = "Ergo")]
    Ergonomics,

    /// Recoil change, stored as a whole percentage.
    #[strum(to_string = "Recoil", serialize = "RecoilPercentage")]
    Recoil,

    /// Barrel wear multiplier.
    #[strum(
        to_string = "DurabilityBurnModificator",
        serialize = "DurabilityBurn",
        serialize = "Durability"
    )]
    DurabilityBurn,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Ergonomics,
        AttributeKind::Recoil,
        AttributeKind::DurabilityBurn,
    ];

    /// Suffix used by configuration keys (`StockErgonomics`, `MuzzleDeviceDurability`).
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::Ergonomics => "Ergonomics",
            Self::Recoil => "Recoil",
            Self::DurabilityBurn => "Durability",
        }
    }

    /// Short label for report lines.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ergonomics => "ergonomics",
            Self::Recoil => "recoil %",
            Self::DurabilityBurn => "durability burn",
        }
    }

    pub const fn rounding(&self) -> RoundingPolicy {
        match self {
            Self::Ergonomics | Self::Recoil => RoundingPolicy::NearestInteger,
            Self::DurabilityBurn => RoundingPolicy::Exact,
        }
    }
}

/// How a computed value is converted before it lands in its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Round half away from zero; the result must fit an `i32`.
    NearestInteger,
    /// Keep full floating precision.
    Exact,
}

impl RoundingPolicy {
    /// Converts `value` for storage under `attribute`.
    ///
    /// Non-finite inputs and integers outside the `i32` range are refused
    /// rather than clamped.
    pub fn apply(self, attribute: AttributeKind, value: f64) -> Result<f64, WriteError> {
        if !value.is_finite() {
            return Err(WriteError::NonFinite { attribute, value });
        }

        match self {
            Self::Exact => Ok(value),
            Self::NearestInteger => {
                let rounded = value.round();
                if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
                    return Err(WriteError::OutOfRange { attribute, value });
                }
                Ok(rounded)
            }
        }
    }
}

/// A computed value that could not be stored.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WriteError {
    #[error("{attribute} value {value} is not a finite number")]
    NonFinite { attribute: AttributeKind, value: f64 },

    #[error("{attribute} value {value} does not fit an integer slot")]
    OutOfRange { attribute: AttributeKind, value: f64 },
}

impl WriteError {
    pub fn attribute(&self) -> AttributeKind {
        match self {
            Self::NonFinite { attribute, .. } | Self::OutOfRange { attribute, .. } => *attribute,
        }
    }
}

impl TunerError for WriteError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite { .. } => "WRITE_NON_FINITE",
            Self::OutOfRange { .. } => "WRITE_OUT_OF_RANGE",
        }
    }
}
