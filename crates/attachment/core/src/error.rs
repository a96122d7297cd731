//! Common error infrastructure for attachment-core.
//!
//! The engine has a narrow error surface: absent attributes,
//! unknown categories and missing slots are normal outcomes, not errors.
//! What remains are rejected writes (bad numbers) and source failures that
//! happen before a walk can begin. Both implement [`TunerError`].

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A single value was refused; the walk continues.
    ///
    /// Examples: non-finite result, integer overflow on a rounded attribute
    Validation,

    /// The walk cannot start.
    ///
    /// Examples: catalog unavailable, configuration file malformed
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all attachment-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by whether the walk can continue
/// - Keep `error_code` stable; reporters key on it
pub trait TunerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
