//! Source access errors.
//!
//! Raised by collaborators before a walk starts. The engine itself never
//! produces them.

use crate::error::{ErrorSeverity, TunerError};

/// Errors that occur when a catalog or configuration cannot be provided.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The item catalog could not be read.
    #[error("item catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The configuration file could not be read.
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),

    /// The configuration was read but could not be understood.
    #[error("configuration malformed: {0}")]
    ConfigMalformed(String),
}

impl TunerError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CatalogUnavailable(_) => "SOURCE_CATALOG_UNAVAILABLE",
            Self::ConfigUnavailable(_) => "SOURCE_CONFIG_UNAVAILABLE",
            Self::ConfigMalformed(_) => "SOURCE_CONFIG_MALFORMED",
        }
    }
}
