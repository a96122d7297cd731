//! Narrow interfaces to the collaborators around the engine.
//!
//! Loading the catalog, reading the configuration and emitting report lines
//! all happen outside this crate. The walker only sees these traits.

mod error;

pub use error::SourceError;

use crate::catalog::{ItemCatalog, WriteError};
use crate::config::AdjustmentConfig;
use crate::overrides::OverrideReport;
use crate::walker::WalkSummary;

/// Supplies the item catalog a walk mutates.
pub trait CatalogSource {
    fn load_catalog(&self) -> Result<ItemCatalog, SourceError>;
}

/// Supplies an already-normalized configuration.
pub trait ConfigSource {
    fn load_config(&self) -> Result<AdjustmentConfig, SourceError>;
}

/// Receives what the walk wants surfaced to a human.
///
/// Every method defaults to doing nothing so reporters only implement what
/// they display.
pub trait Reporter {
    /// A specific override wrote a value.
    fn override_applied(&mut self, _report: &OverrideReport) {}

    /// A computed value was discarded instead of written.
    fn write_rejected(&mut self, _item_id: &str, _error: &WriteError) {}

    /// The walk is complete.
    fn finished(&mut self, _summary: &WalkSummary) {}
}

/// Reporter that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

impl CatalogSource for ItemCatalog {
    fn load_catalog(&self) -> Result<ItemCatalog, SourceError> {
        Ok(self.clone())
    }
}

impl ConfigSource for AdjustmentConfig {
    fn load_config(&self) -> Result<AdjustmentConfig, SourceError> {
        Ok(self.clone())
    }
}
