//! Deterministic stat-adjustment engine for weapon attachments.
//!
//! `attachment-core` decides, per catalog item, which configured rule
//! applies, combines it with the item's current value and writes the result
//! back. It performs no I/O: catalogs and configurations arrive through the
//! traits in [`env`], and everything worth telling a human goes to a
//! [`Reporter`].
pub mod catalog;
pub mod classify;
pub mod config;
pub mod env;
pub mod error;
pub mod overrides;
pub mod stats;
pub mod walker;

pub use catalog::{
    AttributeKind, Item, ItemCatalog, ItemProperties, RoundingPolicy, WriteError, WriteOutcome,
};
pub use classify::{Category, classify, parent_ids};
pub use config::{AdjustmentConfig, OverrideMode, SchemaKind};
pub use env::{CatalogSource, ConfigSource, NullReporter, Reporter, SourceError};
pub use error::{ErrorSeverity, TunerError};
pub use overrides::{
    OverrideOutcome, OverrideReport, SpecificOverride, apply_override, resolve_override,
};
pub use stats::{RuleKey, RuleMode, StatSetting, StatTable, evaluate};
pub use walker::{CatalogWalker, WalkSummary, run, run_from_sources};
