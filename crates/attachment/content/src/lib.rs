//! Data-driven inputs for the attachment engine.
//!
//! This crate reads the two files a run needs and hands them to
//! `attachment-core` in normalized form:
//! - Adjustment configuration (JSON, JSON with comments, or TOML), in either
//!   the legacy flat-multiplier schema or the per-category schema
//! - Item catalog (JSON template database)
//!
//! [`ContentFactory`] ties both to a data directory and implements the
//! core's source traits.

pub mod loaders;
pub mod schema;

pub use loaders::{
    CatalogLoader, ConfigFormat, ConfigLoader, ContentFactory, LoadResult, strip_jsonc,
};
pub use schema::{detect_schema, normalize};
