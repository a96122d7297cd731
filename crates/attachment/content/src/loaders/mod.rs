//! Content loaders for reading catalogs and configurations from files.
//!
//! Loaders turn JSON/JSONC/TOML files into the engine's types. Schema
//! detection and normalization live in [`crate::schema`].

pub mod catalog;
pub mod config;
pub mod factory;
pub mod jsonc;

pub use catalog::CatalogLoader;
pub use config::{ConfigFormat, ConfigLoader};
pub use factory::ContentFactory;
pub use jsonc::strip_jsonc;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
