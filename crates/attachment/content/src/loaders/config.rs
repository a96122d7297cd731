//! Adjustment configuration loader.

use std::path::Path;

use attachment_core::AdjustmentConfig;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file, strip_jsonc};
use crate::schema;

/// On-disk syntax of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON, with comments and trailing commas tolerated.
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension. Unknown extensions read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Loader for adjustment configurations in either schema generation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and normalize a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.json`, `.jsonc` or `.toml` configuration
    pub fn load(path: &Path) -> LoadResult<AdjustmentConfig> {
        let content = read_file(path)?;
        let format = ConfigFormat::from_path(path);
        tracing::debug!(path = %path.display(), ?format, "loading configuration");

        Self::parse_str(&content, format)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse configuration text that is already in memory.
    pub fn parse_str(content: &str, format: ConfigFormat) -> LoadResult<AdjustmentConfig> {
        let document = Self::parse_document(content, format)?;
        schema::normalize(&document)
    }

    /// Parse configuration text into a generic document without normalizing it.
    pub fn parse_document(content: &str, format: ConfigFormat) -> LoadResult<Value> {
        match format {
            ConfigFormat::Json => serde_json::from_str(&strip_jsonc(content)?)
                .map_err(|e| anyhow::anyhow!("Failed to parse config JSON: {}", e)),
            ConfigFormat::Toml => toml::from_str::<Value>(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e)),
        }
    }
}
