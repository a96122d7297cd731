//! Content factory for building engine inputs from data files.

use std::path::{Path, PathBuf};

use attachment_core::{AdjustmentConfig, CatalogSource, ConfigSource, ItemCatalog, SourceError};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Configuration file names tried in order when no explicit path is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["config.jsonc", "config.json", "config.toml"];

/// Catalog file name used when no explicit path is given.
pub const CATALOG_FILE_NAME: &str = "items.json";

/// Content factory that loads the catalog and configuration from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.jsonc   (or config.json / config.toml)
/// └── items.json
/// ```
///
/// Either file can be pointed elsewhere with [`with_config`](Self::with_config)
/// and [`with_catalog`](Self::with_catalog).
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config_path: None,
            catalog_path: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Resolves the configuration file.
    ///
    /// Without an explicit path, the first existing name in
    /// [`CONFIG_FILE_NAMES`] wins; if none exists the first name is returned
    /// so errors point at the preferred location.
    pub fn config_path(&self) -> PathBuf {
        if let Some(path) = &self.config_path {
            return path.clone();
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.data_dir.join(name))
            .find(|path| path.is_file())
            .unwrap_or_else(|| self.data_dir.join(CONFIG_FILE_NAMES[0]))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(CATALOG_FILE_NAME))
    }

    /// Load and normalize the adjustment configuration.
    pub fn load_config(&self) -> LoadResult<AdjustmentConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load the item catalog.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        CatalogLoader::load(&self.catalog_path())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl CatalogSource for ContentFactory {
    fn load_catalog(&self) -> Result<ItemCatalog, SourceError> {
        ContentFactory::load_catalog(self)
            .map_err(|e| SourceError::CatalogUnavailable(format!("{e:#}")))
    }
}

impl ConfigSource for ContentFactory {
    fn load_config(&self) -> Result<AdjustmentConfig, SourceError> {
        let path = self.config_path();
        if !path.is_file() {
            return Err(SourceError::ConfigUnavailable(format!(
                "no configuration file at {}",
                path.display()
            )));
        }

        ContentFactory::load_config(self)
            .map_err(|e| SourceError::ConfigMalformed(format!("{e:#}")))
    }
}
