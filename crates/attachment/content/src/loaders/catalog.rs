//! Item catalog loader.

use std::path::Path;

use attachment_core::{Item, ItemCatalog, ItemProperties};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::loaders::{LoadResult, read_file};

/// Item record as stored in the catalog file.
#[derive(Debug, Clone, Deserialize)]
struct RawItem {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_name", default)]
    name: String,
    #[serde(rename = "_parent", default)]
    parent: Option<String>,
    #[serde(rename = "_props", default)]
    props: Option<RawProps>,
}

/// The property fields the engine reads. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawProps {
    ergonomics: Option<f64>,
    recoil: Option<f64>,
    durability_burn_modificator: Option<f64>,
}

impl From<RawProps> for ItemProperties {
    fn from(raw: RawProps) -> Self {
        ItemProperties {
            ergonomics: raw.ergonomics,
            recoil: raw.recoil,
            durability_burn_modificator: raw.durability_burn_modificator,
        }
    }
}

impl RawItem {
    fn into_item(self, fallback_id: Option<&str>) -> Option<Item> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .or_else(|| fallback_id.map(str::to_string))?;
        let parent = self.parent.filter(|parent| !parent.is_empty());
        Some(Item::new(id, self.name, parent, self.props.map(Into::into)))
    }
}

/// A catalog file is either keyed by item id or a plain list.
///
/// Keyed records stay generic until conversion so file order survives.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    Keyed(Map<String, Value>),
    Listed(Vec<RawItem>),
}

/// Loader for item catalogs from JSON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing the item records
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse catalog JSON that is already in memory.
    pub fn parse_str(content: &str) -> LoadResult<ItemCatalog> {
        let raw: RawCatalog = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog JSON: {}", e))?;

        let mut catalog = ItemCatalog::new();
        match raw {
            RawCatalog::Keyed(records) => {
                for (key, record) in records {
                    let record: RawItem = serde_json::from_value(record)
                        .map_err(|e| anyhow::anyhow!("Invalid catalog record {}: {}", key, e))?;
                    if let Some(item) = record.into_item(Some(&key)) {
                        catalog.push(item);
                    }
                }
            }
            RawCatalog::Listed(records) => {
                for (index, record) in records.into_iter().enumerate() {
                    match record.into_item(None) {
                        Some(item) => catalog.push(item),
                        None => tracing::warn!(index, "skipping catalog record without _id"),
                    }
                }
            }
        }

        Ok(catalog)
    }
}
