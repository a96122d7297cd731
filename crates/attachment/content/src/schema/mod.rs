//! Configuration schemas and their normalization.
//!
//! Two generations of configuration files exist. Both are parsed into a
//! generic document first, the generation is detected from its keys, and
//! each is normalized into the same [`AdjustmentConfig`]:
//!
//! | Detected by                                   | Schema        | Override mode |
//! |-----------------------------------------------|---------------|---------------|
//! | object under `<Category><Attribute>`          | per-category  | Exclusive     |
//! | number under `<Category><Attribute>Multiplier`| legacy        | Stacked       |
//! | neither                                       | per-category  | Exclusive     |
//!
//! Either generation may pin the override mode with an `OverrideMode` key.

pub mod legacy;
pub mod per_category;

use attachment_core::{AdjustmentConfig, OverrideMode, RuleKey, SchemaKind, SpecificOverride};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::loaders::LoadResult;

pub const OVERRIDES_KEY: &str = "SpecificAttachmentOverrides";
pub const OVERRIDE_MODE_KEY: &str = "OverrideMode";

/// Override entry as written in both schema generations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawOverride {
    item_id: String,
    name: Option<String>,
    ergonomics_override: Option<f64>,
    recoil_percentage_override: Option<f64>,
    durability_burn_override: Option<f64>,
}

impl From<RawOverride> for SpecificOverride {
    fn from(raw: RawOverride) -> Self {
        SpecificOverride {
            item_id: raw.item_id,
            name: raw.name,
            ergonomics: raw.ergonomics_override,
            recoil: raw.recoil_percentage_override,
            durability_burn: raw.durability_burn_override,
        }
    }
}

/// Decides which schema generation `doc` was written in.
pub fn detect_schema(doc: &Map<String, Value>) -> SchemaKind {
    let per_category = RuleKey::all()
        .any(|key| doc.get(&key.config_key()).is_some_and(Value::is_object));
    if per_category {
        return SchemaKind::PerCategory;
    }

    let legacy = RuleKey::all()
        .any(|key| doc.get(&legacy::multiplier_key(&key)).is_some_and(Value::is_number));
    if legacy {
        SchemaKind::Legacy
    } else {
        SchemaKind::PerCategory
    }
}

/// Normalizes a parsed configuration document of either generation.
pub fn normalize(document: &Value) -> LoadResult<AdjustmentConfig> {
    let doc = document
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("Configuration root must be an object"))?;

    let schema = detect_schema(doc);
    let config = match schema {
        SchemaKind::Legacy => legacy::normalize(doc)?,
        SchemaKind::PerCategory => per_category::normalize(doc)?,
    };

    tracing::debug!(
        schema = %schema,
        override_mode = %config.override_mode,
        active_rules = config.rules.active_len(),
        overrides = config.overrides.len(),
        "configuration normalized"
    );

    Ok(config)
}

fn read_override_mode(doc: &Map<String, Value>) -> LoadResult<Option<OverrideMode>> {
    let Some(value) = doc.get(OVERRIDE_MODE_KEY) else {
        return Ok(None);
    };
    let raw = value
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("{} must be a string", OVERRIDE_MODE_KEY))?;
    let mode = raw
        .parse::<OverrideMode>()
        .map_err(|_| anyhow::anyhow!("Unknown {} '{}'", OVERRIDE_MODE_KEY, raw))?;
    Ok(Some(mode))
}

fn read_overrides(value: Option<&Value>) -> LoadResult<Vec<SpecificOverride>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }

    let raw: Vec<RawOverride> = serde_json::from_value(value.clone())
        .map_err(|e| anyhow::anyhow!("Invalid {}: {}", OVERRIDES_KEY, e))?;

    Ok(raw
        .into_iter()
        .filter(|entry| {
            let keep = !entry.item_id.is_empty();
            if !keep {
                tracing::warn!(name = ?entry.name, "ignoring override without ItemId");
            }
            keep
        })
        .map(SpecificOverride::from)
        .collect())
}
