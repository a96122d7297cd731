//! Per-category schema: one settings object per (category, attribute).
//!
//! ```jsonc
//! {
//!     "OverrideMode": "Exclusive",          // optional
//!     "StockErgonomics": {
//!         "EnableHardSetOverride": false,
//!         "HardSetOverrideValue": 0,
//!         "EnableAdditiveOverride": false,
//!         "AdditiveOverrideValue": 0,
//!         "Multiplier": 1.25
//!     },
//!     "SpecificAttachmentOverrides": [ ... ]
//! }
//! ```

use attachment_core::{AdjustmentConfig, RuleKey, SchemaKind, StatSetting};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{OVERRIDES_KEY, read_override_mode, read_overrides};
use crate::loaders::LoadResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawStatSettings {
    enable_hard_set_override: bool,
    hard_set_override_value: f64,
    enable_additive_override: bool,
    additive_override_value: f64,
    multiplier: f64,
}

impl Default for RawStatSettings {
    fn default() -> Self {
        Self {
            enable_hard_set_override: false,
            hard_set_override_value: 0.0,
            enable_additive_override: false,
            additive_override_value: 0.0,
            multiplier: 1.0,
        }
    }
}

impl From<RawStatSettings> for StatSetting {
    fn from(raw: RawStatSettings) -> Self {
        StatSetting {
            hard_set_enabled: raw.enable_hard_set_override,
            hard_set_value: raw.hard_set_override_value,
            additive_enabled: raw.enable_additive_override,
            additive_value: raw.additive_override_value,
            multiplier: raw.multiplier,
        }
    }
}

pub(super) fn normalize(doc: &Map<String, Value>) -> LoadResult<AdjustmentConfig> {
    let mut config = AdjustmentConfig::new(SchemaKind::PerCategory);

    for key in RuleKey::all() {
        let name = key.config_key();
        let Some(value) = doc.get(&name) else {
            continue;
        };
        let raw: RawStatSettings = serde_json::from_value(value.clone())
            .map_err(|e| anyhow::anyhow!("Invalid settings for {}: {}", name, e))?;
        config.rules.set(key.category, key.attribute, raw.into());
    }

    if let Some(mode) = read_override_mode(doc)? {
        config.override_mode = mode;
    }
    config.overrides = read_overrides(doc.get(OVERRIDES_KEY))?;

    Ok(config)
}
