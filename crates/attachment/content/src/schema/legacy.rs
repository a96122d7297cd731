//! Legacy schema: a flat multiplier per (category, attribute).
//!
//! ```jsonc
//! {
//!     "StockErgonomicsMultiplier": 1.25,
//!     "MuzzleDeviceDurabilityMultiplier": 0.5,
//!     "SpecificAttachmentOverrides": [ ... ]
//! }
//! ```
//!
//! Every entry becomes a multiplier-only [`StatSetting`].

use attachment_core::{AdjustmentConfig, RuleKey, SchemaKind, StatSetting};
use serde_json::{Map, Value};

use super::{OVERRIDES_KEY, read_override_mode, read_overrides};
use crate::loaders::LoadResult;

/// Configuration key of the legacy multiplier for `key`.
pub fn multiplier_key(key: &RuleKey) -> String {
    format!("{}Multiplier", key.config_key())
}

pub(super) fn normalize(doc: &Map<String, Value>) -> LoadResult<AdjustmentConfig> {
    let mut config = AdjustmentConfig::new(SchemaKind::Legacy);

    for key in RuleKey::all() {
        let name = multiplier_key(&key);
        let Some(value) = doc.get(&name) else {
            continue;
        };
        let multiplier = value
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("{} must be a number, got {}", name, value))?;
        config
            .rules
            .set(key.category, key.attribute, StatSetting::multiplier(multiplier));
    }

    if let Some(mode) = read_override_mode(doc)? {
        config.override_mode = mode;
    }
    config.overrides = read_overrides(doc.get(OVERRIDES_KEY))?;

    Ok(config)
}
