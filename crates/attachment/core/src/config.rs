//! Normalized adjustment configuration consumed by the walker.

use crate::catalog::AttributeKind;
use crate::classify::Category;
use crate::overrides::SpecificOverride;
use crate::stats::{StatSetting, StatTable};

/// How a specific override interacts with the category pass.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum OverrideMode {
    /// An overridden item skips category rules entirely.
    #[default]
    Exclusive,
    /// Category rules run first, then the override is written on top.
    Stacked,
}

/// Schema generation a configuration was read from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SchemaKind {
    /// Flat `<Category><Attribute>Multiplier` numbers.
    Legacy,
    /// Per-category objects with hard-set/additive/multiplier modes.
    #[default]
    PerCategory,
}

impl SchemaKind {
    /// Override behavior the schema generation used when none is configured.
    pub const fn default_override_mode(&self) -> OverrideMode {
        match self {
            Self::Legacy => OverrideMode::Stacked,
            Self::PerCategory => OverrideMode::Exclusive,
        }
    }
}

/// Everything a walk needs besides the catalog. Immutable during a walk.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdjustmentConfig {
    pub schema: SchemaKind,
    pub override_mode: OverrideMode,
    pub rules: StatTable,
    pub overrides: Vec<SpecificOverride>,
}

impl AdjustmentConfig {
    pub fn new(schema: SchemaKind) -> Self {
        Self {
            schema,
            override_mode: schema.default_override_mode(),
            rules: StatTable::new(),
            overrides: Vec::new(),
        }
    }

    pub fn setting(&self, category: Category, attribute: AttributeKind) -> StatSetting {
        self.rules.get(category, attribute)
    }

    #[must_use]
    pub fn with_rule(
        mut self,
        category: Category,
        attribute: AttributeKind,
        setting: StatSetting,
    ) -> Self {
        self.rules.set(category, attribute, setting);
        self
    }

    #[must_use]
    pub fn with_override(mut self, entry: SpecificOverride) -> Self {
        self.overrides.push(entry);
        self
    }

    #[must_use]
    pub fn with_override_mode(mut self, mode: OverrideMode) -> Self {
        self.override_mode = mode;
        self
    }
}
