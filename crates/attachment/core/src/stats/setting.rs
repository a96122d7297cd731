//! Configured settings per (category, attribute) pair.

use std::collections::BTreeMap;

use crate::catalog::AttributeKind;
use crate::classify::Category;

/// Which mode a [`StatSetting`] resolves to.
///
/// Only one mode is ever active; when several are configured the order below
/// is the precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RuleMode {
    HardSet,
    Additive,
    Multiplicative,
    PassThrough,
}

/// Settings for one attribute of one category.
///
/// The default value is a pass-through: multiplier 1.0, both overrides off.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatSetting {
    pub hard_set_enabled: bool,
    pub hard_set_value: f64,
    pub additive_enabled: bool,
    pub additive_value: f64,
    pub multiplier: f64,
}

impl StatSetting {
    pub const PASS_THROUGH: Self = Self {
        hard_set_enabled: false,
        hard_set_value: 0.0,
        additive_enabled: false,
        additive_value: 0.0,
        multiplier: 1.0,
    };

    pub const fn new() -> Self {
        Self::PASS_THROUGH
    }

    /// Multiplier-only setting, the shape every legacy entry normalizes into.
    pub const fn multiplier(multiplier: f64) -> Self {
        Self {
            multiplier,
            ..Self::PASS_THROUGH
        }
    }

    /// Enable hard-set mode (builder pattern)
    #[must_use]
    pub const fn hard_set(mut self, value: f64) -> Self {
        self.hard_set_enabled = true;
        self.hard_set_value = value;
        self
    }

    /// Enable additive mode (builder pattern)
    #[must_use]
    pub const fn additive(mut self, value: f64) -> Self {
        self.additive_enabled = true;
        self.additive_value = value;
        self
    }

    /// Set the multiplier (builder pattern)
    #[must_use]
    pub const fn scaled(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn mode(&self) -> RuleMode {
        if self.hard_set_enabled {
            RuleMode::HardSet
        } else if self.additive_enabled {
            RuleMode::Additive
        } else if self.multiplier != 1.0 {
            RuleMode::Multiplicative
        } else {
            RuleMode::PassThrough
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.mode() == RuleMode::PassThrough
    }
}

impl Default for StatSetting {
    fn default() -> Self {
        Self::PASS_THROUGH
    }
}

/// Lookup key of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleKey {
    pub category: Category,
    pub attribute: AttributeKind,
}

impl RuleKey {
    pub const fn new(category: Category, attribute: AttributeKind) -> Self {
        Self {
            category,
            attribute,
        }
    }

    /// Configuration key, e.g. `MuzzleDeviceDurability`.
    pub fn config_key(&self) -> String {
        format!("{}{}", self.category, self.attribute.config_key())
    }

    /// Every key a configuration can address, in category then attribute order.
    pub fn all() -> impl Iterator<Item = RuleKey> {
        Category::ALL.into_iter().flat_map(|category| {
            category
                .attributes()
                .iter()
                .map(move |attribute| RuleKey::new(category, *attribute))
        })
    }
}

/// Normalized rule table. Missing entries read as [`StatSetting::PASS_THROUGH`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatTable {
    settings: BTreeMap<RuleKey, StatSetting>,
}

impl StatTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category, attribute: AttributeKind) -> StatSetting {
        self.settings
            .get(&RuleKey::new(category, attribute))
            .copied()
            .unwrap_or(StatSetting::PASS_THROUGH)
    }

    pub fn set(&mut self, category: Category, attribute: AttributeKind, setting: StatSetting) {
        self.settings
            .insert(RuleKey::new(category, attribute), setting);
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(
        mut self,
        category: Category,
        attribute: AttributeKind,
        setting: StatSetting,
    ) -> Self {
        self.set(category, attribute, setting);
        self
    }

    /// Number of entries that actually change something.
    pub fn active_len(&self) -> usize {
        self.settings
            .values()
            .filter(|setting| !setting.is_pass_through())
            .count()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.settings.len()))?;
        for (key, setting) in &self.settings {
            map.serialize_entry(&key.config_key(), setting)?;
        }
        map.end()
    }
}
