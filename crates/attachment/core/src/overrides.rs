//! Per-item overrides that bypass category rules.

use core::fmt;

use crate::catalog::{AttributeKind, ItemProperties, WriteError, WriteOutcome};

/// Values pinned for one specific item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecificOverride {
    pub item_id: String,
    /// Display name for report lines only; never used as identity.
    pub name: Option<String>,
    pub ergonomics: Option<f64>,
    pub recoil: Option<f64>,
    pub durability_burn: Option<f64>,
}

impl SpecificOverride {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, attribute: AttributeKind, value: f64) -> Self {
        match attribute {
            AttributeKind::Ergonomics => self.ergonomics = Some(value),
            AttributeKind::Recoil => self.recoil = Some(value),
            AttributeKind::DurabilityBurn => self.durability_burn = Some(value),
        }
        self
    }

    pub fn value(&self, attribute: AttributeKind) -> Option<f64> {
        match attribute {
            AttributeKind::Ergonomics => self.ergonomics,
            AttributeKind::Recoil => self.recoil,
            AttributeKind::DurabilityBurn => self.durability_burn,
        }
    }

    /// Override name when set and non-empty, otherwise the catalog name.
    pub fn display_name<'a>(&'a self, catalog_name: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => catalog_name,
        }
    }
}

/// First override whose identifier matches `item_id`.
pub fn resolve_override<'a>(
    item_id: &str,
    overrides: &'a [SpecificOverride],
) -> Option<&'a SpecificOverride> {
    overrides.iter().find(|entry| entry.item_id == item_id)
}

/// Human-readable record of one override write.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideReport {
    pub item_id: String,
    pub name: String,
    pub attribute: AttributeKind,
    pub value: f64,
}

impl fmt::Display for OverrideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Overriding {} {} to {}",
            self.name,
            self.attribute.label(),
            self.value
        )
    }
}

/// What applying an override did to one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverrideOutcome {
    /// At least one stored value differs from before.
    pub changed: bool,
    /// Attributes that ended up overridden.
    pub overridden: Vec<AttributeKind>,
    pub reports: Vec<OverrideReport>,
    pub rejected: Vec<WriteError>,
}

/// Writes each populated override field the item already carries.
pub fn apply_override(
    item_id: &str,
    catalog_name: &str,
    properties: &mut ItemProperties,
    entry: &SpecificOverride,
) -> OverrideOutcome {
    let name = entry.display_name(catalog_name);
    let mut outcome = OverrideOutcome::default();

    for attribute in AttributeKind::ALL {
        let Some(value) = entry.value(attribute) else {
            continue;
        };
        if !properties.has(attribute) {
            continue;
        }

        let written = properties.write(attribute, value);
        let changed = written.changed();
        match written {
            WriteOutcome::Written { current, .. } => {
                outcome.changed |= changed;
                outcome.overridden.push(attribute);
                outcome.reports.push(OverrideReport {
                    item_id: item_id.to_string(),
                    name: name.to_string(),
                    attribute,
                    value: current,
                });
            }
            WriteOutcome::Rejected(err) => outcome.rejected.push(err),
            WriteOutcome::NoSlot => {}
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grip() -> ItemProperties {
        ItemProperties::new()
            .with(AttributeKind::Ergonomics, 45.0)
            .with(AttributeKind::Recoil, -3.0)
    }

    #[test]
    fn first_match_wins() {
        let overrides = vec![
            SpecificOverride::new("a").with_value(AttributeKind::Ergonomics, 1.0),
            SpecificOverride::new("b").with_value(AttributeKind::Ergonomics, 2.0),
            SpecificOverride::new("a").with_value(AttributeKind::Ergonomics, 3.0),
        ];
        let found = resolve_override("a", &overrides).unwrap();
        assert_eq!(found.ergonomics, Some(1.0));
        assert!(resolve_override("c", &overrides).is_none());
    }

    #[test]
    fn writes_present_attributes_only() {
        let mut props = grip();
        let entry = SpecificOverride::new("grip")
            .with_value(AttributeKind::Ergonomics, 60.0)
            .with_value(AttributeKind::DurabilityBurn, 0.5);

        let outcome = apply_override("grip", "RK-0", &mut props, &entry);

        assert!(outcome.changed);
        assert_eq!(outcome.overridden, vec![AttributeKind::Ergonomics]);
        assert_eq!(props.ergonomics, Some(60.0));
        assert_eq!(props.durability_burn_modificator, None);
    }

    #[test]
    fn unchanged_values_are_reported_but_not_changed() {
        let mut props = grip();
        let entry = SpecificOverride::new("grip").with_value(AttributeKind::Recoil, -3.0);

        let outcome = apply_override("grip", "RK-0", &mut props, &entry);

        assert!(!outcome.changed);
        assert_eq!(outcome.reports.len(), 1);
    }

    #[test]
    fn report_uses_override_name_when_given() {
        let mut props = grip();
        let entry = SpecificOverride::new("grip")
            .with_name("Tuned grip")
            .with_value(AttributeKind::Ergonomics, 59.6);

        let outcome = apply_override("grip", "RK-0", &mut props, &entry);

        assert_eq!(
            outcome.reports[0].to_string(),
            "Overriding Tuned grip ergonomics to 60"
        );
    }

    #[test]
    fn empty_override_name_falls_back_to_catalog_name() {
        let entry = SpecificOverride::new("grip").with_name("");
        assert_eq!(entry.display_name("RK-0"), "RK-0");
    }

    #[test]
    fn rejected_value_is_collected() {
        let mut props = grip();
        let entry = SpecificOverride::new("grip").with_value(AttributeKind::Recoil, f64::NAN);

        let outcome = apply_override("grip", "RK-0", &mut props, &entry);

        assert!(!outcome.changed);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(props.recoil, Some(-3.0));
    }
}
