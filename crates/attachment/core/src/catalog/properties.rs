//! Property set of a catalog item: value resolver and attribute writer.
//!
//! Every adjustable attribute maps to exactly one typed slot through
//! a private `slot_mut` match. Name-based access goes through
//! [`AttributeKind`]'s parser, so an unknown name simply finds no slot.

use super::attribute::{AttributeKind, WriteError};

/// Numeric attributes of an item. `None` means the item does not carry the
/// attribute at all, which is different from carrying a zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemProperties {
    pub ergonomics: Option<f64>,
    pub recoil: Option<f64>,
    pub durability_burn_modificator: Option<f64>,
}

/// Result of a single write.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteOutcome {
    /// The slot now holds `current`.
    Written { previous: Option<f64>, current: f64 },
    /// No slot answers to the requested name; nothing happened.
    NoSlot,
    /// The value could not be stored and was discarded.
    Rejected(WriteError),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// True when the stored value differs from what was there before.
    pub fn changed(&self) -> bool {
        match self {
            Self::Written { previous, current } => *previous != Some(*current),
            _ => false,
        }
    }
}

impl ItemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by loaders and tests.
    #[must_use]
    pub fn with(mut self, attribute: AttributeKind, value: f64) -> Self {
        *self.slot_mut(attribute) = Some(value);
        self
    }

    /// Returns the attribute's value, or `None` if the item does not carry it.
    pub fn get(&self, attribute: AttributeKind) -> Option<f64> {
        match attribute {
            AttributeKind::Ergonomics => self.ergonomics,
            AttributeKind::Recoil => self.recoil,
            AttributeKind::DurabilityBurn => self.durability_burn_modificator,
        }
    }

    /// Looks an attribute up by its external or internal name.
    pub fn get_named(&self, name: &str) -> Option<f64> {
        name.parse::<AttributeKind>()
            .ok()
            .and_then(|attribute| self.get(attribute))
    }

    pub fn has(&self, attribute: AttributeKind) -> bool {
        self.get(attribute).is_some()
    }

    fn slot_mut(&mut self, attribute: AttributeKind) -> &mut Option<f64> {
        match attribute {
            AttributeKind::Ergonomics => &mut self.ergonomics,
            AttributeKind::Recoil => &mut self.recoil,
            AttributeKind::DurabilityBurn => &mut self.durability_burn_modificator,
        }
    }

    /// Stores `value` under `attribute` after applying its rounding policy.
    ///
    /// A rejected value leaves the slot untouched.
    pub fn write(&mut self, attribute: AttributeKind, value: f64) -> WriteOutcome {
        let stored = match attribute.rounding().apply(attribute, value) {
            Ok(stored) => stored,
            Err(err) => return WriteOutcome::Rejected(err),
        };

        let slot = self.slot_mut(attribute);
        let previous = slot.replace(stored);
        WriteOutcome::Written {
            previous,
            current: stored,
        }
    }

    /// Like [`write`](Self::write), addressed by name. Unknown names are a no-op.
    pub fn write_named(&mut self, name: &str, value: f64) -> WriteOutcome {
        match name.parse::<AttributeKind>() {
            Ok(attribute) => self.write(attribute, value),
            Err(_) => WriteOutcome::NoSlot,
        }
    }
}
