//! Attachment categories and the parent-identifier classifier.

use crate::catalog::AttributeKind;

/// Parent template identifiers the classifier recognizes.
pub mod parent_ids {
    pub const FOREGRIP: &str = "55818af64bdc2d5b648b4570";
    pub const STOCK: &str = "55818a594bdc2db9688b456a";
    pub const PISTOL_GRIP: &str = "55818a684bdc2ddd698b456d";
    pub const MUZZLE_BRAKE: &str = "5448fe394bdc2d0d028b456c";
    pub const SUPPRESSOR: &str = "550aa4cd4bdc2dd8348b456c";
    pub const MUZZLE_ADAPTER: &str = "550aa4dd4bdc2dc9348b4569";
}

/// Attachment category that decides which configured settings apply.
///
/// Brakes, suppressors and adapters all collapse into [`Category::MuzzleDevice`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Foregrip,
    Stock,
    PistolGrip,
    MuzzleDevice,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Foregrip,
        Category::Stock,
        Category::PistolGrip,
        Category::MuzzleDevice,
    ];

    /// Attributes adjusted for items of this category, in evaluation order.
    pub const fn attributes(&self) -> &'static [AttributeKind] {
        match self {
            Self::Foregrip | Self::Stock => &[AttributeKind::Ergonomics, AttributeKind::Recoil],
            Self::PistolGrip => &[AttributeKind::Ergonomics],
            Self::MuzzleDevice => &[
                AttributeKind::Ergonomics,
                AttributeKind::Recoil,
                AttributeKind::DurabilityBurn,
            ],
        }
    }
}

/// Maps a parent identifier to its category; anything unknown is `None`.
pub fn classify(parent_id: &str) -> Option<Category> {
    match parent_id {
        parent_ids::FOREGRIP => Some(Category::Foregrip),
        parent_ids::STOCK => Some(Category::Stock),
        parent_ids::PISTOL_GRIP => Some(Category::PistolGrip),
        parent_ids::MUZZLE_BRAKE | parent_ids::SUPPRESSOR | parent_ids::MUZZLE_ADAPTER => {
            Some(Category::MuzzleDevice)
        }
        _ => None,
    }
}
