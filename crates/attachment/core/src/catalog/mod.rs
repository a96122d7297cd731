//! Item catalog types and the attribute read/write surface.

pub mod attribute;
pub mod item;
pub mod properties;

pub use attribute::{AttributeKind, RoundingPolicy, WriteError};
pub use item::{Item, ItemCatalog};
pub use properties::{ItemProperties, WriteOutcome};
