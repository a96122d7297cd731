use super::properties::ItemProperties;

/// Item template as it appears in the catalog.
///
/// # Design: Identity + Properties
///
/// - `id`, `name` and `parent` are read-only for the engine
/// - `properties` is the only part a walk mutates
/// - `parent == None` marks a non-attachment; `properties == None` marks an
///   item kind without a property set (both are skipped by the walker)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub properties: Option<ItemProperties>,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent: Option<String>,
        properties: Option<ItemProperties>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent,
            properties,
        }
    }

    /// Attachment with a parent category and a property set.
    pub fn attachment(
        id: impl Into<String>,
        name: impl Into<String>,
        parent: impl Into<String>,
        properties: ItemProperties,
    ) -> Self {
        Self::new(id, name, Some(parent.into()), Some(properties))
    }
}

/// Ordered item collection. Iteration order is insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
