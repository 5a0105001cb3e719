//! Category Entity
//!
//! A named group at the root level owning an ordered list of items.

use super::entity::{CategoryId, Entity, ItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Member items in display order
    pub items: Vec<ItemId>,
}

impl Category {
    pub fn new(id: CategoryId, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }

    pub fn position_of(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// One entry of the root sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A standalone item
    Item(ItemId),
    /// A category with its nested items
    Category(Category),
}

impl Slot {
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Slot::Category(category) => Some(category),
            Slot::Item(_) => None,
        }
    }

    pub fn as_category_mut(&mut self) -> Option<&mut Category> {
        match self {
            Slot::Category(category) => Some(category),
            Slot::Item(_) => None,
        }
    }
}
