//! Navigation Item Entity
//!
//! A leaf entry of the navigation menu, either standalone at the root or
//! nested under exactly one category.

use serde::{Deserialize, Serialize};

use super::entity::{CategoryId, Entity, ItemId};

/// Navigation entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavItemKind {
    #[default]
    Link,
}

impl NavItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavItemKind::Link => "link",
        }
    }
}

/// A navigation entry with its (optional) owning category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Backend-assigned identifier
    pub id: ItemId,
    pub kind: NavItemKind,
    /// Display label
    pub label: String,
    /// Owning category (None = standalone at root level)
    pub category_id: Option<CategoryId>,
}

impl NavItem {
    /// Create a standalone item
    pub fn new(id: ItemId, kind: NavItemKind, label: String) -> Self {
        Self {
            id,
            kind,
            label,
            category_id: None,
        }
    }

    /// Create an item nested under a category
    pub fn in_category(id: ItemId, kind: NavItemKind, label: String, category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::new(id, kind, label)
        }
    }
}

impl Entity for NavItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}
