//! Snapshot
//!
//! Wire shape of the server-rendered navigation order the editor starts from.

use serde::{Deserialize, Serialize};

use super::entity::{CategoryId, DomainError, DomainResult, ItemId};
use super::nav_item::NavItemKind;

/// Initial (or projected) navigation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub slots: Vec<SnapshotSlot>,
}

/// A root-level entry of the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapshotSlot {
    Category {
        id: CategoryId,
        name: String,
        #[serde(default)]
        items: Vec<SnapshotItem>,
    },
    Item(SnapshotItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub id: ItemId,
    #[serde(default)]
    pub kind: NavItemKind,
    #[serde(default)]
    pub label: String,
}

impl SnapshotItem {
    pub fn new(id: impl Into<ItemId>, label: &str) -> Self {
        Self {
            id: id.into(),
            kind: NavItemKind::Link,
            label: label.to_string(),
        }
    }
}

impl Snapshot {
    /// Parse the JSON document embedded in the page
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::InvalidSnapshot(e.to_string()))
    }

    /// Total number of items across both levels
    pub fn item_count(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                SnapshotSlot::Category { items, .. } => items.len(),
                SnapshotSlot::Item(_) => 1,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_slots() {
        let raw = r#"{
            "slots": [
                {"type": "category", "id": 7, "name": "Tools",
                 "items": [{"id": 1, "label": "Grafana"}, {"id": "wiki", "kind": "link"}]},
                {"type": "item", "id": 2, "label": "Status"},
                {"type": "category", "id": "empty", "name": "Empty"}
            ]
        }"#;

        let snapshot = Snapshot::from_json(raw).unwrap();

        assert_eq!(snapshot.slots.len(), 3);
        assert_eq!(snapshot.item_count(), 3);
        match &snapshot.slots[0] {
            SnapshotSlot::Category { id, items, .. } => {
                assert_eq!(id, &CategoryId::from(7));
                assert_eq!(items[1].id, ItemId::from("wiki"));
                assert_eq!(items[1].label, "");
            }
            other => panic!("expected category, got {:?}", other),
        }
        assert_eq!(snapshot.slots[1], SnapshotSlot::Item(SnapshotItem::new(2, "Status")));
        assert!(matches!(&snapshot.slots[2], SnapshotSlot::Category { items, .. } if items.is_empty()));
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = Snapshot::from_json(r#"{"slots": [{"type": "folder", "id": 1}]}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidSnapshot(_)));
    }
}
