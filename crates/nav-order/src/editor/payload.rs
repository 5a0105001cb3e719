//! Save Payload
//!
//! Flattens the two-level order into one weighted record per item.

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, ItemId, Slot};

/// One item of the persisted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: ItemId,
    /// Global position across both levels
    pub weight: u32,
    /// Owning category, serialized as `null` for standalone items
    pub category: Option<CategoryId>,
}

/// Walk the root in order, expanding each category in place.
/// Weights come from one counter so root order and in-category order
/// share a single total order.
pub fn flatten(root: &[Slot]) -> Vec<OrderRecord> {
    let mut records = Vec::new();
    let mut weight: u32 = 0;
    let mut emit = |id: &ItemId, category: Option<&CategoryId>| {
        records.push(OrderRecord {
            id: id.clone(),
            weight,
            category: category.cloned(),
        });
        weight += 1;
    };

    for slot in root {
        match slot {
            Slot::Item(id) => emit(id, None),
            Slot::Category(category) => {
                for id in &category.items {
                    emit(id, Some(&category.id));
                }
            }
        }
    }
    records
}
