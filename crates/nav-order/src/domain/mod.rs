//! Domain Layer
//!
//! Navigation entities, identifiers and the snapshot they are loaded from.

mod entity;
mod nav_item;
mod category;
mod snapshot;

pub use entity::{Entity, OpaqueId, ItemId, CategoryId, DomainError, DomainResult};
pub use nav_item::{NavItem, NavItemKind};
pub use category::{Category, Slot};
pub use snapshot::{Snapshot, SnapshotSlot, SnapshotItem};
