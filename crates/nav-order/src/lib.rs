//! Navigation Order Core
//!
//! Layered like the rest of the console front-end:
//! - domain: ids, items, categories and the page snapshot
//! - editor: the in-memory two-level order and its drag/drop rules
//! - api: the backend endpoint that persists the flattened order
//! - config: endpoint and CSRF settings from the page shell

pub mod domain;
pub mod editor;
pub mod api;
pub mod config;

pub use api::{HttpOrderApi, OrderApi, OrderResponse, SaveError};
pub use config::{ConfigError, OrderApiConfig, ResolvedConfig, DEFAULT_CSRF_HEADER, DEFAULT_ENDPOINT};
pub use domain::{
    Category, CategoryId, DomainError, DomainResult, ItemId, NavItem, NavItemKind, OpaqueId, Slot,
    Snapshot, SnapshotItem, SnapshotSlot,
};
pub use editor::{
    Container, DragSubject, DropOutcome, HierarchicalOrderEditor, Location, OrderRecord,
    RejectReason, SaveStatus, SaveTicket,
};
