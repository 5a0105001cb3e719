//! Page State Store
//!
//! Uses Leptos reactive_stores so the editor lives in exactly one place,
//! owned by the mounted page instead of module-level globals.

use leptos::prelude::*;
use reactive_stores::Store;
use nav_order::{Container, HierarchicalOrderEditor};

use crate::tree::{flatten_order, Row};

#[derive(Debug, Store)]
pub struct OrderState {
    /// The menu being edited
    pub editor: HierarchicalOrderEditor,
}

impl OrderState {
    pub fn new(editor: HierarchicalOrderEditor) -> Self {
        Self { editor }
    }
}

/// Type alias for the store
pub type OrderStore = Store<OrderState>;

/// Get the order store from context
pub fn use_order_store() -> OrderStore {
    expect_context::<OrderStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run `f` against the editor, notifying readers afterwards
pub fn store_update_editor<R>(store: &OrderStore, f: impl FnOnce(&mut HierarchicalOrderEditor) -> R) -> R {
    f(&mut store.editor().write())
}

/// Rows to render (tracked)
pub fn store_rows(store: &OrderStore) -> Vec<Row> {
    flatten_order(&store.editor().read())
}

/// Whether the current drag may land in `container` (tracked)
pub fn store_accepts(store: &OrderStore, container: &Container) -> bool {
    store.editor().read().legal_targets().contains(container)
}

/// Unsaved-changes flag (tracked)
pub fn store_is_dirty(store: &OrderStore) -> bool {
    store.editor().read().has_unsaved_changes()
}

/// Unsaved-changes flag, for event handlers outside the reactive graph
pub fn store_is_dirty_untracked(store: &OrderStore) -> bool {
    store.editor().read_untracked().has_unsaved_changes()
}

/// Whether a save request is pending (tracked)
pub fn store_is_saving(store: &OrderStore) -> bool {
    store.editor().read().is_saving()
}

/// Item count (tracked)
pub fn store_item_count(store: &OrderStore) -> usize {
    store.editor().read().item_count()
}
