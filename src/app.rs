//! Navigation Order App
//!
//! Builds the editor from the page snapshot and lays out the toolbar and
//! the menu tree.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use nav_order::HierarchicalOrderEditor;

use crate::components::{OrderTreeView, SaveBar};
use crate::context::AppContext;
use crate::page::read_page_inputs;
use crate::store::{store_is_dirty_untracked, OrderState, OrderStore};

#[component]
pub fn App() -> impl IntoView {
    let inputs = read_page_inputs().and_then(|inputs| {
        HierarchicalOrderEditor::from_snapshot(inputs.snapshot)
            .map(|editor| (editor, inputs.config))
            .map_err(|e| e.to_string())
    });

    match inputs {
        Ok((editor, config)) => {
            log::info!("[APP] editing {} navigation links", editor.item_count());
            let store: OrderStore = Store::new(OrderState::new(editor));
            provide_context(store);
            provide_context(AppContext::new(config));
            bind_unsaved_changes_guard(store);

            view! {
                <div class="nav-order-editor">
                    <SaveBar />
                    <OrderTreeView />
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("[APP] cannot start navigation order editor: {}", e);
            view! {
                <div class="alert alert-danger" role="alert">
                    {format!("The navigation order editor could not be loaded: {}", e)}
                </div>
            }
            .into_any()
        }
    }
}

/// Ask before leaving the page while edits are unsaved
fn bind_unsaved_changes_guard(store: OrderStore) {
    let on_beforeunload = Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(move |ev: web_sys::BeforeUnloadEvent| {
        if store_is_dirty_untracked(&store) {
            ev.prevent_default();
            ev.set_return_value("You have unsaved changes to the navigation order.");
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("beforeunload", on_beforeunload.as_ref().unchecked_ref());
    }
    on_beforeunload.forget();
}
