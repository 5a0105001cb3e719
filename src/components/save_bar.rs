//! Save Bar Component
//!
//! Save button, unsaved-changes indicator and the transient notice area.

use leptos::prelude::*;
use leptos::task::spawn_local;
use nav_order::OrderApi;

use crate::context::AppContext;
use crate::models::NoticeKind;
use crate::page::reload_page;
use crate::store::{store_is_dirty, store_is_saving, store_item_count, store_update_editor, use_order_store};

#[component]
pub fn SaveBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_order_store();

    let on_save = move |_| {
        let Some(ticket) = store_update_editor(&store, |editor| editor.begin_save()) else {
            return;
        };
        let api = ctx.order_api();
        log::info!("[SAVE] submitting {} records", ticket.records.len());
        spawn_local(async move {
            let result = api.submit_order(&ticket.records).await;
            let finished = store_update_editor(&store, |editor| {
                editor
                    .finish_save(ticket.revision, result)
                    .map(|()| editor.has_unsaved_changes())
            });
            match finished {
                Ok(still_dirty) => {
                    ctx.notify(NoticeKind::Success, "Navigation order saved.");
                    if !still_dirty {
                        reload_page();
                    }
                }
                Err(e) => ctx.notify(NoticeKind::Error, e.to_string()),
            }
        });
    };

    let disabled = move || !store_is_dirty(&store) || store_is_saving(&store);
    let button_label = move || if store_is_saving(&store) { "Saving…" } else { "Save order" };

    view! {
        <div class="nav-order-toolbar d-flex align-items-center gap-3 mb-3">
            <button class="btn btn-primary" disabled=disabled on:click=on_save>
                {button_label}
            </button>
            <Show when=move || store_is_dirty(&store)>
                <span class="text-warning">"Unsaved changes"</span>
            </Show>
            <span class="text-muted ms-auto">
                {move || format!("{} links", store_item_count(&store))}
            </span>
        </div>
        {move || ctx.notice.get().map(|notice| view! {
            <div class=notice.css_class() role="alert">
                {notice.text.clone()}
                <button type="button" class="btn-close float-end" on:click=move |_| ctx.dismiss()></button>
            </div>
        })}
    }
}
