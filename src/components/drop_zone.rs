//! Drop Zone Component
//!
//! A horizontal line between entries marking where the dragged entry lands.

use leptos::prelude::*;
use leptos_dragdrop::*;
use nav_order::DragSubject;

use crate::store::{store_accepts, use_order_store};
use crate::tree::Zone;

/// Drop zone shown only while dragging, and only in containers that may
/// take the dragged entry
#[component]
pub fn DropZone(
    dnd: DndSignals<DragSubject, Zone>,
    zone: Zone,
) -> impl IntoView {
    let store = use_order_store();
    let on_mouseenter = make_on_target_mouseenter(dnd, zone.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let container = zone.clone().container;
    let is_legal = move || dnd.any_dragging() && store_accepts(&store, &container);
    let is_active = move || dnd.is_target(&zone);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_legal() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
