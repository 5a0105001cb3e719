//! Order Tree View Component
//!
//! Displays the two-level menu with drag-and-drop support.
//! Uses leptos-dragdrop with explicit DropZones between entries.

use leptos::prelude::*;
use leptos_dragdrop::*;
use log::debug;
use nav_order::{CategoryId, DragSubject, DropOutcome, ItemId};

use crate::components::DropZone;
use crate::store::{store_rows, store_update_editor, use_order_store};
use crate::tree::{target_index, Row, Zone};

/// Menu editor with DnD support
#[component]
pub fn OrderTreeView() -> impl IntoView {
    let store = use_order_store();
    let dnd = create_dnd_signals::<DragSubject, Zone>();

    bind_drag_lifecycle(
        dnd,
        move |subject| {
            store_update_editor(&store, |editor| {
                editor.begin_drag(subject);
            });
        },
        move |subject, zone: Zone| {
            store_update_editor(&store, |editor| {
                let position = target_index(editor, &zone);
                match editor.drop_into(zone.container, position) {
                    DropOutcome::Accepted(location) => {
                        debug!("[DND] {:?} -> {:?}", subject, location);
                    }
                    DropOutcome::Rejected(reason) => {
                        debug!("[DND] {:?} refused: {:?}", subject, reason);
                    }
                    DropOutcome::Ignored => {}
                }
            });
        },
        move || {
            store_update_editor(&store, |editor| editor.end_drag());
        },
    );

    let rows = move || store_rows(&store);

    view! {
        <div class="nav-order-tree">
            <For
                each=rows
                key=|row| row.clone()
                children=move |row| match row {
                    Row::Zone(zone) => view! { <DropZone dnd=dnd zone=zone /> }.into_any(),
                    Row::Category { id, name, size } => {
                        view! { <CategoryHeader dnd=dnd id=id name=name size=size /> }.into_any()
                    }
                    Row::Item { id, label, depth } => {
                        view! { <ItemRow dnd=dnd id=id label=label depth=depth /> }.into_any()
                    }
                }
            />
        </div>
    }
}

/// Draggable category heading; its items follow it when it moves
#[component]
fn CategoryHeader(
    dnd: DndSignals<DragSubject, Zone>,
    id: CategoryId,
    name: String,
    size: usize,
) -> impl IntoView {
    let subject = DragSubject::Category(id);
    let on_mousedown = make_on_mousedown(dnd, subject.clone());
    let is_dragging = move || dnd.is_dragging(&subject);

    let class = move || {
        let mut c = String::from("nav-order-category");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <div class=class on:mousedown=on_mousedown>
            <span class="drag-handle">"⠿"</span>
            <strong>{name}</strong>
            <span class="badge bg-secondary ms-2">{size}</span>
        </div>
    }
}

/// Draggable navigation link
#[component]
fn ItemRow(
    dnd: DndSignals<DragSubject, Zone>,
    id: ItemId,
    label: String,
    depth: usize,
) -> impl IntoView {
    let subject = DragSubject::Item(id);
    let on_mousedown = make_on_mousedown(dnd, subject.clone());
    let is_dragging = move || dnd.is_dragging(&subject);

    let class = move || {
        let mut c = String::from("nav-order-item");
        if depth > 0 { c.push_str(" nested"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=class
            style:padding-left=format!("{}rem", 1 + depth * 2)
            on:mousedown=on_mousedown
        >
            <span class="drag-handle">"⠿"</span>
            {label}
        </div>
    }
}
