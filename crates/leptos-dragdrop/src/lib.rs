//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Generic over the dragged key `K` and the drop target `T`, so callers
//! decide what a draggable and a drop zone mean.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
pub struct DndSignals<K: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<K, T> {}

impl<K, T> DndSignals<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `key` is the one being dragged (tracked)
    pub fn is_dragging(&self, key: &K) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(key))
    }

    /// Whether any drag is active (tracked)
    pub fn any_dragging(&self) -> bool {
        self.dragging_read.with(Option::is_some)
    }

    /// Whether `target` is under the pointer (tracked)
    pub fn is_target(&self, target: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<K, T>() -> DndSignals<K, T>
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Nested draggables: the innermost one wins
            ev.stop_propagation();
            dnd.pending_write.set(Some(key.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind document mousemove - starts drag once moved past the threshold
pub fn bind_global_mousemove<K, T, S>(dnd: DndSignals<K, T>, on_start: S)
where
    K: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    S: Fn(K) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };

        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_write.set(Some(pending.clone()));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mouseup: reports the drop (if any) then the end of the gesture
pub fn bind_global_mouseup<K, T, F, E>(dnd: DndSignals<K, T>, on_drop: F, on_end: E)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(K, T) + 'static,
    E: Fn() + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        match (dragging, drop_target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
                on_end();
            }
            (Some(_), None) => {
                end_drag(&dnd);
                on_end();
            }
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
}

/// Wire the whole gesture: start after the movement threshold, drop on a
/// hovered target, end on every mouseup that followed a drag.
pub fn bind_drag_lifecycle<K, T, S, F, E>(dnd: DndSignals<K, T>, on_start: S, on_drop: F, on_end: E)
where
    K: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    S: Fn(K) + 'static,
    F: Fn(K, T) + 'static,
    E: Fn() + 'static,
{
    bind_global_mouseup(dnd, on_drop, on_end);
    bind_global_mousemove(dnd, on_start);
}
