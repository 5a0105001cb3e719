//! UI Components
//!
//! Leptos components of the navigation order page.

mod drop_zone;
mod order_tree_view;
mod save_bar;

pub use drop_zone::DropZone;
pub use order_tree_view::OrderTreeView;
pub use save_bar::SaveBar;
