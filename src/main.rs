#![allow(warnings)]
//! Navigation Order Frontend Entry Point

mod models;
mod tree;
mod context;
mod store;
mod page;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    match page::mount_element() {
        Some(root) => leptos::mount::mount_to(root, App).forget(),
        None => mount_to_body(App),
    }
}
