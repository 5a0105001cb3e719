//! Page Shell Inputs
//!
//! Reads what the server rendered around the editor: the order snapshot,
//! the endpoint and the CSRF token.

use nav_order::{OrderApiConfig, ResolvedConfig, Snapshot, DEFAULT_ENDPOINT};
use wasm_bindgen::JsCast;

/// Element the editor mounts into; carries `data-endpoint`
pub const MOUNT_ID: &str = "navigation-order";
/// `<script type="application/json">` holding the snapshot
pub const SNAPSHOT_ID: &str = "navigation-order-data";
const CSRF_META: &str = "meta[name=\"csrf-token\"]";

pub struct PageInputs {
    pub snapshot: Snapshot,
    pub config: ResolvedConfig,
}

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| "no document available".to_string())
}

/// Mount point for the editor, if the page provides one
pub fn mount_element() -> Option<web_sys::HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Collect snapshot and API settings from the DOM
pub fn read_page_inputs() -> Result<PageInputs, String> {
    let doc = document()?;

    let raw = doc
        .get_element_by_id(SNAPSHOT_ID)
        .and_then(|el| el.text_content())
        .ok_or_else(|| format!("missing #{} element", SNAPSHOT_ID))?;
    let snapshot = Snapshot::from_json(&raw).map_err(|e| e.to_string())?;

    let endpoint = doc
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.get_attribute("data-endpoint"));
    let csrf_token = doc
        .query_selector(CSRF_META)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"));
    let origin = web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .ok_or_else(|| "cannot determine page origin".to_string())?;

    let config = build_config(endpoint, csrf_token, &origin)?;
    Ok(PageInputs { snapshot, config })
}

/// Combine the raw attribute values into a validated config
pub fn build_config(
    endpoint: Option<String>,
    csrf_token: Option<String>,
    origin: &str,
) -> Result<ResolvedConfig, String> {
    let endpoint = endpoint
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    OrderApiConfig::new(endpoint, csrf_token.unwrap_or_default())
        .resolve(origin)
        .map_err(|e| e.to_string())
}

/// Fetch a fresh authoritative snapshot from the server
pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[PAGE] reload failed: {:?}", e);
        }
    }
}
