//! Backend origin resolution.
//!
//! The origin is resolved once at startup: a `window.SUPPORT_API_ORIGIN`
//! global (set from `index.html` or by the deployment) overrides the
//! location-derived default. The source this console replaces hardcoded a
//! local address; the override is the documented escape hatch.

use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

/// Backend port used when no override is configured.
const DEFAULT_API_PORT: u16 = 8000;

static API_ORIGIN: OnceCell<String> = OnceCell::new();

/// Get the base URL for API requests, e.g. "http://localhost:8000".
///
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    API_ORIGIN.get_or_init(resolve_origin).clone()
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn resolve_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Some(origin) = configured_origin(&window) {
        return origin;
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Read the `SUPPORT_API_ORIGIN` global, if the page defined one.
fn configured_origin(window: &web_sys::Window) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str("SUPPORT_API_ORIGIN")).ok()?;
    let origin = value.as_string()?;
    let trimmed = origin.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
