//! API URL helpers.
//!
//! The console is served by the same origin that owns the order endpoints,
//! so the base is just the current location's origin.

/// Origin of the current page, or an empty string outside a browsing
/// context (URLs then stay relative, which the endpoints accept too).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path starting with "/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
