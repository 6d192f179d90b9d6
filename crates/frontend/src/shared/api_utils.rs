//! API utilities for frontend-backend communication

/// Base URL of the generation backend.
///
/// Built from the current window location, always on port 3000.
/// Returns an empty string when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full API URL for a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
