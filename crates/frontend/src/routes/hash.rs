//! Hash-based location helpers (`#/admin/...`).

use contracts::system::routes::normalize;
use web_sys::window;

/// Current location taken from the URL hash, normalized.
pub fn current_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    normalize(&hash)
}

/// Point the URL hash at `path`; the `hashchange` listener picks it up.
pub fn navigate(path: &str) {
    let target = normalize(path);
    log::debug!("navigate: {}", target);
    if let Some(w) = window() {
        let _ = w.location().set_hash(&target);
    }
}
