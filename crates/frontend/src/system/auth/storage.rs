use contracts::system::navigation::sidebar::{
    collapsed_pref_value, parse_collapsed_pref, SIDEBAR_COLLAPSED_KEY,
};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the sidebar collapsed preference; anything but `"true"` means wide.
pub fn load_sidebar_collapsed() -> bool {
    let raw = get_local_storage().and_then(|s| s.get_item(SIDEBAR_COLLAPSED_KEY).ok()?);
    parse_collapsed_pref(raw.as_deref())
}

pub fn save_sidebar_collapsed(collapsed: bool) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SIDEBAR_COLLAPSED_KEY, collapsed_pref_value(collapsed));
    }
}
