//! PageFrame - standard root wrapper for every routed page.
//!
//! The root element carries `id="{entity}--{category}"` (for example
//! `"a001_campaign--list"`) and `data-page-category`.

use leptos::prelude::*;

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Landing page with stat cards and shortcuts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Form driven action page.
pub const PAGE_CAT_FORM: &str = "form";
/// Static or shell pages (menu, support, sync).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// True for ids in the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_campaign--list"));
        assert!(!is_valid_page_id("a001_campaign"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_campaign--"));
    }
}
