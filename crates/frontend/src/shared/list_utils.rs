//! Reactive glue between list pages and the core list controller.

use contracts::shared::indicators::StatItem;
use contracts::shared::list::{FilterCriteria, ListModel, ListPage, ListView};
use leptos::prelude::*;

/// Reactive handle over a [`ListView`]. Every setter goes through the
/// controller, so page resets and clamping behave exactly as in the core.
pub struct ListState<R: Send + Sync + 'static> {
    view: RwSignal<ListView<R>>,
}

impl<R: Send + Sync + 'static> Clone for ListState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListState<R> {}

impl<R: ListModel + Send + Sync + 'static> ListState<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            view: RwSignal::new(ListView::new(records)),
        }
    }

    pub fn current_page(&self) -> ListPage<R> {
        self.view.with(ListView::current_page)
    }

    pub fn stats(&self) -> Vec<StatItem> {
        self.view.with(ListView::stats)
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.view.with(|v| v.criteria().clone())
    }

    pub fn criteria_untracked(&self) -> FilterCriteria {
        self.view.with_untracked(|v| v.criteria().clone())
    }

    pub fn filter_value(&self, field: &str) -> String {
        self.view
            .with(|v| v.criteria().get(field).map(str::to_string))
            .unwrap_or_default()
    }

    pub fn page(&self) -> usize {
        self.view.with(ListView::page)
    }

    pub fn total_pages(&self) -> usize {
        self.view.with(ListView::total_pages)
    }

    pub fn filtered_count(&self) -> usize {
        self.view.with(ListView::filtered_count)
    }

    pub fn search(&self) -> String {
        self.view.with(|v| v.criteria().search().to_string())
    }

    pub fn active_filters(&self) -> usize {
        self.view.with(|v| v.criteria().active_count())
    }

    pub fn set_search(&self, term: String) {
        self.view.update(|v| v.set_search(term));
    }

    pub fn set_filter(&self, field: &str, value: String) {
        self.view.update(|v| v.set_criteria_field(field, value));
    }

    pub fn set_page(&self, page: usize) {
        self.view.update(|v| v.set_page(page));
    }

    pub fn clear_all(&self) {
        self.view.update(ListView::clear_all);
    }
}

/// Wraps case-insensitive occurrences of `term` in a highlight span.
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let text_lower = text.to_lowercase();
    let term_lower = term.trim().to_lowercase();
    // byte offsets of the lowered text must line up with the original
    if term_lower.is_empty() || text_lower.len() != text.len() || !text_lower.contains(&term_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&term_lower) {
        let start = last_pos + pos;
        let end = start + term_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <span>{parts}</span> }.into_any()
}
