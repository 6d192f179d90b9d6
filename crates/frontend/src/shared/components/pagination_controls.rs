use crate::shared::icons::icon;
use contracts::shared::list::page_window;
use leptos::prelude::*;

/// Numbered page buttons shown at once.
const WINDOW_WIDTH: usize = 5;

/// PaginationControls component - first/prev, numbered window, next/last.
///
/// Pages are 1-based, matching the list controller.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (never below 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Size of the filtered collection
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="Primeira página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), WINDOW_WIDTH)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--number"
                                class:pagination-btn--active=page == current
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_last
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=at_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "Página {} de {} ({} registros)",
                    current_page.get(),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
        </div>
    }
}
