use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel with pagination
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls shown in the header row
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Active filter chips, shown under the panel even when collapsed
    #[prop(optional, into)]
    filter_tags: ViewFn,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
            <div class="filter-panel__tags">
                {filter_tags.run()}
            </div>
        </div>
    }
}

/// FilterTag component - chip for one active filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
