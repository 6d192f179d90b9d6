use contracts::shared::list::ListModel;
use leptos::prelude::*;

use super::filter_panel::{FilterPanel, FilterTag};
use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListState;

/// Search box, enum selects, active chips and pagination for one list.
#[component]
pub fn ListToolbar<R>(
    list: ListState<R>,
    #[prop(optional)]
    search_placeholder: &'static str,
) -> impl IntoView
where
    R: ListModel + Send + Sync + 'static,
{
    let is_expanded = RwSignal::new(true);
    // the set of enum filters is fixed per list; only their values change
    let filters = list.criteria_untracked().enums().to_vec();
    let placeholder = if search_placeholder.is_empty() {
        "Buscar..."
    } else {
        search_placeholder
    };

    let selects = filters
        .into_iter()
        .map(|filter| {
            let field = filter.field;
            view! {
                <div class="form-group">
                    <label class="form__label">{filter.label}</label>
                    <select
                        class="form__select"
                        prop:value=move || list.filter_value(field)
                        on:change=move |ev| list.set_filter(field, event_target_value(&ev))
                    >
                        <option value=filter.sentinel>{filter.sentinel}</option>
                        {filter.options.iter().map(|option| view! {
                            <option value=option.clone()>{option.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>
            }
        })
        .collect_view();

    let tags = move || {
        list.criteria()
            .enums()
            .iter()
            .filter(|f| !f.is_unconstrained())
            .map(|f| {
                let field = f.field;
                let sentinel = f.sentinel;
                view! {
                    <FilterTag
                        label=format!("{}: {}", f.label, f.value())
                        on_remove=Callback::new(move |_| list.set_filter(field, sentinel.to_string()))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=Signal::derive(move || list.active_filters())
            pagination_controls=move || view! {
                <PaginationControls
                    current_page=Signal::derive(move || list.page())
                    total_pages=Signal::derive(move || list.total_pages())
                    total_count=Signal::derive(move || list.filtered_count())
                    on_page_change=Callback::new(move |page| list.set_page(page))
                />
            }
            filter_tags=tags
        >
            <div class="filter-panel__fields">
                <div class="form-group form-group--search">
                    <label class="form__label">"Buscar"</label>
                    <div class="form__search">
                        {icon("search")}
                        <input
                            type="search"
                            class="form__input"
                            placeholder=placeholder
                            prop:value=move || list.search()
                            on:input=move |ev| list.set_search(event_target_value(&ev))
                        />
                    </div>
                </div>
                {selects}
                <button
                    class="button button--secondary"
                    on:click=move |_| list.clear_all()
                    disabled=move || list.active_filters() == 0
                >
                    "Limpar filtros"
                </button>
            </div>
        </FilterPanel>
    }
}
