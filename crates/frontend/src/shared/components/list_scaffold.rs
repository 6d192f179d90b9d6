use contracts::shared::list::{ListModel, ListPage};
use leptos::prelude::*;

use super::empty_state::EmptyState;
use super::list_toolbar::ListToolbar;
use super::stat_card::StatGrid;
use crate::shared::list_utils::ListState;

/// Stats row, filter toolbar and the current page of one list. `render`
/// draws a non-empty page; an empty one shows the empty state instead.
#[component]
pub fn ListScaffold<R, F, V>(
    list: ListState<R>,
    #[prop(optional)]
    search_placeholder: &'static str,
    render: F,
) -> impl IntoView
where
    R: ListModel + Send + Sync + 'static,
    F: Fn(ListPage<R>) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <StatGrid items=Signal::derive(move || list.stats()) />
        <ListToolbar list=list search_placeholder=search_placeholder />
        <div class="page__content">
            {move || {
                let page = list.current_page();
                if page.is_empty() {
                    view! { <EmptyState /> }.into_any()
                } else {
                    render(page).into_any()
                }
            }}
        </div>
    }
}
