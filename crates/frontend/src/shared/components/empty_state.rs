use contracts::shared::list::EMPTY_STATE_MESSAGE;
use leptos::prelude::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <i class="fa-solid fa-magnifying-glass empty-state__icon" aria-hidden="true"></i>
            <p class="empty-state__text">{EMPTY_STATE_MESSAGE}</p>
        </div>
    }
}
