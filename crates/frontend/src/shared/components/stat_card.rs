use crate::shared::icons::icon;
use contracts::shared::indicators::StatItem;
use leptos::prelude::*;

#[component]
pub fn StatCard(item: StatItem) -> impl IntoView {
    let class = format!("stat-card {}", item.tone.css_modifier());

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&item.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{item.label}</div>
                <div class="stat-card__value">{item.value.display()}</div>
                {item.subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Row of stat cards above a list.
#[component]
pub fn StatGrid(#[prop(into)] items: Signal<Vec<StatItem>>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {move || items.get().into_iter().map(|item| view! { <StatCard item=item /> }).collect_view()}
        </div>
    }
}
