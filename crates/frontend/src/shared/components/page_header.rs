use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - title row of every page
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Icon shown before the title
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon_name.map(icon)}
                <div class="page__header-text">
                    <h1 class="page__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
