use contracts::system::routes::Area;
use leptos::prelude::*;

use super::context::use_session;

/// Renders children only while the session may enter `area`.
/// Redirects are issued by the router.
#[component]
pub fn RequireArea(area: Area, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.is_authorized(area.allowed_roles()))
            fallback=|| view! { <div class="page page--loading"></div> }
        >
            {children()}
        </Show>
    }
}
