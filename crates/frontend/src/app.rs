use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar and current-location state shared by the whole app.
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
