use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_collapsed = move || ctx.sidebar.with(|s| s.is_collapsed());

    view! {
        <div
            data-zone="left"
            class="left"
            class:left--collapsed=is_collapsed
            class:left--mobile-open=move || ctx.mobile_open.get()
        >
            {children()}
        </div>
        <Show when=move || ctx.mobile_open.get()>
            <div class="left__backdrop" on:click=move |_| ctx.mobile_open.set(false)></div>
        </Show>
    }
}
