use contracts::system::navigation::{menu_for, mobile_tiles};
use leptos::prelude::*;

use crate::routes::navigate;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::{do_logout, use_session};

/// Full-screen menu for small screens: the role's tree flattened into tiles.
#[component]
pub fn MenuPage() -> impl IntoView {
    let (session, set_session) = use_session();
    let tiles = move || {
        session
            .with(|s| s.role().map(menu_for))
            .map(mobile_tiles)
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="sys_menu--mobile" category=PAGE_CAT_SYSTEM>
            {move || session.with(|s| s.user().cloned()).map(|user| view! {
                <div class="menu-mobile__profile">
                    <span class="avatar avatar--large">{user.initials()}</span>
                    <div>
                        <h2>{user.name.clone()}</h2>
                        <p class="text-muted">{user.email.clone()}</p>
                    </div>
                </div>
            })}

            <div class="menu-mobile__grid">
                {move || tiles().into_iter().map(|tile| view! {
                    <button class="menu-mobile__tile" on:click=move |_| navigate(tile.path)>
                        {icon(tile.icon)}
                        <span>{tile.label}</span>
                    </button>
                }).collect_view()}
            </div>

            <button class="button button--danger menu-mobile__logout" on:click=move |_| do_logout(set_session)>
                {icon("log-out")}
                "Sair"
            </button>
        </PageFrame>
    }
}
