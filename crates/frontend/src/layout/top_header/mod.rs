//! TopHeader component - application top navigation bar.
//!
//! Contains the mobile menu toggle, brand, branch switcher, user info and
//! logout.

use contracts::system::auth::{reference_branches, UserRole};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, do_switch_branch, use_session};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (session, set_session) = use_session();

    // clients never work on a specific branch
    let shows_branches = move || session.with(|s| s.role().is_some_and(|r| r != UserRole::Cliente));
    let branch_id = move || {
        session
            .with(|s| s.branch().map(|b| b.id.to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    on:click=move |_| ctx.toggle_mobile()
                    title="Menu"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"PapiFast"</span>
            </div>

            <div class="top-header__actions">
                <Show when=shows_branches>
                    <select
                        class="top-header__branch"
                        title="Filial"
                        prop:value=branch_id
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                                do_switch_branch(set_session, id);
                            }
                        }
                    >
                        <option value="" disabled=true>"Selecione a filial"</option>
                        {reference_branches().iter().map(|b| view! {
                            <option value=b.id.to_string()>{b.name}</option>
                        }).collect_view()}
                    </select>
                </Show>

                <div class="top-header__user">
                    <span class="avatar">
                        {move || session.with(|s| s.user().map(|u| u.initials())).unwrap_or_default()}
                    </span>
                    <div class="top-header__user-text">
                        <span>
                            {move || session.with(|s| s.user().map(|u| u.name.clone()))
                                .unwrap_or_else(|| "Visitante".to_string())}
                        </span>
                        <span class="top-header__user-branch">
                            {move || session.with(|s| s.branch().map(|b| b.name)).unwrap_or("")}
                        </span>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| do_logout(set_session) title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
