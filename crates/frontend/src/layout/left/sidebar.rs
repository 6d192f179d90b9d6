//! Role-scoped sidebar: wide mode with expandable groups, rail mode with a
//! hover flyout, and a secondary-click shortcut menu.

use contracts::system::navigation::{menu_for, MenuItem, SubItem};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::flyout::{ContextMenuView, Flyout};
use crate::layout::global_context::AppGlobalContext;
use crate::routes::navigate;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Viewport top of the element the handler is attached to.
fn target_top(ev: &MouseEvent) -> i32 {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect().top() as i32)
        .unwrap_or_default()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");
    let (session, _) = use_session();

    let menu = Memo::new(move |_| session.with(|s| s.role().map(menu_for).unwrap_or(&[])));
    let collapsed = move || ctx.sidebar.with(|s| s.is_collapsed());

    let close_menu = window_event_listener(leptos::ev::click, move |_| ctx.close_context_menu());
    on_cleanup(move || close_menu.remove());

    view! {
        <nav class="app-sidebar" class:app-sidebar--collapsed=collapsed>
            <div class="app-sidebar__header">
                <span class="app-sidebar__brand" class:hidden=collapsed>"PapiFast"</span>
                <button
                    class="app-sidebar__toggle"
                    title=move || if collapsed() { "Expandir menu" } else { "Recolher menu" }
                    on:click=move |_| ctx.toggle_collapsed()
                >
                    {move || if collapsed() { icon("chevrons-right") } else { icon("chevrons-left") }}
                </button>
            </div>

            <div class="app-sidebar__content">
                {move || menu.get().iter().map(|item| view! { <SidebarEntry item=*item /> }).collect_view()}
            </div>

            <div class="app-sidebar__footer">
                {move || session.with(|s| s.user().cloned()).map(|user| view! {
                    <div class="app-sidebar__user">
                        <span class="avatar">{user.initials()}</span>
                        <div class="app-sidebar__user-text" class:hidden=collapsed>
                            <span class="app-sidebar__user-name">{user.name.clone()}</span>
                            <span class="app-sidebar__user-role">{user.role.label()}</span>
                        </div>
                    </div>
                })}
            </div>

            <Flyout />
            <ContextMenuView />
        </nav>
    }
}

#[component]
fn SidebarEntry(item: MenuItem) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");
    let collapsed = move || ctx.sidebar.with(|s| s.is_collapsed());
    let expanded = move || ctx.sidebar.with(|s| s.is_expanded(item.label));
    let active = move || ctx.location.with(|path| item.is_active(path));

    let on_click = move |_| {
        if item.has_children() {
            // rail mode opens children through the flyout instead
            ctx.toggle_group(item.label);
        } else {
            ctx.hide_flyout();
            navigate(item.path);
        }
    };

    let on_context = move |ev: MouseEvent| {
        if ctx.open_context_menu(&item, ev.client_x(), ev.client_y()) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=active
                title=move || collapsed().then_some(item.label)
                on:click=on_click
                on:contextmenu=on_context
                on:mouseenter=move |ev| ctx.hover_enter(item, target_top(&ev))
                on:mouseleave=move |_| ctx.hover_leave()
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span class="app-sidebar__label" class:hidden=collapsed>{item.label}</span>
                </div>
                {item.has_children().then(|| view! {
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=expanded
                        class:hidden=collapsed
                    >
                        {icon("chevron-right")}
                    </div>
                })}
            </div>

            {item.has_children().then(|| view! {
                <Show when=move || expanded() && !collapsed()>
                    <div class="app-sidebar__children">
                        {item.sub_items.iter().map(|sub| view! { <SidebarSubEntry sub=*sub /> }).collect_view()}
                    </div>
                </Show>
            })}
        </div>
    }
}

#[component]
pub fn SidebarSubEntry(sub: SubItem) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <div
            class="app-sidebar__item app-sidebar__item--child"
            class:app-sidebar__item--active=move || ctx.location.with(|path| sub.is_active(path))
            on:click=move |_| {
                ctx.hide_flyout();
                navigate(sub.path);
            }
        >
            <div class="app-sidebar__item-content">
                {icon(sub.icon)}
                <span>{sub.label}</span>
            </div>
        </div>
    }
}
