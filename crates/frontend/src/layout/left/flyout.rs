use leptos::prelude::*;

use super::sidebar::SidebarSubEntry;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::navigate;

/// Floating panel next to the rail listing the hovered entry's children.
#[component]
pub fn Flyout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");
    let target = move || ctx.sidebar.with(|s| s.flyout.target().copied());

    move || {
        target().map(|target| {
            let item = target.item;
            view! {
                <div
                    class="sidebar-flyout"
                    style:top=format!("{}px", target.top)
                    on:mouseenter=move |_| ctx.flyout_enter()
                    on:mouseleave=move |_| ctx.flyout_leave()
                >
                    <div
                        class="sidebar-flyout__title"
                        on:click=move |_| {
                            if !item.has_children() {
                                ctx.hide_flyout();
                                navigate(item.path);
                            }
                        }
                    >
                        {item.label}
                    </div>
                    {item.sub_items.iter().map(|sub| view! { <SidebarSubEntry sub=*sub /> }).collect_view()}
                </div>
            }
        })
    }
}

/// Shortcut menu opened by a secondary click on a menu entry.
#[component]
pub fn ContextMenuView() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext not found");

    move || {
        ctx.sidebar.with(|s| s.context_menu).map(|menu| {
            let target = menu.action.target;
            view! {
                <div
                    class="context-menu"
                    style:left=format!("{}px", menu.x)
                    style:top=format!("{}px", menu.y)
                >
                    <button
                        class="context-menu__item"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.close_context_menu();
                            navigate(target);
                        }
                    >
                        <i class="fa-solid fa-plus" aria-hidden="true"></i>
                        {menu.action.label}
                    </button>
                </div>
            }
        })
    }
}
