use contracts::system::navigation::sidebar::{SidebarState, HIDE_DELAY_MS};
use contracts::system::navigation::MenuItem;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::current_path;
use crate::system::auth::storage;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Shell-wide state: the current location and the sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub location: RwSignal<String>,
    pub sidebar: RwSignal<SidebarState>,
    pub mobile_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(current_path()),
            sidebar: RwSignal::new(SidebarState::new(storage::load_sidebar_collapsed())),
            mobile_open: RwSignal::new(false),
        }
    }

    /// Keeps `location` in sync with the URL hash. Call once.
    pub fn init_router_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::hashchange, move |_| {
            let path = current_path();
            if this.location.get_untracked() != path {
                leptos::logging::log!("location changed: {}", path);
                this.location.set(path);
            }
            this.mobile_open.set(false);
        });
    }

    pub fn toggle_collapsed(&self) {
        let mut collapsed = false;
        self.sidebar.update(|s| collapsed = s.toggle_collapsed());
        storage::save_sidebar_collapsed(collapsed);
    }

    pub fn toggle_group(&self, label: &'static str) {
        self.sidebar.update(|s| s.toggle_expanded(label));
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|open| *open = !*open);
    }

    pub fn hover_enter(&self, item: MenuItem, top: i32) {
        self.sidebar.update(|s| s.hover_enter(item, top));
    }

    /// Starts the hide delay; a re-entry before it elapses keeps the flyout.
    pub fn hover_leave(&self) {
        let now = now_ms();
        self.sidebar.update(|s| s.hover_leave(now));
        self.schedule_hide(now + HIDE_DELAY_MS);
    }

    pub fn flyout_enter(&self) {
        self.sidebar.update(|s| s.flyout.flyout_enter());
    }

    pub fn flyout_leave(&self) {
        let now = now_ms();
        self.sidebar.update(|s| s.flyout.pointer_leave(now));
        self.schedule_hide(now + HIDE_DELAY_MS);
    }

    pub fn hide_flyout(&self) {
        self.sidebar.update(|s| s.flyout.hide());
    }

    fn schedule_hide(&self, deadline: u64) {
        let sidebar = self.sidebar;
        spawn_local(async move {
            TimeoutFuture::new(HIDE_DELAY_MS as u32).await;
            sidebar.update(|s| {
                s.flyout.tick(deadline);
            });
        });
    }

    pub fn open_context_menu(&self, item: &MenuItem, x: i32, y: i32) -> bool {
        let mut opened = false;
        self.sidebar.update(|s| opened = s.open_context_menu(item, x, y));
        opened
    }

    pub fn close_context_menu(&self) {
        if self.sidebar.with_untracked(|s| s.context_menu.is_some()) {
            self.sidebar.update(|s| s.close_context_menu());
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
