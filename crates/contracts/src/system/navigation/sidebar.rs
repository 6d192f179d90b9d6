//! Sidebar presentation state: wide/rail mode, expanded groups, the rail
//! hover flyout and the secondary-click menu.
//!
//! Time is passed in as milliseconds so the flyout can be driven by any
//! clock; the frontend feeds it `Date.now()` and a timer tick.

use super::{MenuItem, QuickAction};

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Grace period before a flyout disappears after the pointer leaves.
pub const HIDE_DELAY_MS: u64 = 150;

/// Reads the stored rail preference; only the literal `"true"` collapses.
pub fn parse_collapsed_pref(raw: Option<&str>) -> bool {
    raw == Some("true")
}

pub fn collapsed_pref_value(collapsed: bool) -> &'static str {
    if collapsed {
        "true"
    } else {
        "false"
    }
}

/// Item the flyout belongs to, with its vertical offset inside the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyoutTarget {
    pub item: MenuItem,
    pub top: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flyout {
    #[default]
    Hidden,
    Showing(FlyoutTarget),
    PendingHide { target: FlyoutTarget, deadline: u64 },
}

impl Flyout {
    pub fn target(&self) -> Option<&FlyoutTarget> {
        match self {
            Flyout::Hidden => None,
            Flyout::Showing(target) | Flyout::PendingHide { target, .. } => Some(target),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Flyout::Hidden)
    }

    /// Pointer entered a rail item: show it at once, cancelling any hide.
    pub fn hover_enter(&mut self, target: FlyoutTarget) {
        *self = Flyout::Showing(target);
    }

    /// Pointer left the rail item or the flyout: schedule the hide.
    pub fn pointer_leave(&mut self, now: u64) {
        if let Flyout::Showing(target) = *self {
            *self = Flyout::PendingHide {
                target,
                deadline: now + HIDE_DELAY_MS,
            };
        }
    }

    /// Pointer reached the flyout panel before the deadline.
    pub fn flyout_enter(&mut self) {
        if let Flyout::PendingHide { target, .. } = *self {
            *self = Flyout::Showing(target);
        }
    }

    /// Timer tick; hides once the deadline has passed. Returns whether the
    /// state changed.
    pub fn tick(&mut self, now: u64) -> bool {
        match *self {
            Flyout::PendingHide { deadline, .. } if now >= deadline => {
                *self = Flyout::Hidden;
                true
            }
            _ => false,
        }
    }

    pub fn hide(&mut self) {
        *self = Flyout::Hidden;
    }
}

/// Open secondary-click menu, positioned at the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    pub x: i32,
    pub y: i32,
    pub action: QuickAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SidebarState {
    collapsed: bool,
    expanded: Vec<&'static str>,
    pub flyout: Flyout,
    pub context_menu: Option<ContextMenu>,
}

impl SidebarState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            ..Self::default()
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Switches between wide and rail mode. Any flyout is dropped.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.flyout.hide();
        self.collapsed
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(&label)
    }

    /// Opens or closes a group in wide mode. Several groups may be open;
    /// in rail mode the flyout takes over and this does nothing.
    pub fn toggle_expanded(&mut self, label: &'static str) {
        if self.collapsed {
            return;
        }
        if let Some(pos) = self.expanded.iter().position(|l| *l == label) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(label);
        }
    }

    pub fn hover_enter(&mut self, item: MenuItem, top: i32) {
        if self.collapsed {
            self.flyout.hover_enter(FlyoutTarget { item, top });
        }
    }

    pub fn hover_leave(&mut self, now: u64) {
        if self.collapsed {
            self.flyout.pointer_leave(now);
        }
    }

    /// Secondary click; opens the menu only for entries with a shortcut.
    /// Returns whether the platform menu should be suppressed.
    pub fn open_context_menu(&mut self, item: &MenuItem, x: i32, y: i32) -> bool {
        match item.quick_action() {
            Some(action) => {
                self.context_menu = Some(ContextMenu { x, y, action });
                true
            }
            None => false,
        }
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::UserRole;
    use crate::system::navigation::menu_for;

    fn item(label: &str) -> MenuItem {
        menu_for(UserRole::Admin)
            .iter()
            .copied()
            .find(|i| i.label == label)
            .unwrap()
    }

    #[test]
    fn test_collapsed_pref() {
        assert!(parse_collapsed_pref(Some("true")));
        assert!(!parse_collapsed_pref(Some("false")));
        assert!(!parse_collapsed_pref(Some("TRUE")));
        assert!(!parse_collapsed_pref(Some("1")));
        assert!(!parse_collapsed_pref(None));
        assert_eq!(collapsed_pref_value(true), "true");
    }

    #[test]
    fn test_expand_multiple_groups() {
        let mut state = SidebarState::new(false);
        state.toggle_expanded("Eventos");
        state.toggle_expanded("Usuários");
        assert!(state.is_expanded("Eventos"));
        assert!(state.is_expanded("Usuários"));
        state.toggle_expanded("Eventos");
        assert!(!state.is_expanded("Eventos"));
        assert!(state.is_expanded("Usuários"));
    }

    #[test]
    fn test_expand_ignored_in_rail_mode() {
        let mut state = SidebarState::new(true);
        state.toggle_expanded("Eventos");
        assert!(!state.is_expanded("Eventos"));
    }

    #[test]
    fn test_hover_only_in_rail_mode() {
        let mut wide = SidebarState::new(false);
        wide.hover_enter(item("Eventos"), 10);
        assert!(!wide.flyout.is_visible());

        let mut rail = SidebarState::new(true);
        rail.hover_enter(item("Eventos"), 10);
        assert_eq!(rail.flyout.target().map(|t| t.item.label), Some("Eventos"));
        rail.toggle_collapsed();
        assert!(!rail.flyout.is_visible());
    }

    #[test]
    fn test_flyout_hide_is_debounced() {
        let mut state = SidebarState::new(true);
        state.hover_enter(item("Eventos"), 0);
        state.hover_leave(1_000);
        assert!(!state.flyout.tick(1_149));
        assert!(state.flyout.is_visible());
        assert!(state.flyout.tick(1_150));
        assert_eq!(state.flyout, Flyout::Hidden);
    }

    #[test]
    fn test_flyout_enter_cancels_hide() {
        let mut state = SidebarState::new(true);
        state.hover_enter(item("Recibos"), 40);
        state.hover_leave(0);
        state.flyout.flyout_enter();
        assert!(!state.flyout.tick(10_000));
        assert!(matches!(state.flyout, Flyout::Showing(_)));

        state.flyout.pointer_leave(500);
        assert!(state.flyout.tick(650));
        assert!(!state.flyout.is_visible());
    }

    #[test]
    fn test_new_hover_replaces_pending_target() {
        let mut state = SidebarState::new(true);
        state.hover_enter(item("Eventos"), 0);
        state.hover_leave(0);
        state.hover_enter(item("Filiais"), 60);
        assert!(!state.flyout.tick(1_000));
        let target = state.flyout.target().copied().unwrap();
        assert_eq!(target.item.label, "Filiais");
        assert_eq!(target.top, 60);
    }

    #[test]
    fn test_context_menu_only_for_invites() {
        let mut state = SidebarState::new(false);
        assert!(!state.open_context_menu(&item("Cupons"), 5, 5));
        assert!(state.context_menu.is_none());

        assert!(state.open_context_menu(&item("Convites"), 12, 34));
        let menu = state.context_menu.unwrap();
        assert_eq!((menu.x, menu.y), (12, 34));
        assert_eq!(menu.action.label, "Cadastrar Convite");
        state.close_context_menu();
        assert!(state.context_menu.is_none());
    }
}
