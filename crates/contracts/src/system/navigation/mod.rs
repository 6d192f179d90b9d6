//! Role-dependent menu trees.
//!
//! Trees are static tables; entries nest at most two levels deep because a
//! [`SubItem`] has no children of its own.

pub mod sidebar;

use super::auth::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub sub_items: &'static [SubItem],
}

/// Single shortcut offered by a secondary click on a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub target: &'static str,
}

impl MenuItem {
    const fn leaf(label: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            path,
            icon,
            sub_items: &[],
        }
    }

    const fn group(
        label: &'static str,
        path: &'static str,
        icon: &'static str,
        sub_items: &'static [SubItem],
    ) -> Self {
        Self {
            label,
            path,
            icon,
            sub_items,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// True when the entry or one of its children points at `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path || self.sub_items.iter().any(|s| s.path == current_path)
    }

    pub fn quick_action(&self) -> Option<QuickAction> {
        (self.label == "Convites").then_some(INVITE_QUICK_ACTION)
    }
}

impl SubItem {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

const fn sub(label: &'static str, path: &'static str, icon: &'static str) -> SubItem {
    SubItem { label, path, icon }
}

pub const INVITE_QUICK_ACTION: QuickAction = QuickAction {
    label: "Cadastrar Convite",
    target: "/app/convites",
};

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem::leaf("Home", "/admin/dashboard", "fa-home"),
    MenuItem::leaf("Campanhas", "/admin/campanhas", "fa-chart-line"),
    MenuItem::leaf("Convites", "/admin/convites", "fa-envelope"),
    MenuItem::leaf("Cupons", "/admin/cupons", "fa-ticket"),
    MenuItem::leaf("Voucher", "/admin/voucher", "fa-clock"),
    MenuItem::group(
        "Eventos",
        "/admin/eventos",
        "fa-calendar",
        &[
            sub("Meus Eventos", "/admin/eventos/meus", "fa-calendar-day"),
            sub("Todos os Eventos", "/admin/eventos", "fa-list"),
        ],
    ),
    MenuItem::leaf("Vender", "/admin/vender", "fa-cash-register"),
    MenuItem::leaf("Filiais", "/admin/filiais", "fa-store"),
    MenuItem::group(
        "Recibos",
        "/admin/recibos",
        "fa-file-invoice",
        &[sub("Ingressos", "/admin/recibos/ingressos", "fa-ticket-alt")],
    ),
    MenuItem::group(
        "Usuários",
        "/admin/usuarios",
        "fa-users",
        &[
            sub("Clientes", "/admin/usuarios/clientes", "fa-user-group"),
            sub("Funcionários", "/admin/usuarios/funcionarios", "fa-id-card"),
        ],
    ),
    MenuItem::leaf("Sincronizar/UAIPDV", "/admin/sincronizar", "fa-sync"),
    MenuItem::leaf("Suporte", "/admin/suporte", "fa-headset"),
];

const CLIENT_MENU: &[MenuItem] = &[
    MenuItem::leaf("Home", "/app/home", "fa-home"),
    MenuItem::leaf("Convites", "/app/convites", "fa-envelope"),
    MenuItem::group(
        "Eventos",
        "/app/eventos",
        "fa-calendar",
        &[
            sub("Meus Eventos", "/app/eventos/meus", "fa-calendar-check"),
            sub("Todos os Eventos", "/app/eventos/todos", "fa-list"),
        ],
    ),
    MenuItem::leaf("Vender", "/app/vender", "fa-ticket"),
    MenuItem::group(
        "Cupons",
        "/app/cupons",
        "fa-tags",
        &[
            sub("Disponíveis", "/app/cupons/disponiveis", "fa-cart-plus"),
            sub("Meus Cupons", "/app/cupons/meus", "fa-tag"),
        ],
    ),
    MenuItem::group(
        "Recibos",
        "/app/recibos",
        "fa-file-invoice",
        &[
            sub("De Presente", "/app/recibos/presente", "fa-gift"),
            sub("De Ingressos", "/app/recibos/ingressos", "fa-ticket-alt"),
        ],
    ),
    MenuItem::leaf("Voucher", "/app/voucher", "fa-clock"),
    MenuItem::leaf("Suporte", "/app/suporte", "fa-headset"),
];

/// Menu tree for a role. Every role other than `Cliente` gets the admin tree.
pub fn menu_for(role: UserRole) -> &'static [MenuItem] {
    match role {
        UserRole::Cliente => CLIENT_MENU,
        _ => ADMIN_MENU,
    }
}

/// First top-level entry active for `current_path`.
pub fn active_item(menu: &[MenuItem], current_path: &str) -> Option<MenuItem> {
    menu.iter().copied().find(|item| item.is_active(current_path))
}

/// Flat tile list for the mobile menu page: groups are replaced by their
/// children, leaves are kept as they are.
pub fn mobile_tiles(menu: &[MenuItem]) -> Vec<SubItem> {
    menu.iter()
        .flat_map(|item| {
            if item.has_children() {
                item.sub_items.to_vec()
            } else {
                vec![SubItem {
                    label: item.label,
                    path: item.path,
                    icon: item.icon,
                }]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(menu: &[MenuItem], label: &str) -> MenuItem {
        menu.iter().copied().find(|i| i.label == label).unwrap()
    }

    #[test]
    fn test_admin_events_group() {
        let events = find(menu_for(UserRole::Admin), "Eventos");
        let labels: Vec<&str> = events.sub_items.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Meus Eventos", "Todos os Eventos"]);
    }

    #[test]
    fn test_client_coupons_group() {
        let menu = menu_for(UserRole::Cliente);
        let coupons = find(menu, "Cupons");
        let labels: Vec<&str> = coupons.sub_items.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Disponíveis", "Meus Cupons"]);
        assert_ne!(menu, menu_for(UserRole::Admin));
    }

    #[test]
    fn test_admin_like_roles_share_tree() {
        let admin = menu_for(UserRole::Admin);
        for role in [UserRole::Gerente, UserRole::Funcionario, UserRole::Guest] {
            assert_eq!(menu_for(role), admin);
        }
    }

    #[test]
    fn test_is_active() {
        let menu = menu_for(UserRole::Admin);
        let users = find(menu, "Usuários");
        assert!(users.is_active("/admin/usuarios/funcionarios"));
        assert!(!users.is_active("/admin/usuarios/outro"));
        assert!(find(menu, "Filiais").is_active("/admin/filiais"));
        assert!(!find(menu, "Filiais").is_active("/admin/filiais/1"));

        let active = active_item(menu, "/admin/eventos/meus").map(|i| i.label);
        assert_eq!(active, Some("Eventos"));
        assert_eq!(active_item(menu, "/app/home"), None);
    }

    #[test]
    fn test_mobile_tiles_flatten_groups() {
        let menu = menu_for(UserRole::Admin);
        let tiles = mobile_tiles(menu);
        let children: usize = menu.iter().map(|i| i.sub_items.len()).sum();
        let leaves = menu.iter().filter(|i| !i.has_children()).count();
        assert_eq!(tiles.len(), children + leaves);
        assert!(tiles.iter().any(|t| t.path == "/admin/eventos/meus"));
        assert!(!tiles.iter().any(|t| t.label == "Eventos"));
    }

    #[test]
    fn test_quick_action_only_on_invites() {
        let menu = menu_for(UserRole::Cliente);
        assert_eq!(find(menu, "Convites").quick_action(), Some(INVITE_QUICK_ACTION));
        assert_eq!(find(menu, "Voucher").quick_action(), None);
        assert_eq!(INVITE_QUICK_ACTION.target, "/app/convites");
    }
}
