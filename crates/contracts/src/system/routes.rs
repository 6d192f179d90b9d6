//! Route table of the two role-scoped areas.
//!
//! Paths are plain strings (`/admin/cupons`); the frontend carries them in the
//! URL hash. Unknown pages inside an area resolve to the area's default page,
//! anything else to the public entry.

use super::auth::UserRole;
use super::session::{AccessDecision, Session};

pub const PUBLIC_ENTRY_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Admin,
    Client,
}

impl Area {
    pub const ALL: [Area; 2] = [Area::Admin, Area::Client];

    pub fn prefix(&self) -> &'static str {
        match self {
            Area::Admin => "/admin",
            Area::Client => "/app",
        }
    }

    pub fn allowed_roles(&self) -> &'static [UserRole] {
        match self {
            Area::Admin => &[UserRole::Admin, UserRole::Gerente],
            Area::Client => &[UserRole::Cliente, UserRole::Admin],
        }
    }

    pub fn default_page(&self) -> Page {
        match self {
            Area::Admin => Page::Dashboard,
            Area::Client => Page::Home,
        }
    }

    pub fn pages(&self) -> &'static [Page] {
        match self {
            Area::Admin => ADMIN_PAGES,
            Area::Client => CLIENT_PAGES,
        }
    }

    /// Area whose prefix owns `path` (`/admin` and `/admin/...`).
    pub fn of_path(path: &str) -> Option<Area> {
        Area::ALL.into_iter().find(|area| {
            path.strip_prefix(area.prefix())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

/// Every screen reachable from the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Home,
    Campaigns,
    Invites,
    Coupons,
    AvailableCoupons,
    MyCoupons,
    Vouchers,
    AllEvents,
    MyEvents,
    NewEvent,
    Sell,
    Branches,
    TicketReceipts,
    GiftReceipts,
    ClientUsers,
    StaffUsers,
    Sync,
    Support,
    Menu,
}

const ADMIN_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Campaigns,
    Page::Invites,
    Page::Coupons,
    Page::Vouchers,
    Page::AllEvents,
    Page::MyEvents,
    Page::NewEvent,
    Page::Sell,
    Page::Branches,
    Page::TicketReceipts,
    Page::ClientUsers,
    Page::StaffUsers,
    Page::Sync,
    Page::Support,
    Page::Menu,
];

const CLIENT_PAGES: &[Page] = &[
    Page::Home,
    Page::Invites,
    Page::MyEvents,
    Page::AllEvents,
    Page::Sell,
    Page::AvailableCoupons,
    Page::MyCoupons,
    Page::GiftReceipts,
    Page::TicketReceipts,
    Page::Vouchers,
    Page::Support,
    Page::Menu,
];

impl Page {
    /// Path segment below the area prefix.
    pub fn segment(&self, area: Area) -> &'static str {
        match (self, area) {
            (Page::Dashboard, _) => "dashboard",
            (Page::Home, _) => "home",
            (Page::Campaigns, _) => "campanhas",
            (Page::Invites, _) => "convites",
            (Page::Coupons, _) => "cupons",
            (Page::AvailableCoupons, _) => "cupons/disponiveis",
            (Page::MyCoupons, _) => "cupons/meus",
            (Page::Vouchers, _) => "voucher",
            (Page::AllEvents, Area::Admin) => "eventos",
            (Page::AllEvents, Area::Client) => "eventos/todos",
            (Page::MyEvents, _) => "eventos/meus",
            (Page::NewEvent, _) => "eventos/novo",
            (Page::Sell, _) => "vender",
            (Page::Branches, _) => "filiais",
            (Page::TicketReceipts, _) => "recibos/ingressos",
            (Page::GiftReceipts, _) => "recibos/presente",
            (Page::ClientUsers, _) => "usuarios/clientes",
            (Page::StaffUsers, _) => "usuarios/funcionarios",
            (Page::Sync, _) => "sincronizar",
            (Page::Support, _) => "suporte",
            (Page::Menu, _) => "menu",
        }
    }
}

/// A resolved location: the public entry or a page of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Area(Area, Page),
}

impl AppRoute {
    /// Resolves a path, falling back to the area default for unknown pages
    /// and to the login page for unknown areas.
    pub fn resolve(path: &str) -> AppRoute {
        let path = normalize(path);
        let Some(area) = Area::of_path(&path) else {
            return AppRoute::Login;
        };
        let rest = path[area.prefix().len()..].trim_start_matches('/');
        let page = area
            .pages()
            .iter()
            .copied()
            .find(|page| page.segment(area) == rest)
            .unwrap_or_else(|| area.default_page());
        AppRoute::Area(area, page)
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => PUBLIC_ENTRY_PATH.to_string(),
            AppRoute::Area(area, page) => format!("{}/{}", area.prefix(), page.segment(*area)),
        }
    }

    pub fn area(&self) -> Option<Area> {
        match self {
            AppRoute::Login => None,
            AppRoute::Area(area, _) => Some(*area),
        }
    }

    /// Where the guard sends this session: `Granted` to stay, or a redirect
    /// target. Also redirects when the path was not canonical.
    pub fn guard(path: &str, session: &Session) -> AccessDecision {
        let route = AppRoute::resolve(path);
        let decision = match route.area() {
            None => AccessDecision::Granted,
            Some(area) => session.check_access(area.allowed_roles()),
        };
        match decision {
            AccessDecision::Granted if route.path() != normalize(path) => {
                AccessDecision::Redirect(route.path())
            }
            other => other,
        }
    }
}

/// Strips the hash marker, query string and trailing slashes.
pub fn normalize(path: &str) -> String {
    let path = path.trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        PUBLIC_ENTRY_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Landing page of a role: the default page of the first area admitting it.
pub fn home_path(role: UserRole) -> String {
    Area::ALL
        .into_iter()
        .find(|area| area.allowed_roles().contains(&role))
        .map(|area| AppRoute::Area(area, area.default_page()).path())
        .unwrap_or_else(|| PUBLIC_ENTRY_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_pages() {
        assert_eq!(AppRoute::resolve("/admin/cupons"), AppRoute::Area(Area::Admin, Page::Coupons));
        assert_eq!(
            AppRoute::resolve("/app/eventos/todos"),
            AppRoute::Area(Area::Client, Page::AllEvents)
        );
        assert_eq!(
            AppRoute::resolve("#/admin/eventos/"),
            AppRoute::Area(Area::Admin, Page::AllEvents)
        );
        assert_eq!(AppRoute::resolve("/"), AppRoute::Login);
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(AppRoute::resolve("/admin/nada"), AppRoute::Area(Area::Admin, Page::Dashboard));
        assert_eq!(AppRoute::resolve("/app"), AppRoute::Area(Area::Client, Page::Home));
        assert_eq!(AppRoute::resolve("/app/campanhas"), AppRoute::Area(Area::Client, Page::Home));
        assert_eq!(AppRoute::resolve("/administrator"), AppRoute::Login);
        assert_eq!(AppRoute::resolve("/outro"), AppRoute::Login);
    }

    #[test]
    fn test_every_page_round_trips_its_path() {
        for area in Area::ALL {
            for page in area.pages() {
                let route = AppRoute::Area(area, *page);
                assert_eq!(AppRoute::resolve(&route.path()), route);
            }
        }
    }

    #[test]
    fn test_home_paths() {
        assert_eq!(home_path(UserRole::Admin), "/admin/dashboard");
        assert_eq!(home_path(UserRole::Gerente), "/admin/dashboard");
        assert_eq!(home_path(UserRole::Cliente), "/app/home");
        assert_eq!(home_path(UserRole::Funcionario), "/");
        assert_eq!(home_path(UserRole::Guest), "/");
    }

    #[test]
    fn test_guard_unauthenticated_goes_to_entry() {
        let session = Session::new();
        assert_eq!(
            AppRoute::guard("/admin/campanhas", &session),
            AccessDecision::Redirect("/".into())
        );
        assert_eq!(AppRoute::guard("/", &session), AccessDecision::Granted);
    }

    #[test]
    fn test_guard_client_in_admin_area_goes_home() {
        let mut session = Session::new();
        session.login(UserRole::Cliente);
        assert_eq!(
            AppRoute::guard("/admin/campanhas", &session),
            AccessDecision::Redirect("/app/home".into())
        );
        assert_eq!(AppRoute::guard("/app/convites", &session), AccessDecision::Granted);
    }

    #[test]
    fn test_guard_admin_reaches_both_areas() {
        let mut session = Session::new();
        session.login(UserRole::Admin);
        assert_eq!(AppRoute::guard("/admin/filiais", &session), AccessDecision::Granted);
        assert_eq!(AppRoute::guard("/app/voucher", &session), AccessDecision::Granted);
        assert_eq!(
            AppRoute::guard("/admin/xyz", &session),
            AccessDecision::Redirect("/admin/dashboard".into())
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("#"), "/");
        assert_eq!(normalize("#/app/home?x=1"), "/app/home");
        assert_eq!(normalize("app/home/"), "/app/home");
    }
}
