//! Process-wide session: who is signed in and which branch they work on.
//!
//! The frontend keeps exactly one instance in a reactive context; tests build
//! a fresh one each time.

use super::auth::{find_branch, Branch, UserInfo, UserRole};
use super::routes::{home_path, PUBLIC_ENTRY_PATH};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserInfo>,
    branch: Option<Branch>,
}

/// Outcome of a route guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Redirect(String),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs in as a simulated user of `role`, binding the role's fixed
    /// branch when it has one and clearing any earlier branch otherwise.
    pub fn login(&mut self, role: UserRole) -> &UserInfo {
        let user = UserInfo::simulated(role);
        self.branch = user.branch_id.and_then(find_branch).copied();
        log::info!("signed in as {} ({})", user.name, role.as_str());
        self.user.insert(user)
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.branch = None;
    }

    /// Switches to a branch from the reference list. Unknown ids leave the
    /// session untouched; returns whether the switch happened.
    pub fn switch_branch(&mut self, branch_id: u32) -> bool {
        match find_branch(branch_id) {
            Some(branch) => {
                self.branch = Some(*branch);
                true
            }
            None => {
                log::warn!("branch {} is not in the reference list, ignored", branch_id);
                false
            }
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_authorized(&self, allowed: &[UserRole]) -> bool {
        self.role().is_some_and(|role| allowed.contains(&role))
    }

    /// Guard decision for a route open to `allowed` roles.
    pub fn check_access(&self, allowed: &[UserRole]) -> AccessDecision {
        match self.role() {
            None => AccessDecision::Redirect(PUBLIC_ENTRY_PATH.to_string()),
            Some(role) if allowed.contains(&role) => AccessDecision::Granted,
            Some(role) => AccessDecision::Redirect(home_path(role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_admin_binds_branch() {
        let mut session = Session::new();
        let user = session.login(UserRole::Admin).clone();
        assert_eq!(user.role, UserRole::Admin);
        assert!(session.is_authenticated());
        assert_eq!(session.branch().map(|b| b.id), Some(1));
    }

    #[test]
    fn test_login_client_has_no_branch() {
        let mut session = Session::new();
        session.login(UserRole::Cliente);
        assert!(session.branch().is_none());
    }

    #[test]
    fn test_relogin_replaces_branch() {
        let mut session = Session::new();
        session.login(UserRole::Admin);
        session.login(UserRole::Cliente);
        assert_eq!(session.role(), Some(UserRole::Cliente));
        assert!(session.branch().is_none());
    }

    #[test]
    fn test_switch_branch() {
        let mut session = Session::new();
        session.login(UserRole::Admin);
        assert!(session.switch_branch(2));
        assert_eq!(session.branch().map(|b| b.name), Some("Filial Rio"));
    }

    #[test]
    fn test_switch_to_unknown_branch_is_ignored() {
        let mut session = Session::new();
        session.login(UserRole::Admin);
        let before = session.clone();
        assert!(!session.switch_branch(42));
        assert_eq!(session, before);
        assert_eq!(session.branch().map(|b| b.id), Some(1));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::new();
        session.login(UserRole::Admin);
        session.logout();
        assert_eq!(session, Session::new());
        assert!(!session.is_authenticated());
        assert!(!session.is_authorized(&[UserRole::Admin]));
    }

    #[test]
    fn test_access_decisions() {
        let allowed = [UserRole::Admin, UserRole::Gerente];
        let mut session = Session::new();
        assert_eq!(session.check_access(&allowed), AccessDecision::Redirect("/".into()));

        session.login(UserRole::Cliente);
        assert_eq!(
            session.check_access(&allowed),
            AccessDecision::Redirect("/app/home".into())
        );

        session.login(UserRole::Gerente);
        assert_eq!(session.check_access(&allowed), AccessDecision::Granted);
    }
}
