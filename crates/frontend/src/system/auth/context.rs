use contracts::system::auth::UserRole;
use contracts::system::routes::home_path;
use contracts::system::session::Session;
use leptos::prelude::*;

use crate::routes::navigate;

/// Session context provider component.
///
/// The session lives in memory only; a reload returns to the login page.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(Session::new());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session
pub fn use_session() -> (ReadSignal<Session>, WriteSignal<Session>) {
    let session =
        use_context::<ReadSignal<Session>>().expect("SessionProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<Session>>().expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Sign in as `role` and go to that role's home page.
pub fn do_login(set_session: WriteSignal<Session>, role: UserRole) {
    set_session.update(|s| {
        s.login(role);
    });
    navigate(&home_path(role));
}

pub fn do_logout(set_session: WriteSignal<Session>) {
    set_session.update(Session::logout);
    navigate("/");
}

pub fn do_switch_branch(set_session: WriteSignal<Session>, branch_id: u32) {
    set_session.update(|s| {
        s.switch_branch(branch_id);
    });
}
