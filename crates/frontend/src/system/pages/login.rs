use contracts::system::auth::UserRole;
use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_session};

/// Profiles offered on the simulated login screen.
const LOGIN_OPTIONS: [(UserRole, &str, &str, &str); 3] = [
    (UserRole::Admin, "Entrar como Administrador", "fa-lock", "btn-primary"),
    (UserRole::Gerente, "Entrar como Gerente", "fa-user-tie", "btn-secondary"),
    (UserRole::Cliente, "Entrar como Cliente", "fa-user", "btn-success"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_session) = use_session();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"PapiFast"</h1>
                <h2>"Escolha um perfil para simular o acesso"</h2>

                <div class="login-options">
                    {LOGIN_OPTIONS.into_iter().map(|(role, label, icon_class, button_class)| view! {
                        <button
                            class=button_class
                            on:click=move |_| {
                                log::info!("login as {}", role.as_str());
                                do_login(set_session, role);
                            }
                        >
                            <i class=format!("fa-solid {}", icon_class) aria-hidden="true"></i>
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
