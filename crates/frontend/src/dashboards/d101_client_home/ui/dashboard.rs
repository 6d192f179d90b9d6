use leptos::prelude::*;

use crate::routes::navigate;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_session;

struct QuickAccess {
    label: &'static str,
    description: &'static str,
    icon: &'static str,
    path: &'static str,
}

const QUICK_ACCESS: [QuickAccess; 3] = [
    QuickAccess {
        label: "Meus Convites",
        description: "Veja e responda aos convites recebidos.",
        icon: "fa-envelope",
        path: "/app/convites",
    },
    QuickAccess {
        label: "Meus Eventos",
        description: "Crie e gerencie seus próprios eventos.",
        icon: "fa-calendar-check",
        path: "/app/eventos/meus",
    },
    QuickAccess {
        label: "Meus Cupons",
        description: "Confira os descontos que você ganhou.",
        icon: "fa-ticket",
        path: "/app/cupons/meus",
    },
];

struct Upcoming {
    title: &'static str,
    day: &'static str,
    month: &'static str,
    time: &'static str,
    location: &'static str,
    icon: &'static str,
}

const UPCOMING: [Upcoming; 3] = [
    Upcoming { title: "Sexta-Feira Country", day: "04", month: "DEZ", time: "16:36", location: "Arena Principal", icon: "fa-guitar" },
    Upcoming { title: "Festival de Verão", day: "04", month: "DEZ", time: "17:24", location: "Espaço Garden", icon: "fa-sun" },
    Upcoming { title: "Noite de Gala", day: "12", month: "DEZ", time: "20:00", location: "Salão Nobre", icon: "fa-champagne-glasses" },
];

#[component]
pub fn ClientHome() -> impl IntoView {
    let (session, _) = use_session();
    let first_name = move || {
        session
            .with(|s| s.user().and_then(|u| u.name.split_whitespace().next().map(str::to_string)))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="d101_client_home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="hero-banner">
                <h1>{move || format!("Olá, {}!", first_name())}</h1>
                <p>"Bem-vindo de volta. Confira seus convites, eventos e cupons."</p>
            </div>

            <h2 class="section-title">"Acesso Rápido"</h2>
            <div class="quick-access">
                {QUICK_ACCESS.iter().map(|item| {
                    let path = item.path;
                    view! {
                        <div class="quick-access__card" on:click=move |_| navigate(path)>
                            <i class=format!("fa-solid {}", item.icon) aria-hidden="true"></i>
                            <h3>{item.label}</h3>
                            <p class="text-muted">{item.description}</p>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="section-header">
                <h2 class="section-title">"Próximos Eventos"</h2>
                <a class="link" on:click=move |_| navigate("/app/eventos/todos")>
                    "Ver todos "
                    <i class="fa-solid fa-arrow-right" aria-hidden="true"></i>
                </a>
            </div>
            <div class="upcoming-list">
                {UPCOMING.iter().map(|event| view! {
                    <div class="upcoming-list__item">
                        <div class="upcoming-list__date">
                            <span class="upcoming-list__day">{event.day}</span>
                            <span class="upcoming-list__month">{event.month}</span>
                        </div>
                        <i class=format!("fa-solid {} upcoming-list__icon", event.icon) aria-hidden="true"></i>
                        <div class="upcoming-list__text">
                            <h3>{event.title}</h3>
                            <span class="text-muted">
                                <i class="fa-regular fa-clock" aria-hidden="true"></i>
                                " " {event.time} " · "
                                <i class="fa-solid fa-location-dot" aria-hidden="true"></i>
                                " " {event.location}
                            </span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
