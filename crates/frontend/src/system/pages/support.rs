use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

const SUBJECTS: [&str; 4] = [
    "Dúvida sobre o sistema",
    "Reportar um problema",
    "Sugestão de melhoria",
    "Outros",
];

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Seg - Sex", "08:00 - 18:00"),
    ("Sábado", "09:00 - 13:00"),
    ("Domingo", "Fechado"),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(SUBJECTS[0].to_string());
    let message = RwSignal::new(String::new());
    let (sent, set_sent) = signal(false);

    let can_send = move || !name.get().trim().is_empty() && !message.get().trim().is_empty();

    let on_submit = move |_| {
        log::info!("support request: {} <{}> [{}]", name.get(), email.get(), subject.get());
        set_sent.set(true);
        message.set(String::new());
    };

    view! {
        <PageFrame page_id="sys_support--form" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Suporte Técnico"
                subtitle="Precisa de ajuda? Entre em contato com nossa equipe especializada."
                icon_name="fa-headset"
            >
                ""
            </PageHeader>

            <div class="support-grid">
                <div class="support-grid__channels">
                    <div class="card">
                        <i class="fa-brands fa-whatsapp" aria-hidden="true"></i>
                        <h3>"WhatsApp"</h3>
                        <p class="text-muted">"Atendimento rápido via chat."</p>
                    </div>
                    <div class="card">
                        <i class="fa-solid fa-envelope" aria-hidden="true"></i>
                        <h3>"E-mail"</h3>
                        <p class="text-muted">"Para dúvidas mais complexas."</p>
                    </div>
                    <div class="card card--accent">
                        <h3>"Horário de Atendimento"</h3>
                        {OPENING_HOURS.into_iter().map(|(days, hours)| view! {
                            <div class="support-hours__row">
                                <span>{days}</span>
                                <span>{hours}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="card support-grid__form">
                    <h3>"Envie uma mensagem"</h3>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <Label>"Seu Nome"</Label>
                        <Input value=name />
                        <Label>"Seu E-mail"</Label>
                        <Input value=email />
                        <Label>"Assunto"</Label>
                        <Select value=subject>
                            {SUBJECTS.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                        </Select>
                        <Label>"Mensagem"</Label>
                        <Textarea value=message placeholder="Descreva sua solicitação..." />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_submit
                            disabled=Signal::derive(move || !can_send())
                        >
                            "Enviar Mensagem"
                        </Button>
                        <Show when=move || sent.get()>
                            <div class="info-box">"Mensagem enviada. Responderemos em breve."</div>
                        </Show>
                    </Flex>
                </div>
            </div>
        </PageFrame>
    }
}
