pub mod api;

use contracts::shared::generation::GiftSuggestion;
use contracts::system::routes::{AppRoute, Area, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::api::{generate_event_description, suggest_gift_list};
use crate::routes::navigate;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};

const EVENT_TYPES: [&str; 5] = [
    "Aniversário",
    "Casamento",
    "Chá de Bebê",
    "Show",
    "Festa Corporativa",
];

/// New event form with the description and gift list helpers.
#[component]
#[allow(non_snake_case)]
pub fn EventCreate() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let keywords = RwSignal::new(String::new());
    let event_type = RwSignal::new(EVENT_TYPES[0].to_string());
    let description = RwSignal::new(String::new());
    let gifts = RwSignal::new(Vec::<GiftSuggestion>::new());
    let (describing, set_describing) = signal(false);
    let (suggesting, set_suggesting) = signal(false);
    let (saved, set_saved) = signal(false);

    let on_describe = move |_| {
        let event_name = name.get_untracked();
        if event_name.trim().is_empty() {
            return;
        }
        let raw_keywords = keywords.get_untracked();
        set_describing.set(true);
        spawn_local(async move {
            let text = generate_event_description(&event_name, &raw_keywords).await;
            description.set(text);
            set_describing.set(false);
        });
    };

    let on_suggest = move |_| {
        let kind = event_type.get_untracked();
        set_suggesting.set(true);
        spawn_local(async move {
            let items = suggest_gift_list(&kind).await;
            log::debug!("Received {} gift suggestions for {}", items.len(), kind);
            gifts.set(items);
            set_suggesting.set(false);
        });
    };

    let on_save = move |_| {
        log::info!("Event draft saved: {}", name.get_untracked());
        set_saved.set(true);
    };

    let back_path = AppRoute::Area(Area::Admin, Page::MyEvents).path();

    view! {
        <PageFrame page_id="a005_event--create" category=PAGE_CAT_FORM>
            <PageHeader
                title="Novo Evento"
                subtitle="Preencha os dados do evento. Use os assistentes para gerar a descrição e sugerir presentes."
                icon_name="fa-calendar-plus"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate(&back_path)
                >
                    "Voltar"
                </Button>
            </PageHeader>

            <div class="form-card">
                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Nome do evento"</Label>
                        <Input value=name placeholder="Ex: Festival de Verão" />
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Palavras-chave (separadas por vírgula)"</Label>
                        <Input value=keywords placeholder="música, praia, pôr do sol" />
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Descrição"</Label>
                        <Textarea value=description placeholder="Descreva o evento..." />
                        <div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=on_describe
                                disabled=Signal::derive(move || describing.get() || name.get().trim().is_empty())
                            >
                                <i class="fa-solid fa-wand-magic-sparkles" aria-hidden="true"></i>
                                {move || if describing.get() { " Gerando..." } else { " Gerar descrição" }}
                            </Button>
                        </div>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Tipo de evento"</Label>
                        <Select value=event_type>
                            {EVENT_TYPES
                                .iter()
                                .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                .collect_view()}
                        </Select>
                        <div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=on_suggest
                                disabled=suggesting
                            >
                                <i class="fa-solid fa-gift" aria-hidden="true"></i>
                                {move || if suggesting.get() { " Buscando..." } else { " Sugerir presentes" }}
                            </Button>
                        </div>
                    </Flex>

                    <Show when=move || !gifts.get().is_empty()>
                        <ul class="gift-list">
                            <For
                                each=move || gifts.get()
                                key=|gift| gift.item.clone()
                                children=|gift| view! {
                                    <li class="gift-list__item">
                                        <span>{gift.item}</span>
                                        <span class="text-muted">{gift.price_estimate}</span>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>

                    <Show when=move || saved.get()>
                        <div class="info-box info-box--success">"Evento salvo como rascunho."</div>
                    </Show>

                    <div>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            "Salvar evento"
                        </Button>
                    </div>
                </Flex>
            </div>
        </PageFrame>
    }
}
