use contracts::domain::a005_event::mock::{mock_admin_events, mock_client_events, mock_public_events};
use contracts::domain::a005_event::{ManagedEvent, PublicEvent};
use contracts::shared::list::ListPage;
use contracts::system::routes::{AppRoute, Area, Page};
use leptos::prelude::*;
use thaw::*;

use crate::routes::navigate;
use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Events published on the platform, shown as cards.
#[component]
#[allow(non_snake_case)]
pub fn PublicEventList() -> impl IntoView {
    let list = ListState::new(mock_public_events());

    view! {
        <PageFrame page_id="a005_public_event--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Eventos em Andamento"
                subtitle="Confira os últimos eventos cadastrados na plataforma."
                icon_name="fa-calendar-days"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome do evento..."
                render={move |page: ListPage<PublicEvent>| {
                    let term = list.search();
                    view! {
                        <div class="card-grid">
                            {page.items.into_iter().map(|event| view! {
                                <div class="event-card">
                                    {event.image_url.clone().map(|src| view! {
                                        <img class="event-card__image" src=src alt=event.title.clone() />
                                    })}
                                    <div class="event-card__body">
                                        <span class="event-card__category">{event.category.clone()}</span>
                                        <h3 class="event-card__title">{highlight_matches(&event.title, &term)}</h3>
                                        <div class="event-card__meta">
                                            <i class="fa-regular fa-clock" aria-hidden="true"></i>
                                            {format!(" {} às {}", event.date, event.time)}
                                        </div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    }
                }}
            />
        </PageFrame>
    }
}

/// Events of the signed-in account. The admin area lists the branch's
/// events and links to the creation form.
#[component]
#[allow(non_snake_case)]
pub fn ManagedEventList(#[prop(optional)] client: bool) -> impl IntoView {
    let records = if client { mock_client_events() } else { mock_admin_events() };
    let list = ListState::new(records);
    let new_event_path = AppRoute::Area(Area::Admin, Page::NewEvent).path();

    view! {
        <PageFrame page_id="a005_managed_event--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Eventos"
                subtitle="Crie e gerencie os eventos da sua filial."
                icon_name="fa-calendar-check"
            >
                <Show when=move || !client>
                    {
                        let path = new_event_path.clone();
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| navigate(&path)
                            >
                                <i class="fa-solid fa-plus" aria-hidden="true"></i>
                                " Novo Evento"
                            </Button>
                        }
                    }
                </Show>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome, categoria ou tipo..."
                render={move |page: ListPage<ManagedEvent>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Evento"</TableHeaderCell>
                                    <TableHeaderCell>"Período"</TableHeaderCell>
                                    <TableHeaderCell>"Categoria"</TableHeaderCell>
                                    <TableHeaderCell>"Local"</TableHeaderCell>
                                    <TableHeaderCell>"Ingressos"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|event| {
                                    let title_view = highlight_matches(&event.title, &term);
                                    let category_view = highlight_matches(&event.category, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div class="cell-stack">
                                                        <strong>{title_view}</strong>
                                                        <span class="text-muted">{event.description.clone()}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} - {}", event.date_start, event.date_end)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{event.venue_type.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{event.tickets_sold}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=event.status.as_str() tone=event.status.tone() />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }
                }}
            />
        </PageFrame>
    }
}
