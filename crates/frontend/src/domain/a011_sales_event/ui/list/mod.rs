use contracts::domain::a011_sales_event::mock::{mock_admin_sales_events, mock_client_sales_events};
use contracts::domain::a011_sales_event::SalesEvent;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
#[allow(non_snake_case)]
pub fn SalesEventList(#[prop(optional)] client: bool) -> impl IntoView {
    let records = if client {
        mock_client_sales_events()
    } else {
        mock_admin_sales_events()
    };
    let list = ListState::new(records);

    view! {
        <PageFrame page_id="a011_sales_event--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Vendas de Itens"
                subtitle="Gerencie as vendas de ingressos, hospedagens e entradas para seus eventos."
                icon_name="fa-cart-shopping"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome do evento..."
                render={move |page: ListPage<SalesEvent>| {
                    let term = list.search();
                    view! {
                        <div class="sales-list">
                            {page.items.into_iter().map(|event| {
                                let name = event.name.clone();
                                view! {
                                    <div class="sales-row">
                                        {event.image_url.clone().map(|src| view! {
                                            <img class="sales-row__image" src=src alt=event.name.clone() />
                                        })}
                                        <div class="sales-row__info">
                                            <strong>{highlight_matches(&event.name, &term)}</strong>
                                            <span class="text-muted">{event.date.clone()}</span>
                                            <span class="text-muted">
                                                {format!("{} vendidos de {}", event.items_sold, event.items_available)}
                                            </span>
                                        </div>
                                        <div class="sales-row__items">
                                            {event.items_for_sale.iter().map(|item| view! {
                                                <span class="chip">{item.clone()}</span>
                                            }).collect_view()}
                                        </div>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| log::info!("Open sales for event: {}", name)
                                        >
                                            "Vender"
                                        </Button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                }}
            />
        </PageFrame>
    }
}
