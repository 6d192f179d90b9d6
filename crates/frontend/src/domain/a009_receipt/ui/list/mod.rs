use contracts::domain::a009_receipt::mock::{mock_gift_receipts, mock_ticket_receipts};
use contracts::domain::a009_receipt::{GiftReceipt, TicketReceipt};
use contracts::shared::format::format_money;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
#[allow(non_snake_case)]
pub fn TicketReceiptList() -> impl IntoView {
    let list = ListState::new(mock_ticket_receipts());

    view! {
        <PageFrame page_id="a009_ticket_receipt--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Recibos de Ingressos"
                subtitle="Gerencie e visualize todos os recibos de ingressos vendidos."
                icon_name="fa-receipt"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome, e-mail, código..."
                render={move |page: ListPage<TicketReceipt>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Código"</TableHeaderCell>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Data do Pedido"</TableHeaderCell>
                                    <TableHeaderCell>"Ingressos"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|receipt| {
                                    let code_view = highlight_matches(&receipt.code, &term);
                                    let client_name_view = highlight_matches(&receipt.client_name, &term);
                                    let client_email_view = highlight_matches(&receipt.client_email, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>"#"{code_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{client_name_view}</strong>
                                                        <span class="text-muted">{client_email_view}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{receipt.order_date.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{receipt.tickets}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_money(receipt.total_cents)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=receipt.status.as_str() tone=receipt.status.tone() />
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

#[component]
#[allow(non_snake_case)]
pub fn GiftReceiptList() -> impl IntoView {
    let list = ListState::new(mock_gift_receipts());

    view! {
        <PageFrame page_id="a009_gift_receipt--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Recibos de Presentes"
                subtitle="Acompanhe os recibos e status dos presentes dos seus eventos."
                icon_name="fa-gift"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por evento ou código..."
                render={move |page: ListPage<GiftReceipt>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Código"</TableHeaderCell>
                                    <TableHeaderCell>"Evento"</TableHeaderCell>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Data"</TableHeaderCell>
                                    <TableHeaderCell>"Itens"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|receipt| {
                                    let code_view = highlight_matches(&receipt.code, &term);
                                    let event_name_view = highlight_matches(&receipt.event_name, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>"#"{code_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{event_name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{receipt.client_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{receipt.order_date.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{receipt.items}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_money(receipt.total_cents)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=receipt.status.as_str() tone=receipt.status.tone() />
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
