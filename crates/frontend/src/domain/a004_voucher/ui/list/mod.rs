use contracts::domain::a004_voucher::mock::{mock_client_vouchers, mock_vouchers};
use contracts::domain::a004_voucher::Voucher;
use contracts::shared::format::format_money;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Credit vouchers. The client area sees only its own vouchers and cannot
/// issue new ones.
#[component]
#[allow(non_snake_case)]
pub fn VoucherList(#[prop(optional)] client: bool) -> impl IntoView {
    let records = if client { mock_client_vouchers() } else { mock_vouchers() };
    let list = ListState::new(records);

    view! {
        <PageFrame page_id="a004_voucher--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Vouchers"
                subtitle="Gerencie e monitore seus vouchers de crédito"
                icon_name="fa-credit-card"
            >
                <Show when=move || !client>
                    <Button appearance=ButtonAppearance::Primary>
                        <i class="fa-solid fa-plus" aria-hidden="true"></i>
                        " Novo Voucher"
                    </Button>
                </Show>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por cliente ou voucher..."
                render={move |page: ListPage<Voucher>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Código"</TableHeaderCell>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Disponível"</TableHeaderCell>
                                    <TableHeaderCell>"Utilizado"</TableHeaderCell>
                                    <TableHeaderCell>"Total"</TableHeaderCell>
                                    <TableHeaderCell>"Validade"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|voucher| {
                                    let code_view = highlight_matches(&voucher.code, &term);
                                    let client_name_view = highlight_matches(&voucher.client_name, &term);
                                    let client_email_view = highlight_matches(&voucher.client_email, &term);
                                    let used_cents = voucher.used_cents();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{code_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{client_name_view}</strong>
                                                        <span class="text-muted">{client_email_view}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_money(voucher.available_cents)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_money(used_cents)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_money(voucher.total_cents)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{voucher.valid_until.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=voucher.status.as_str() tone=voucher.status.tone() />
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
