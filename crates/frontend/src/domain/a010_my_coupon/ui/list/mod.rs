use contracts::domain::a010_my_coupon::mock::mock_my_coupons;
use contracts::domain::a010_my_coupon::MyCoupon;
use contracts::shared::format::format_percent;
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
pub fn MyCouponList() -> impl IntoView {
    let list = ListState::new(mock_my_coupons());

    view! {
        <PageFrame page_id="a010_my_coupon--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Cupons"
                subtitle="Gerencie e acompanhe todos os cupons de desconto."
                icon_name="fa-ticket"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por token ou cliente..."
                render={move |page: ListPage<MyCoupon>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Token"</TableHeaderCell>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Produtos"</TableHeaderCell>
                                    <TableHeaderCell>"Desconto"</TableHeaderCell>
                                    <TableHeaderCell>"Validade"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|coupon| {
                                    let token_view = highlight_matches(&coupon.token, &term);
                                    let client_name_view = highlight_matches(&coupon.client_name, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{token_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{client_name_view}</strong>
                                                        <span class="text-muted">{coupon.client_email.clone()}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{coupon.products}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{format_percent(coupon.discount_percent)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{coupon.valid_until.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=coupon.status.as_str() tone=coupon.status.tone() />
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
