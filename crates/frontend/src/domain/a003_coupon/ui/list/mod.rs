use contracts::domain::a003_coupon::mock::{mock_coupon_offers, mock_coupons};
use contracts::domain::a003_coupon::{Coupon, CouponOffer};
use contracts::shared::format::format_percent;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Dash for unclaimed coupons.
fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn CouponList() -> impl IntoView {
    let list = ListState::new(mock_coupons());

    view! {
        <PageFrame page_id="a003_coupon--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Cupons"
                subtitle="Gerencie e monitore seus cupons de desconto"
                icon_name="fa-ticket"
            >
                <Button appearance=ButtonAppearance::Primary>
                    <i class="fa-solid fa-plus" aria-hidden="true"></i>
                    " Novo Cupom"
                </Button>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por cliente, token..."
                render={move |page: ListPage<Coupon>| {
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
                                    let client_name_view = highlight_matches(&or_dash(&coupon.client_name), &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{token_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{client_name_view}</strong>
                                                        <span class="text-muted">{or_dash(&coupon.client_email)}</span>
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
                                                <TableCellLayout>{format!("{} {}", coupon.valid_date, coupon.valid_time)}</TableCellLayout>
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

/// Coupons the client can still claim, shown as cards.
#[component]
#[allow(non_snake_case)]
pub fn CouponOfferList() -> impl IntoView {
    let list = ListState::new(mock_coupon_offers());
    let (claimed, set_claimed) = signal(None::<String>);

    view! {
        <PageFrame page_id="a003_coupon_offer--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Cupons Disponíveis"
                subtitle="Veja todos os cupons que você pode resgatar e usar em seus pedidos."
                icon_name="fa-gift"
            >
                ""
            </PageHeader>

            {move || claimed.get().map(|code| view! {
                <div class="info-box info-box--success">{format!("Cupom {} resgatado.", code)}</div>
            })}

            <ListScaffold
                list=list
                search_placeholder="Buscar por código..."
                render={move |page: ListPage<CouponOffer>| view! {
                    <div class="card-grid">
                        {page.items.into_iter().map(|offer| {
                            let code = offer.code.clone();
                            view! {
                                <div class="offer-card">
                                    <div class="offer-card__discount">{offer.discount.clone()}</div>
                                    <div class="offer-card__condition">{offer.condition.clone()}</div>
                                    <div class="offer-card__code">
                                        <span class="text-muted">"Código: "</span>
                                        <strong>{offer.code.clone()}</strong>
                                    </div>
                                    <div class="offer-card__footer">
                                        <span class="text-muted">{format!("Válido até {}", offer.valid_until)}</span>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| {
                                                log::info!("Coupon offer claimed: {}", code);
                                                set_claimed.set(Some(code.clone()));
                                            }
                                        >
                                            "Resgatar"
                                        </Button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }}
            />
        </PageFrame>
    }
}
