use contracts::system::routes::{AppRoute, Area, Page};
use contracts::system::session::AccessDecision;
use leptos::prelude::*;

use crate::dashboards::{AdminDashboard, ClientHome};
use crate::domain::a001_campaign::ui::list::CampaignList;
use crate::domain::a002_invite::ui::list::InviteList;
use crate::domain::a003_coupon::ui::list::{CouponList, CouponOfferList};
use crate::domain::a004_voucher::ui::list::VoucherList;
use crate::domain::a005_event::ui::create::EventCreate;
use crate::domain::a005_event::ui::list::{ManagedEventList, PublicEventList};
use crate::domain::a006_branch_profile::ui::list::BranchProfileList;
use crate::domain::a007_user_account::ui::list::UserAccountList;
use crate::domain::a008_guest_list::ui::list::GuestListList;
use crate::domain::a009_receipt::ui::list::{GiftReceiptList, TicketReceiptList};
use crate::domain::a010_my_coupon::ui::list::MyCouponList;
use crate::domain::a011_sales_event::ui::list::SalesEventList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::navigate;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireArea;
use crate::system::pages::login::LoginPage;
use crate::system::pages::menu::MenuPage;
use crate::system::pages::support::SupportPage;
use crate::system::pages::sync::SyncPage;

/// Component for one page of one area.
fn page_view(area: Area, page: Page) -> AnyView {
    let client = area == Area::Client;
    match page {
        Page::Dashboard => view! { <AdminDashboard /> }.into_any(),
        Page::Home => view! { <ClientHome /> }.into_any(),
        Page::Campaigns => view! { <CampaignList /> }.into_any(),
        Page::Invites if client => view! { <GuestListList /> }.into_any(),
        Page::Invites => view! { <InviteList /> }.into_any(),
        Page::Coupons => view! { <CouponList /> }.into_any(),
        Page::AvailableCoupons => view! { <CouponOfferList /> }.into_any(),
        Page::MyCoupons => view! { <MyCouponList /> }.into_any(),
        Page::Vouchers => view! { <VoucherList client=client /> }.into_any(),
        Page::AllEvents => view! { <PublicEventList /> }.into_any(),
        Page::MyEvents => view! { <ManagedEventList client=client /> }.into_any(),
        Page::NewEvent => view! { <EventCreate /> }.into_any(),
        Page::Sell => view! { <SalesEventList client=client /> }.into_any(),
        Page::Branches => view! { <BranchProfileList /> }.into_any(),
        Page::TicketReceipts => view! { <TicketReceiptList /> }.into_any(),
        Page::GiftReceipts => view! { <GiftReceiptList /> }.into_any(),
        Page::ClientUsers => view! { <UserAccountList staff=false /> }.into_any(),
        Page::StaffUsers => view! { <UserAccountList staff=true /> }.into_any(),
        Page::Sync => view! { <SyncPage /> }.into_any(),
        Page::Support => view! { <SupportPage /> }.into_any(),
        Page::Menu => view! { <MenuPage /> }.into_any(),
    }
}

#[component]
fn MainLayout(route: Memo<AppRoute>) -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                (move || match route.get() {
                    AppRoute::Area(area, page) => page_view(area, page),
                    AppRoute::Login => ().into_any(),
                })
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (session, _) = use_session();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // Guard: every location change (and every login/logout) is checked.
    Effect::new(move |_| {
        let path = ctx.location.get();
        let decision = session.with(|s| AppRoute::guard(&path, s));
        if let AccessDecision::Redirect(target) = decision {
            log::info!("redirect {} -> {}", path, target);
            navigate(&target);
        }
    });

    let route = Memo::new(move |_| AppRoute::resolve(&ctx.location.get()));
    let area = Memo::new(move |_| route.get().area());

    move || match area.get() {
        None => view! { <LoginPage /> }.into_any(),
        Some(area) => view! {
            <RequireArea area=area>
                <MainLayout route=route />
            </RequireArea>
        }
        .into_any(),
    }
}
