use contracts::shared::format::format_money;
use contracts::shared::indicators::{StatItem, StatTone, StatValue};
use contracts::system::auth::reference_branches;
use leptos::prelude::*;
use thaw::*;

use crate::routes::navigate;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::{do_switch_branch, use_session};

fn headline_metrics() -> Vec<StatItem> {
    vec![
        StatItem::money("Vendas Hoje", 125_075, "fa-dollar-sign", StatTone::Green).with_subtitle("+15%"),
        StatItem::count("Cupons Ativos", 86, "fa-ticket", StatTone::Orange).with_subtitle("25 usados"),
        StatItem::count("Novos Clientes", 12, "fa-users", StatTone::Blue).with_subtitle("+5%"),
        StatItem::new(
            "Próximo Evento",
            StatValue::Text("Show Acústico".into()),
            "fa-calendar-day",
            StatTone::Yellow,
        )
        .with_subtitle("Em 3 dias"),
    ]
}

const WEEKLY_SALES: [(&str, u32); 7] = [
    ("S", 400),
    ("T", 300),
    ("Q", 600),
    ("Q", 800),
    ("S", 500),
    ("S", 900),
    ("D", 700),
];

/// (name, weekly sales, price in cents)
const TOP_PRODUCTS: [(&str, u32, i64); 3] = [
    ("Combo Master 1", 142, 4_900),
    ("Combo Master 2", 142, 4_900),
    ("Combo Master 3", 142, 4_900),
];

/// Bar heights as a percentage of the busiest day.
fn bar_heights(values: &[u32]) -> Vec<u32> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0; values.len()];
    }
    values.iter().map(|v| v * 100 / max).collect()
}

#[component]
fn SalesOverview() -> impl IntoView {
    let values: Vec<u32> = WEEKLY_SALES.iter().map(|(_, v)| *v).collect();
    let heights = bar_heights(&values);

    view! {
        <div class="panel panel--wide">
            <div class="panel__header">
                <h3 class="panel__title">"Visão Geral de Vendas"</h3>
                <span class="badge">"Semana"</span>
            </div>
            <div class="bar-chart">
                {WEEKLY_SALES.iter().zip(heights).map(|((day, value), height)| view! {
                    <div class="bar-chart__column" title=value.to_string()>
                        <div class="bar-chart__bar" style=format!("height: {}%", height)></div>
                        <span class="bar-chart__label">{*day}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TopProducts() -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="panel__title">
                <i class="fa-solid fa-crown" aria-hidden="true"></i>
                " Mais Vendidos"
            </h3>
            <div class="top-products">
                {TOP_PRODUCTS.iter().enumerate().map(|(i, (name, sales, price))| view! {
                    <div class="top-products__row">
                        <span class="top-products__rank">{format!("#{}", i + 1)}</span>
                        <div class="top-products__info">
                            <strong>{*name}</strong>
                            <span class="text-muted">{format!("{} vendas esta semana", sales)}</span>
                        </div>
                        <span class="top-products__price">{format_money(*price)}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

fn today_label() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("pt-BR", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (session, set_session) = use_session();
    let first_name = move || {
        session
            .with(|s| s.user().and_then(|u| u.name.split_whitespace().next().map(str::to_string)))
            .unwrap_or_default()
    };
    let branch_id = move || {
        session
            .with(|s| s.branch().map(|b| b.id.to_string()))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="d100_admin_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <div>
                        <h1 class="page__title">"Dashboard"</h1>
                        <p class="page__subtitle">
                            <i class="fa-regular fa-calendar" aria-hidden="true"></i>
                            " " {today_label()}
                        </p>
                    </div>
                </div>
                <div class="page__header-right">
                    <label class="form__label">"Filial"</label>
                    <select
                        class="form__select"
                        prop:value=branch_id
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                                do_switch_branch(set_session, id);
                            }
                        }
                    >
                        {reference_branches().iter().map(|b| view! {
                            <option value=b.id.to_string()>{b.name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="hero-banner">
                <span class="badge badge--light">
                    <i class="fa-solid fa-star" aria-hidden="true"></i>
                    " Admin Panel v2.0"
                </span>
                <h2>{move || format!("Olá, {}!", first_name())}</h2>
                <p>"Suas campanhas tiveram um aumento de " <strong>"+24%"</strong> " nesta semana."</p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| navigate("/admin/campanhas")>
                    "Ver Campanhas "
                    <i class="fa-solid fa-arrow-right" aria-hidden="true"></i>
                </Button>
            </div>

            <StatGrid items=headline_metrics() />

            <div class="dashboard-grid">
                <SalesOverview />
                <TopProducts />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_scale_to_busiest_day() {
        let values: Vec<u32> = WEEKLY_SALES.iter().map(|(_, v)| *v).collect();
        assert_eq!(bar_heights(&values), vec![44, 33, 66, 88, 55, 100, 77]);
        assert_eq!(bar_heights(&[0, 0]), vec![0, 0]);
        assert!(bar_heights(&[]).is_empty());
    }
}
