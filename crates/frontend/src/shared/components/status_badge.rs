use contracts::shared::indicators::StatTone;
use leptos::prelude::*;
use thaw::*;

fn badge_color(tone: StatTone) -> BadgeColor {
    match tone {
        StatTone::Blue => BadgeColor::Informative,
        StatTone::Green => BadgeColor::Success,
        StatTone::Yellow => BadgeColor::Warning,
        StatTone::Orange => BadgeColor::Important,
        StatTone::Red => BadgeColor::Danger,
    }
}

#[component]
pub fn StatusBadge(label: &'static str, tone: StatTone) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {label}
        </Badge>
    }
}
