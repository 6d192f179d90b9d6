use super::aggregate::{Coupon, CouponOffer, CouponStatus};

#[allow(clippy::too_many_arguments)]
fn coupon(
    id: u32,
    date: &str,
    time: &str,
    client: Option<(&str, &str)>,
    token: &str,
    status: CouponStatus,
    products: u32,
    discount_percent: u8,
) -> Coupon {
    Coupon {
        id,
        valid_date: date.into(),
        valid_time: time.into(),
        client_name: client.map(|(name, _)| name.to_string()),
        client_email: client.map(|(_, email)| email.to_string()),
        token: token.into(),
        status,
        products,
        discount_percent,
    }
}

pub fn mock_coupons() -> Vec<Coupon> {
    use CouponStatus::*;
    vec![
        coupon(1, "18/12/2025", "21:53", Some(("Alex", "alexssandromercer@gmail.com")), "#teste", EmUso, 4, 20),
        coupon(2, "18/12/2025", "21:53", None, "#teste", Disponivel, 4, 20),
        coupon(3, "20/12/2025", "10:00", Some(("João Silva", "joao.silva@email.com")), "#natal25", Utilizado, 2, 15),
        coupon(4, "25/12/2025", "23:59", None, "#verao10", Disponivel, 1, 10),
        coupon(5, "30/12/2025", "18:00", Some(("Maria Oliveira", "maria.o@email.com")), "#vip_gold", EmUso, 5, 50),
    ]
}

pub fn mock_coupon_offers() -> Vec<CouponOffer> {
    (1..=8)
        .map(|id| CouponOffer {
            id,
            discount: "30% OFF".into(),
            condition: "em 1 produto(s) selecionado(s)".into(),
            code: "#Doginho".into(),
            valid_until: "10/12/2025".into(),
        })
        .collect()
}
