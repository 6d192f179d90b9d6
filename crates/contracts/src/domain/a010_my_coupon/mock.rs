use super::aggregate::{MyCoupon, MyCouponStatus};

fn my_coupon(id: u32, token: &str, products: u32, valid_until: &str) -> MyCoupon {
    MyCoupon {
        id,
        client_name: "Alex".into(),
        client_email: "alexssandromercer@gmail.com".into(),
        token: token.into(),
        products,
        discount_percent: 20,
        valid_until: valid_until.into(),
        status: MyCouponStatus::Expirado,
    }
}

pub fn mock_my_coupons() -> Vec<MyCoupon> {
    vec![
        my_coupon(1, "#Sorvete de Morango", 1, "30/11/2025 11:44"),
        my_coupon(2, "#Sorvete de Morango", 1, "30/11/2025 11:44"),
        my_coupon(3, "#teste", 4, "18/12/2025 21:53"),
    ]
}
