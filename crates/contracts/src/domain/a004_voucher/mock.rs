use super::aggregate::{Voucher, VoucherStatus};

#[allow(clippy::too_many_arguments)]
fn voucher(
    id: u32,
    client_name: &str,
    client_email: &str,
    status: VoucherStatus,
    valid_until: &str,
    code: &str,
    available_cents: i64,
    total_cents: i64,
) -> Voucher {
    Voucher {
        id,
        client_name: client_name.into(),
        client_email: client_email.into(),
        status,
        valid_until: valid_until.into(),
        code: code.into(),
        available_cents,
        total_cents,
    }
}

pub fn mock_vouchers() -> Vec<Voucher> {
    use VoucherStatus::*;
    vec![
        voucher(1, "pedro", "pedrolucasmota2005@gmail.com", NaoUsado, "07/11/2025 15:45", "13SM-1V20", 2_000, 2_000),
        voucher(2, "Alex", "Alexssandromercer@gmail.com", NaoUsado, "10/01/2026 23:59", "13SM-291V25", 2_500, 2_500),
        voucher(3, "Alex", "Alexssandromercer@gmail.com", NaoUsado, "09/01/2026 23:59", "13SM-371V10", 1_000, 1_000),
        voucher(4, "João Silva", "joao.s@email.com", Usado, "05/12/2024 10:00", "13SM-555V50", 0, 5_000),
    ]
}

/// Vouchers owned by the demo client account.
pub fn mock_client_vouchers() -> Vec<Voucher> {
    mock_vouchers()
        .into_iter()
        .filter(|v| v.client_email.eq_ignore_ascii_case("alexssandromercer@gmail.com"))
        .collect()
}
