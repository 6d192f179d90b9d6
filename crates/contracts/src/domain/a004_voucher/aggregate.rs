use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos os Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherStatus {
    NaoUsado,
    Usado,
    Vencido,
}

impl VoucherStatus {
    pub const ALL: [VoucherStatus; 3] = [
        VoucherStatus::NaoUsado,
        VoucherStatus::Usado,
        VoucherStatus::Vencido,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherStatus::NaoUsado => "Não Usado",
            VoucherStatus::Usado => "Usado",
            VoucherStatus::Vencido => "Vencido",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            VoucherStatus::NaoUsado => StatTone::Green,
            VoucherStatus::Usado => StatTone::Blue,
            VoucherStatus::Vencido => StatTone::Red,
        }
    }
}

/// Store credit voucher. Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: u32,
    pub client_name: String,
    pub client_email: String,
    pub status: VoucherStatus,
    pub valid_until: String,
    pub code: String,
    pub available_cents: i64,
    pub total_cents: i64,
}

impl Voucher {
    pub fn used_cents(&self) -> i64 {
        self.total_cents - self.available_cents
    }
}

impl Searchable for Voucher {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.code.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for Voucher {
    const PAGE_SIZE: usize = 5;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::new(
            "status",
            "Status",
            STATUS_SENTINEL,
            VoucherStatus::ALL.iter().map(VoucherStatus::as_str),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let available: i64 = records.iter().map(|v| v.available_cents).sum();
        let used: i64 = records.iter().map(Voucher::used_cents).sum();
        vec![
            StatItem::count("Total de Vouchers", records.len(), "fa-ticket", StatTone::Blue),
            StatItem::count(
                "Vouchers Ativos",
                count_where(records, |v| v.status == VoucherStatus::NaoUsado),
                "fa-check-circle",
                StatTone::Green,
            ),
            StatItem::money("Valor Disponível", available, "fa-money-bill-wave", StatTone::Blue),
            StatItem::money("Valor Utilizado", used, "fa-cart-arrow-down", StatTone::Yellow),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_client_vouchers, mock_vouchers};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_money_stats() {
        let stats = Voucher::aggregate_stats(&mock_vouchers());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["4", "3", "R$ 55,00", "R$ 50,00"]);
    }

    #[test]
    fn test_search_by_code_is_case_insensitive() {
        let mut view = ListView::new(mock_vouchers());
        view.set_search("13sm-371");
        let ids: Vec<u32> = view.current_page().items.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_client_vouchers_are_the_signed_in_clients() {
        let vouchers = mock_client_vouchers();
        assert_eq!(vouchers.len(), 2);
        assert!(vouchers.iter().all(|v| v.client_name == "Alex"));
    }
}
