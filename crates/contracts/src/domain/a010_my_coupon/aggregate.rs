use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{FilterCriteria, ListModel, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MyCouponStatus {
    Disponivel,
    Utilizado,
    Expirado,
}

impl MyCouponStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MyCouponStatus::Disponivel => "Disponível",
            MyCouponStatus::Utilizado => "Utilizado",
            MyCouponStatus::Expirado => "Expirado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            MyCouponStatus::Disponivel => StatTone::Green,
            MyCouponStatus::Utilizado => StatTone::Blue,
            MyCouponStatus::Expirado => StatTone::Red,
        }
    }
}

/// Coupon already claimed by the signed-in client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyCoupon {
    pub id: u32,
    pub client_name: String,
    pub client_email: String,
    pub token: String,
    pub products: u32,
    pub discount_percent: u8,
    pub valid_until: String,
    pub status: MyCouponStatus,
}

impl Searchable for MyCoupon {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.token.as_str(), self.client_name.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for MyCoupon {
    const PAGE_SIZE: usize = 8;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let by_status = |status: MyCouponStatus| count_where(records, |c| c.status == status);
        vec![
            StatItem::count("Total de Cupons", records.len(), "fa-ticket", StatTone::Blue),
            StatItem::count(
                "Disponíveis",
                by_status(MyCouponStatus::Disponivel),
                "fa-check-circle",
                StatTone::Green,
            ),
            StatItem::count(
                "Utilizados",
                by_status(MyCouponStatus::Utilizado),
                "fa-thumbs-up",
                StatTone::Blue,
            ),
            StatItem::count(
                "Expirados",
                by_status(MyCouponStatus::Expirado),
                "fa-calendar-xmark",
                StatTone::Red,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::mock_my_coupons;
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_stats() {
        let stats = MyCoupon::aggregate_stats(&mock_my_coupons());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["3", "0", "0", "3"]);
    }

    #[test]
    fn test_search_token_with_spaces() {
        let mut view = ListView::new(mock_my_coupons());
        view.set_search("sorvete de");
        assert_eq!(view.filtered_count(), 2);
        view.set_search("nada");
        assert!(view.current_page().is_empty());
    }
}
