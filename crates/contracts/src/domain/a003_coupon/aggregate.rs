use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos os Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponStatus {
    EmUso,
    Disponivel,
    Utilizado,
}

impl CouponStatus {
    pub const ALL: [CouponStatus; 3] = [
        CouponStatus::EmUso,
        CouponStatus::Disponivel,
        CouponStatus::Utilizado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CouponStatus::EmUso => "Em uso",
            CouponStatus::Disponivel => "Disponível",
            CouponStatus::Utilizado => "Utilizado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            CouponStatus::EmUso => StatTone::Yellow,
            CouponStatus::Disponivel => StatTone::Green,
            CouponStatus::Utilizado => StatTone::Blue,
        }
    }
}

/// Discount coupon; unclaimed coupons have no client yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: u32,
    pub valid_date: String,
    pub valid_time: String,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub token: String,
    pub status: CouponStatus,
    pub products: u32,
    pub discount_percent: u8,
}

impl Searchable for Coupon {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.token.as_str()];
        if let Some(name) = &self.client_name {
            fields.push(name.as_str());
        }
        fields
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for Coupon {
    const PAGE_SIZE: usize = 5;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::new(
            "status",
            "Status",
            STATUS_SENTINEL,
            CouponStatus::ALL.iter().map(CouponStatus::as_str),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let by_status = |status: CouponStatus| count_where(records, |c| c.status == status);
        vec![
            StatItem::count("Total de Cupons", records.len(), "fa-ticket", StatTone::Blue),
            StatItem::count(
                "Disponíveis",
                by_status(CouponStatus::Disponivel),
                "fa-check-circle",
                StatTone::Green,
            ),
            StatItem::count(
                "Em Uso",
                by_status(CouponStatus::EmUso),
                "fa-hourglass-half",
                StatTone::Yellow,
            ),
            StatItem::count(
                "Utilizados",
                by_status(CouponStatus::Utilizado),
                "fa-check-double",
                StatTone::Blue,
            ),
        ]
    }
}

/// Coupon a client can still claim, shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponOffer {
    pub id: u32,
    pub discount: String,
    pub condition: String,
    pub code: String,
    pub valid_until: String,
}

impl Searchable for CouponOffer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.discount.as_str()]
    }

    fn field_value(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl ListModel for CouponOffer {
    const PAGE_SIZE: usize = 8;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        vec![StatItem::count("Cupons Disponíveis", records.len(), "fa-tags", StatTone::Orange)]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_coupon_offers, mock_coupons};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_search_skips_missing_client() {
        let mut view = ListView::new(mock_coupons());
        view.set_search("#teste");
        let ids: Vec<u32> = view.current_page().items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);

        view.set_search("maria");
        let ids: Vec<u32> = view.current_page().items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_status_filter_uses_display_names() {
        let mut view = ListView::new(mock_coupons());
        view.set_criteria_field("status", "Disponível");
        assert_eq!(view.filtered_count(), 2);
        view.set_criteria_field("status", "Em uso");
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_stats() {
        let stats = Coupon::aggregate_stats(&mock_coupons());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["5", "2", "2", "1"]);
    }

    #[test]
    fn test_offers_fill_one_page() {
        let view = ListView::new(mock_coupon_offers());
        let page = view.current_page();
        assert_eq!(page.items.len(), 8);
        assert_eq!(page.total_pages, 1);
    }
}
