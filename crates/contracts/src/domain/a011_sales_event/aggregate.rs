use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{FilterCriteria, ListModel, Searchable};

/// Event with items (tickets, lodging, entries) open for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesEvent {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub items_for_sale: Vec<String>,
    pub items_available: u32,
    pub items_sold: u32,
    pub upcoming: bool,
    pub image_url: Option<String>,
}

impl Searchable for SalesEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn field_value(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl ListModel for SalesEvent {
    const PAGE_SIZE: usize = 5;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let available: u32 = records.iter().map(|e| e.items_available).sum();
        let sold: u32 = records.iter().map(|e| e.items_sold).sum();
        vec![
            StatItem::count("Eventos com Vendas", records.len(), "fa-store", StatTone::Blue),
            StatItem::count("Itens Disponíveis", available as usize, "fa-ticket", StatTone::Blue),
            StatItem::count("Itens Vendidos", sold as usize, "fa-cart-shopping", StatTone::Green),
            StatItem::count(
                "Próximos Eventos",
                count_where(records, |e| e.upcoming),
                "fa-calendar",
                StatTone::Yellow,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_admin_sales_events, mock_client_sales_events};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_search_by_name() {
        let mut view = ListView::new(mock_client_sales_events());
        view.set_search("countrygf");
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_stats() {
        let values = |records: &[SalesEvent]| -> Vec<String> {
            SalesEvent::aggregate_stats(records)
                .iter()
                .map(|s| s.value.display())
                .collect()
        };
        assert_eq!(values(&mock_admin_sales_events()), vec!["3", "88", "5", "1"]);
        assert_eq!(values(&mock_client_sales_events()), vec!["4", "43", "5", "4"]);
    }
}
