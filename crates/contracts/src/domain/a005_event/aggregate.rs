use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_distinct, count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const CATEGORY_SENTINEL: &str = "Todas as Categorias";
pub const STATUS_SENTINEL: &str = "Todos";

// ============================================================================
// Public catalogue
// ============================================================================

/// Event listed in the public catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub image_url: Option<String>,
}

impl Searchable for PublicEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }
}

impl ListModel for PublicEvent {
    const PAGE_SIZE: usize = 10;

    fn default_criteria(records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::from_values(
            "category",
            "Categoria",
            CATEGORY_SENTINEL,
            records.iter().map(|e| e.category.as_str()),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        vec![
            StatItem::count("Eventos Publicados", records.len(), "fa-calendar", StatTone::Blue),
            StatItem::count(
                "Categorias",
                count_distinct(records, |e| e.category.as_str()),
                "fa-layer-group",
                StatTone::Orange,
            ),
        ]
    }
}

// ============================================================================
// Events managed by the signed-in account
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Ativo,
    Rascunho,
    Finalizado,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [EventStatus::Ativo, EventStatus::Rascunho, EventStatus::Finalizado];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Ativo => "Ativo",
            EventStatus::Rascunho => "Rascunho",
            EventStatus::Finalizado => "Finalizado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            EventStatus::Ativo => StatTone::Green,
            EventStatus::Rascunho => StatTone::Yellow,
            EventStatus::Finalizado => StatTone::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedEvent {
    pub id: u32,
    pub title: String,
    pub date_start: String,
    pub date_end: String,
    pub status: EventStatus,
    pub category: String,
    pub venue_type: String,
    pub description: String,
    pub tickets_sold: u32,
}

impl Searchable for ManagedEvent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for ManagedEvent {
    const PAGE_SIZE: usize = 6;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::new(
            "status",
            "Status",
            STATUS_SENTINEL,
            EventStatus::ALL.iter().map(EventStatus::as_str),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let sold: u32 = records.iter().map(|e| e.tickets_sold).sum();
        vec![
            StatItem::count("Total de Eventos", records.len(), "fa-calendar", StatTone::Blue),
            StatItem::count(
                "Próximos Eventos",
                count_where(records, |e| e.status == EventStatus::Ativo),
                "fa-calendar-check",
                StatTone::Green,
            ),
            StatItem::count(
                "Eventos Passados",
                count_where(records, |e| e.status == EventStatus::Finalizado),
                "fa-calendar-xmark",
                StatTone::Yellow,
            ),
            StatItem::count("Ingressos Vendidos", sold as usize, "fa-ticket", StatTone::Blue)
                .with_subtitle("Total geral"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_client_events, mock_public_events};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_public_catalogue_fits_one_page() {
        let view = ListView::new(mock_public_events());
        let page = view.current_page();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_category_filter() {
        let mut view = ListView::new(mock_public_events());
        view.set_criteria_field("category", "Aniversário");
        assert_eq!(view.filtered_count(), 6);
        view.set_criteria_field("category", CATEGORY_SENTINEL);
        assert_eq!(view.filtered_count(), 10);
    }

    #[test]
    fn test_managed_search_hits_category() {
        let mut view = ListView::new(mock_client_events());
        view.set_search("workshop");
        let ids: Vec<u32> = view.current_page().items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5]);
        view.set_search("aniv");
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_managed_stats() {
        let stats = ManagedEvent::aggregate_stats(&mock_client_events());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["5", "3", "1", "1.240"]);
        assert_eq!(stats[3].subtitle.as_deref(), Some("Total geral"));
    }
}
