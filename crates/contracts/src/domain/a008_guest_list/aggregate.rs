use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_distinct, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const EVENT_SENTINEL: &str = "Todos os Eventos";

/// Invitation batch a client created for one group of guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestList {
    pub id: u32,
    pub event: String,
    pub group: String,
    pub quantity: u32,
    pub created_date: String,
    pub created_time: String,
}

impl Searchable for GuestList {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.group.as_str(), self.event.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "event" => Some(self.event.as_str()),
            _ => None,
        }
    }
}

impl ListModel for GuestList {
    const PAGE_SIZE: usize = 5;

    fn default_criteria(records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::from_values(
            "event",
            "Evento",
            EVENT_SENTINEL,
            records.iter().map(|g| g.event.as_str()),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let invites: u32 = records.iter().map(|g| g.quantity).sum();
        vec![
            StatItem::count(
                "Total de Eventos",
                count_distinct(records, |g| g.event.as_str()),
                "fa-envelope",
                StatTone::Blue,
            ),
            StatItem::count("Total de Convites", invites as usize, "fa-ticket", StatTone::Green),
            StatItem::count(
                "Grupos Únicos",
                count_distinct(records, |g| g.group.as_str()),
                "fa-users",
                StatTone::Orange,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::mock_guest_lists;
    use super::*;
    use crate::shared::list::ListView;

    fn ids(view: &ListView<GuestList>) -> Vec<u32> {
        view.current_page().items.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_twelve_lists_over_three_pages() {
        let mut view = ListView::new(mock_guest_lists());
        assert_eq!(view.total_pages(), 3);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        view.set_page(2);
        assert_eq!(ids(&view), vec![6, 7, 8, 9, 10]);
        view.set_page(3);
        assert_eq!(ids(&view), vec![11, 12]);
    }

    #[test]
    fn test_event_filter_resets_to_first_page() {
        let mut view = ListView::new(mock_guest_lists());
        view.set_page(3);
        view.set_criteria_field("event", "Rock Legends");
        assert_eq!(view.requested_page(), 1);
        assert_eq!(ids(&view), vec![1, 2, 6, 10]);
        assert_eq!(view.total_pages(), 1);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let mut view = ListView::new(mock_guest_lists());
        view.set_search("");
        assert_eq!(view.filtered_count(), 12);
        let all: Vec<u32> = view.filtered().iter().map(|g| g.id).collect();
        assert_eq!(all, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_stats() {
        let stats = GuestList::aggregate_stats(&mock_guest_lists());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["4", "235", "12"]);
    }
}
