use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_distinct, count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos os Status";
pub const EVENT_SENTINEL: &str = "Todos os Eventos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InviteStatus {
    Ativo,
    Desativado,
}

impl InviteStatus {
    pub const ALL: [InviteStatus; 2] = [InviteStatus::Ativo, InviteStatus::Desativado];

    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Ativo => "Ativo",
            InviteStatus::Desativado => "Desativado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            InviteStatus::Ativo => StatTone::Green,
            InviteStatus::Desativado => StatTone::Red,
        }
    }
}

/// Invitation issued to a client for an event, covering `guests` people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub id: u32,
    pub client_name: String,
    pub client_email: String,
    pub guests: u32,
    pub event_name: String,
    pub status: InviteStatus,
    pub created_date: String,
    pub created_time: String,
}

impl Searchable for Invite {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.client_email.as_str(),
            self.event_name.as_str(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "event" => Some(self.event_name.as_str()),
            _ => None,
        }
    }
}

impl ListModel for Invite {
    const PAGE_SIZE: usize = 5;

    fn default_criteria(records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
            .with_enum(EnumFilter::new(
                "status",
                "Status",
                STATUS_SENTINEL,
                InviteStatus::ALL.iter().map(InviteStatus::as_str),
            ))
            .with_enum(EnumFilter::from_values(
                "event",
                "Evento",
                EVENT_SENTINEL,
                records.iter().map(|i| i.event_name.as_str()),
            ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let guests: u32 = records.iter().map(|i| i.guests).sum();
        vec![
            StatItem::count("Total de Convites", records.len(), "fa-envelope", StatTone::Blue),
            StatItem::count(
                "Convites Ativos",
                count_where(records, |i| i.status == InviteStatus::Ativo),
                "fa-check-circle",
                StatTone::Green,
            ),
            StatItem::count("Total de Convidados", guests as usize, "fa-users", StatTone::Yellow),
            StatItem::count(
                "Eventos com Convites",
                count_distinct(records, |i| i.event_name.as_str()),
                "fa-calendar",
                StatTone::Blue,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::mock_invites;
    use super::*;
    use crate::shared::list::ListView;

    fn ids(view: &ListView<Invite>) -> Vec<u32> {
        view.current_page().items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_status_and_event_filters_combine() {
        let mut view = ListView::new(mock_invites());
        view.set_criteria_field("event", "Rock Legends");
        assert_eq!(ids(&view), vec![1, 2, 5]);
        view.set_criteria_field("status", "Ativo");
        assert_eq!(ids(&view), vec![2, 5]);
    }

    #[test]
    fn test_search_covers_email() {
        let mut view = ListView::new(mock_invites());
        view.set_search("OLIVEIRA@");
        assert_eq!(ids(&view), vec![6]);
    }

    #[test]
    fn test_second_page() {
        let mut view = ListView::new(mock_invites());
        view.set_page(2);
        let page = view.current_page();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_stats() {
        let stats = Invite::aggregate_stats(&mock_invites());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["6", "4", "17", "4"]);
    }
}
