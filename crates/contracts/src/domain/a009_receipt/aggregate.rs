use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos";
pub const EVENT_SENTINEL: &str = "Todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Aprovado,
    Pendente,
    Cancelado,
}

impl ReceiptStatus {
    pub const ALL: [ReceiptStatus; 3] = [
        ReceiptStatus::Aprovado,
        ReceiptStatus::Pendente,
        ReceiptStatus::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiptStatus::Aprovado => "Aprovado",
            ReceiptStatus::Pendente => "Pendente",
            ReceiptStatus::Cancelado => "Cancelado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            ReceiptStatus::Aprovado => StatTone::Green,
            ReceiptStatus::Pendente => StatTone::Yellow,
            ReceiptStatus::Cancelado => StatTone::Red,
        }
    }
}

fn status_filter() -> EnumFilter {
    EnumFilter::new(
        "status",
        "Status",
        STATUS_SENTINEL,
        ReceiptStatus::ALL.iter().map(ReceiptStatus::as_str),
    )
}

fn receipt_stats(statuses: &[(ReceiptStatus, i64)]) -> Vec<StatItem> {
    let approved: i64 = statuses
        .iter()
        .filter(|(s, _)| *s == ReceiptStatus::Aprovado)
        .map(|(_, cents)| cents)
        .sum();
    vec![
        StatItem::count("Total de Recibos", statuses.len(), "fa-file-invoice", StatTone::Blue),
        StatItem::count(
            "Aprovados",
            count_where(statuses, |(s, _)| *s == ReceiptStatus::Aprovado),
            "fa-check-circle",
            StatTone::Green,
        ),
        StatItem::money("Valor Aprovado", approved, "fa-sack-dollar", StatTone::Orange),
    ]
}

// ============================================================================
// Ticket receipts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReceipt {
    pub id: u32,
    pub client_name: String,
    pub client_email: String,
    pub status: ReceiptStatus,
    pub order_date: String,
    pub code: String,
    pub tickets: u32,
    pub total_cents: i64,
}

impl Searchable for TicketReceipt {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.client_name.as_str(), self.client_email.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for TicketReceipt {
    const PAGE_SIZE: usize = 8;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(status_filter())
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let pairs: Vec<(ReceiptStatus, i64)> = records.iter().map(|r| (r.status, r.total_cents)).collect();
        receipt_stats(&pairs)
    }
}

// ============================================================================
// Gift receipts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftReceipt {
    pub id: u32,
    pub client_name: String,
    pub client_email: String,
    pub status: ReceiptStatus,
    pub event_name: String,
    pub order_date: String,
    pub code: String,
    pub items: u32,
    pub total_cents: i64,
}

impl Searchable for GiftReceipt {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.event_name.as_str(), self.code.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "event" => Some(self.event_name.as_str()),
            _ => None,
        }
    }
}

impl ListModel for GiftReceipt {
    const PAGE_SIZE: usize = 8;

    fn default_criteria(records: &[Self]) -> FilterCriteria {
        let criteria = FilterCriteria::new().with_enum(status_filter());
        if records.is_empty() {
            return criteria;
        }
        criteria.with_enum(EnumFilter::from_values(
            "event",
            "Evento",
            EVENT_SENTINEL,
            records.iter().map(|r| r.event_name.as_str()),
        ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let pairs: Vec<(ReceiptStatus, i64)> = records.iter().map(|r| (r.status, r.total_cents)).collect();
        receipt_stats(&pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_gift_receipts, mock_ticket_receipts};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_ticket_status_filter() {
        let mut view = ListView::new(mock_ticket_receipts());
        view.set_criteria_field("status", "Cancelado");
        let codes: Vec<String> = view.current_page().items.into_iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["8"]);
    }

    #[test]
    fn test_gift_filters_share_sentinel_text() {
        let mut view = ListView::new(mock_gift_receipts());
        view.set_criteria_field("event", "Festival de Verão");
        assert_eq!(view.filtered_count(), 1);
        view.set_criteria_field("event", EVENT_SENTINEL);
        view.set_criteria_field("status", "Aprovado");
        assert_eq!(view.filtered_count(), 1);
        assert_eq!(view.criteria().active_count(), 1);
    }

    #[test]
    fn test_gift_without_records_has_no_event_filter() {
        assert_eq!(GiftReceipt::default_criteria(&[]).enums().len(), 1);
    }

    #[test]
    fn test_stats() {
        let tickets = TicketReceipt::aggregate_stats(&mock_ticket_receipts());
        let values: Vec<String> = tickets.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["3", "2", "R$ 90,00"]);

        let gifts = GiftReceipt::aggregate_stats(&mock_gift_receipts());
        assert_eq!(gifts[2].value.display(), "R$ 29,99");
    }
}
