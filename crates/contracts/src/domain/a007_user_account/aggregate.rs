use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos os Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Client,
    Staff,
}

impl AccountKind {
    fn noun(&self) -> &'static str {
        match self {
            AccountKind::Client => "Clientes",
            AccountKind::Staff => "Funcionários",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Ativo,
    Desativado,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 2] = [AccountStatus::Ativo, AccountStatus::Desativado];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Ativo => "Ativo",
            AccountStatus::Desativado => "Desativado",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            AccountStatus::Ativo => StatTone::Green,
            AccountStatus::Desativado => StatTone::Red,
        }
    }
}

/// Client or staff login linked to one or more branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub kind: AccountKind,
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub branches: Vec<String>,
    pub contact: String,
    pub registered_at: String,
}

impl Searchable for UserAccount {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.contact.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl ListModel for UserAccount {
    const PAGE_SIZE: usize = 8;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new().with_enum(EnumFilter::new(
            "status",
            "Status",
            STATUS_SENTINEL,
            AccountStatus::ALL.iter().map(AccountStatus::as_str),
        ))
    }

    /// Labels follow the kind of the first record; lists are never mixed.
    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let noun = records.first().map_or(AccountKind::Client, |a| a.kind).noun();
        vec![
            StatItem::count(&format!("Total de {}", noun), records.len(), "fa-user-group", StatTone::Blue),
            StatItem::count(
                &format!("{} Ativos", noun),
                count_where(records, |a| a.status == AccountStatus::Ativo),
                "fa-user-check",
                StatTone::Green,
            ),
            StatItem::count(
                &format!("{} Inativos", noun),
                count_where(records, |a| a.status == AccountStatus::Desativado),
                "fa-user-xmark",
                StatTone::Red,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{mock_clients, mock_staff};
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_search_by_contact() {
        let mut view = ListView::new(mock_clients());
        view.set_search("99513");
        let ids: Vec<u32> = view.current_page().items.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_status_filter() {
        let mut view = ListView::new(mock_clients());
        view.set_criteria_field("status", "Desativado");
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_stats_labels_follow_kind() {
        let clients = UserAccount::aggregate_stats(&mock_clients());
        assert_eq!(clients[0].label, "Total de Clientes");
        assert_eq!(clients[1].value.display(), "2");
        assert_eq!(clients[2].value.display(), "2");

        let staff = UserAccount::aggregate_stats(&mock_staff());
        assert_eq!(staff[0].label, "Total de Funcionários");
        assert_eq!(staff[1].value.display(), "1");
    }
}
