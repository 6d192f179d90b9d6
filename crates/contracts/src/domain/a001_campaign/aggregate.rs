use serde::{Deserialize, Serialize};

use crate::shared::indicators::{count_distinct, count_where, StatItem, StatTone};
use crate::shared::list::{EnumFilter, FilterCriteria, ListModel, Searchable};

pub const STATUS_SENTINEL: &str = "Todos os Status";
pub const BRANCH_SENTINEL: &str = "--- Todas as Filiais ---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Ativa,
    Pausada,
    Rascunho,
    Finalizada,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Ativa,
        CampaignStatus::Pausada,
        CampaignStatus::Rascunho,
        CampaignStatus::Finalizada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Ativa => "Ativa",
            CampaignStatus::Pausada => "Pausada",
            CampaignStatus::Rascunho => "Rascunho",
            CampaignStatus::Finalizada => "Finalizada",
        }
    }

    pub fn tone(&self) -> StatTone {
        match self {
            CampaignStatus::Ativa => StatTone::Green,
            CampaignStatus::Pausada => StatTone::Yellow,
            CampaignStatus::Rascunho => StatTone::Blue,
            CampaignStatus::Finalizada => StatTone::Red,
        }
    }
}

/// Promotional campaign posted for a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub branch: String,
    pub status: CampaignStatus,
    pub posted_date: String,
    pub posted_time: String,
}

impl Searchable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.branch.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "branch" => Some(self.branch.as_str()),
            _ => None,
        }
    }
}

impl ListModel for Campaign {
    const PAGE_SIZE: usize = 6;

    fn default_criteria(records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
            .with_enum(EnumFilter::new(
                "status",
                "Status",
                STATUS_SENTINEL,
                CampaignStatus::ALL.iter().map(CampaignStatus::as_str),
            ))
            .with_enum(EnumFilter::from_values(
                "branch",
                "Filial",
                BRANCH_SENTINEL,
                records.iter().map(|c| c.branch.as_str()),
            ))
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        vec![
            StatItem::count("Total de Campanhas", records.len(), "fa-bullhorn", StatTone::Blue),
            StatItem::count(
                "Campanhas Ativas",
                count_where(records, |c| c.status == CampaignStatus::Ativa),
                "fa-check-circle",
                StatTone::Green,
            ),
            StatItem::count(
                "Campanhas Pausadas",
                count_where(records, |c| c.status == CampaignStatus::Pausada),
                "fa-pause-circle",
                StatTone::Yellow,
            ),
            StatItem::count(
                "Filiais Ativas",
                count_distinct(records, |c| c.branch.as_str()),
                "fa-building",
                StatTone::Blue,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::mock_campaigns;
    use super::*;
    use crate::shared::list::ListView;

    fn ids(view: &ListView<Campaign>) -> Vec<u32> {
        view.current_page().items.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_filter_by_active_status() {
        let records = mock_campaigns();
        assert_eq!(records.len(), 6);

        let mut view = ListView::new(records);
        view.set_criteria_field("status", "Ativa");
        assert_eq!(ids(&view), vec![1, 2, 3]);

        view.clear_all();
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_branch_filter_options_come_from_data() {
        let records = mock_campaigns();
        let criteria = Campaign::default_criteria(&records);
        let branch = &criteria.enums()[1];
        assert_eq!(branch.options.len(), 6);
        assert_eq!(branch.value(), BRANCH_SENTINEL);

        let mut view = ListView::new(records);
        view.set_criteria_field("branch", "Filial Rio");
        assert_eq!(ids(&view), vec![5]);
    }

    #[test]
    fn test_search_matches_name_or_branch() {
        let mut view = ListView::new(mock_campaigns());
        view.set_search("uai");
        assert_eq!(ids(&view), vec![1, 2, 3]);
        view.set_search("BLACK");
        assert_eq!(ids(&view), vec![5]);
    }

    #[test]
    fn test_stats() {
        let stats = Campaign::aggregate_stats(&mock_campaigns());
        let values: Vec<String> = stats.iter().map(|s| s.value.display()).collect();
        assert_eq!(values, vec!["6", "3", "1", "6"]);
    }
}
