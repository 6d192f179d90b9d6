use serde::{Deserialize, Serialize};

use crate::shared::indicators::{StatItem, StatTone};
use crate::shared::list::{FilterCriteria, ListModel, Searchable};

/// Registered store/branch as shown on the branches page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchProfile {
    pub id: u32,
    pub name: String,
    pub cnpj: String,
    pub phone: String,
    pub email: String,
    pub products: u32,
    /// Text shown in the logo bubble when there is no image.
    pub logo_placeholder: String,
}

impl Searchable for BranchProfile {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.cnpj.as_str()]
    }

    fn field_value(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl ListModel for BranchProfile {
    const PAGE_SIZE: usize = 6;

    fn default_criteria(_records: &[Self]) -> FilterCriteria {
        FilterCriteria::new()
    }

    fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
        let products: u32 = records.iter().map(|b| b.products).sum();
        vec![
            StatItem::count("Total de Filiais", records.len(), "fa-store", StatTone::Blue),
            StatItem::count("Total de Produtos", products as usize, "fa-box", StatTone::Green),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::mock_branch_profiles;
    use super::*;
    use crate::shared::list::ListView;

    #[test]
    fn test_search_by_cnpj_fragment() {
        let mut view = ListView::new(mock_branch_profiles());
        view.set_search("54.884");
        let names: Vec<String> = view.current_page().items.into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Uaipdv - Shows"]);
    }

    #[test]
    fn test_stats() {
        let stats = BranchProfile::aggregate_stats(&mock_branch_profiles());
        assert_eq!(stats[0].value.display(), "3");
        assert_eq!(stats[1].value.display(), "581");
    }
}
