//! List-view controller: owns the criteria and current page of one list and
//! derives the visible slice and the dashboard stats on every read.

use super::filter::{filter_records, FilterCriteria, Searchable, SEARCH_FIELD};
use super::pagination::paginate;
use crate::shared::indicators::StatItem;

/// Per-entity behaviour plugged into [`ListView`].
pub trait ListModel: Searchable + Clone {
    /// Rows per page for this list.
    const PAGE_SIZE: usize;

    /// Criteria in their "no constraint" state. Options of data-driven
    /// filters are taken from `records`.
    fn default_criteria(records: &[Self]) -> FilterCriteria;

    /// Aggregates computed over the full, unfiltered collection.
    fn aggregate_stats(records: &[Self]) -> Vec<StatItem>;
}

/// Owned snapshot of the visible page, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub items: Vec<R>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Size of the filtered collection.
    pub total_filtered: usize,
    /// Size of the raw collection.
    pub total_records: usize,
}

impl<R> ListPage<R> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R> {
    records: Vec<R>,
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl<R: ListModel> ListView<R> {
    pub fn new(records: Vec<R>) -> Self {
        let criteria = R::default_criteria(&records);
        Self::with_criteria(records, criteria, R::PAGE_SIZE)
    }

    /// Stats over the whole collection; filters never change them.
    pub fn stats(&self) -> Vec<StatItem> {
        R::aggregate_stats(&self.records)
    }
}

impl<R: Searchable> ListView<R> {
    pub fn with_criteria(records: Vec<R>, criteria: FilterCriteria, page_size: usize) -> Self {
        Self {
            records,
            criteria,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Stored page as last set; may exceed the page count after the data
    /// shrinks, [`ListView::page`] reports the clamped value.
    pub fn requested_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Updates one criterion and returns to the first page.
    /// Unknown fields leave the state untouched.
    pub fn set_criteria_field(&mut self, field: &str, value: impl Into<String>) {
        if self.criteria.set(field, value) {
            self.page = 1;
            log::debug!("list criteria '{}' changed, page reset", field);
        } else {
            log::warn!("ignoring unknown list filter '{}'", field);
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.set_criteria_field(SEARCH_FIELD, term);
    }

    /// Sets the current page as requested by the pagination controls.
    /// Not clamped here; rendering clamps.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Resets every criterion to "no constraint" and returns to page one.
    pub fn clear_all(&mut self) {
        self.criteria.clear();
        self.page = 1;
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter_records(&self.records, &self.criteria)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Effective page after clamping against the filtered collection.
    pub fn page(&self) -> usize {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.page).page
    }

    pub fn total_pages(&self) -> usize {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.page).total_pages
    }
}

impl<R: Searchable + Clone> ListView<R> {
    /// Filtered, paginated snapshot of the current state.
    pub fn current_page(&self) -> ListPage<R> {
        let filtered = self.filtered();
        let slice = paginate(&filtered, self.page_size, self.page);
        ListPage {
            items: slice.visible.iter().map(|r| (*r).clone()).collect(),
            page: slice.page,
            page_size: slice.page_size,
            total_pages: slice.total_pages,
            total_filtered: slice.total_items,
            total_records: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::{count_where, StatTone};
    use crate::shared::list::filter::EnumFilter;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        id: u32,
        holder: String,
        status: &'static str,
    }

    impl Searchable for Ticket {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.holder.as_str()]
        }

        fn field_value(&self, field: &str) -> Option<&str> {
            match field {
                "status" => Some(self.status),
                _ => None,
            }
        }
    }

    impl ListModel for Ticket {
        const PAGE_SIZE: usize = 3;

        fn default_criteria(_records: &[Self]) -> FilterCriteria {
            FilterCriteria::new().with_enum(EnumFilter::new(
                "status",
                "Status",
                "Todos",
                ["Pago", "Pendente"],
            ))
        }

        fn aggregate_stats(records: &[Self]) -> Vec<StatItem> {
            vec![
                StatItem::count("Total", records.len(), "fa-ticket", StatTone::Blue),
                StatItem::count(
                    "Pagos",
                    count_where(records, |t| t.status == "Pago"),
                    "fa-check",
                    StatTone::Green,
                ),
            ]
        }
    }

    fn tickets(n: u32) -> Vec<Ticket> {
        (1..=n)
            .map(|id| Ticket {
                id,
                holder: format!("Cliente {}", id),
                status: if id % 2 == 0 { "Pago" } else { "Pendente" },
            })
            .collect()
    }

    fn ids(page: &ListPage<Ticket>) -> Vec<u32> {
        page.items.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let view = ListView::new(tickets(7));
        let page = view.current_page();
        assert_eq!(ids(&page), vec![1, 2, 3]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_filtered, 7);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_any_criteria_change_resets_page() {
        let mut view = ListView::new(tickets(9));
        for field in ["status", SEARCH_FIELD] {
            view.set_page(3);
            assert_eq!(view.requested_page(), 3);
            view.set_criteria_field(field, "");
            assert_eq!(view.requested_page(), 1);
        }

        view.set_page(3);
        view.set_criteria_field("status", "Pago");
        assert_eq!(view.requested_page(), 1);
        assert_eq!(ids(&view.current_page()), vec![2, 4, 6]);
    }

    #[test]
    fn test_unknown_field_keeps_page() {
        let mut view = ListView::new(tickets(9));
        view.set_page(2);
        view.set_criteria_field("branch", "Rio");
        assert_eq!(view.requested_page(), 2);
        assert_eq!(view.criteria(), &Ticket::default_criteria(&[]));
    }

    #[test]
    fn test_set_page_is_stored_but_rendering_clamps() {
        let mut view = ListView::new(tickets(7));
        view.set_page(10);
        assert_eq!(view.requested_page(), 10);
        let page = view.current_page();
        assert_eq!(page.page, 3);
        assert_eq!(ids(&page), vec![7]);
        assert_eq!(view.page(), 3);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn test_clear_all_restores_everything() {
        let mut view = ListView::new(tickets(7));
        view.set_search("cliente 1");
        view.set_criteria_field("status", "Pendente");
        view.set_page(2);
        assert_eq!(view.filtered_count(), 1);

        view.clear_all();
        assert_eq!(view.requested_page(), 1);
        assert_eq!(view.filtered_count(), 7);
        assert!(view.criteria().is_empty());
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let mut view = ListView::new(tickets(12));
        view.set_search("cliente 12");
        assert_eq!(view.filtered_count(), 1);
        view.set_search("  cliente 12 ");
        assert_eq!(view.filtered_count(), 1);

        view.set_search("   ");
        assert_eq!(view.filtered_count(), 12);
        assert_eq!(view.criteria().active_count(), 0);
        assert!(view.criteria().is_empty());
    }

    #[test]
    fn test_stats_ignore_filters() {
        let mut view = ListView::new(tickets(7));
        let before = view.stats();
        view.set_criteria_field("status", "Pago");
        view.set_search("3");
        assert_eq!(view.stats(), before);
        assert_eq!(before[0].value.display(), "7");
        assert_eq!(before[1].value.display(), "3");
    }

    #[test]
    fn test_empty_collection_renders_empty_page() {
        let view = ListView::new(Vec::<Ticket>::new());
        let page = view.current_page();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_records, 0);
    }
}
