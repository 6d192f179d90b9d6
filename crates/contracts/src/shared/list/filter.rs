//! Filter predicate engine shared by every list page.
//!
//! A record passes when the search term is found in any of its searchable
//! fields (case-insensitive) and every enum filter either holds its sentinel
//! or equals the record's value for that field.

/// Criteria key under which the free-text search term is stored.
pub const SEARCH_FIELD: &str = "search";

/// Record types that can be narrowed by [`FilterCriteria`].
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field, `None` when the record has no such field.
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// One select-style filter: a field, its "no constraint" sentinel and the
/// options offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumFilter {
    pub field: &'static str,
    pub label: &'static str,
    pub sentinel: &'static str,
    pub options: Vec<String>,
    value: String,
}

impl EnumFilter {
    pub fn new<I, S>(field: &'static str, label: &'static str, sentinel: &'static str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            label,
            sentinel,
            options: options.into_iter().map(Into::into).collect(),
            value: sentinel.to_string(),
        }
    }

    /// Options deduplicated in first-seen order, handy for filters whose
    /// choices come from the data itself (branch names, event names).
    pub fn from_values<'a, I>(field: &'static str, label: &'static str, sentinel: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut options: Vec<String> = Vec::new();
        for value in values {
            if !options.iter().any(|o| o == value) {
                options.push(value.to_string());
            }
        }
        Self::new(field, label, sentinel, options)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_unconstrained(&self) -> bool {
        self.value == self.sentinel
    }

    pub fn accepts(&self, candidate: Option<&str>) -> bool {
        self.is_unconstrained() || candidate == Some(self.value.as_str())
    }

    fn reset(&mut self) {
        self.value = self.sentinel.to_string();
    }
}

/// Current filter state of one list: a search term plus ordered enum filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: String,
    enums: Vec<EnumFilter>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enum(mut self, filter: EnumFilter) -> Self {
        self.enums.push(filter);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn enums(&self) -> &[EnumFilter] {
        &self.enums
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        if field == SEARCH_FIELD {
            return Some(&self.search);
        }
        self.enums.iter().find(|f| f.field == field).map(EnumFilter::value)
    }

    /// Updates one criterion. Returns `false` (and changes nothing) when the
    /// field is not part of these criteria.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        if field == SEARCH_FIELD {
            self.search = value.into();
            return true;
        }
        match self.enums.iter_mut().find(|f| f.field == field) {
            Some(filter) => {
                filter.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Resets the search term and every enum filter to its sentinel.
    pub fn clear(&mut self) {
        self.search.clear();
        self.enums.iter_mut().for_each(EnumFilter::reset);
    }

    /// Number of criteria currently narrowing the list.
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search.trim().is_empty());
        search + self.enums.iter().filter(|f| !f.is_unconstrained()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn matches_search<R: Searchable + ?Sized>(record: &R, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Combined predicate: search AND every enum filter.
pub fn matches<R: Searchable + ?Sized>(record: &R, criteria: &FilterCriteria) -> bool {
    matches_search(record, criteria.search())
        && criteria
            .enums()
            .iter()
            .all(|filter| filter.accepts(record.field_value(filter.field)))
}

/// Records passing `criteria`, in collection order.
pub fn filter_records<'a, R: Searchable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| matches(*r, criteria)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
        status: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }

        fn field_value(&self, field: &str) -> Option<&str> {
            match field {
                "status" => Some(self.status),
                "city" => Some(self.city),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Rock Legends", city: "Belo Horizonte", status: "Ativo" },
            Row { id: 2, name: "Noite de Gala", city: "São Paulo", status: "Desativado" },
            Row { id: 3, name: "Festival de Verão", city: "Rio", status: "Ativo" },
            Row { id: 4, name: "Sexta Rock", city: "São Paulo", status: "Ativo" },
        ]
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::new()
            .with_enum(EnumFilter::new("status", "Status", "Todos os Status", ["Ativo", "Desativado"]))
            .with_enum(EnumFilter::new("city", "Cidade", "Todas as Cidades", ["Rio", "São Paulo"]))
    }

    fn ids(found: &[&Row]) -> Vec<u32> {
        found.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let data = rows();
        assert_eq!(ids(&filter_records(&data, &criteria())), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_records(&data, &FilterCriteria::new())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_collection() {
        let data: Vec<Row> = Vec::new();
        let mut c = criteria();
        c.set(SEARCH_FIELD, "rock");
        assert!(filter_records(&data, &c).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ors_fields() {
        let data = rows();
        let mut c = criteria();
        c.set(SEARCH_FIELD, "ROCK");
        assert_eq!(ids(&filter_records(&data, &c)), vec![1, 4]);

        c.set(SEARCH_FIELD, "são");
        assert_eq!(ids(&filter_records(&data, &c)), vec![2, 4]);
    }

    #[test]
    fn test_enum_filters_are_anded() {
        let data = rows();
        let mut c = criteria();
        c.set("status", "Ativo");
        assert_eq!(ids(&filter_records(&data, &c)), vec![1, 3, 4]);

        c.set("city", "São Paulo");
        assert_eq!(ids(&filter_records(&data, &c)), vec![4]);

        c.set(SEARCH_FIELD, "gala");
        assert!(filter_records(&data, &c).is_empty());
    }

    #[test]
    fn test_sentinel_matches_like_missing_filter() {
        let data = rows();
        let mut with_sentinel = criteria();
        with_sentinel.set("status", "Ativo");
        with_sentinel.set("city", "Todas as Cidades");

        let mut without = FilterCriteria::new()
            .with_enum(EnumFilter::new("status", "Status", "Todos os Status", ["Ativo"]));
        without.set("status", "Ativo");

        assert_eq!(filter_records(&data, &with_sentinel), filter_records(&data, &without));
    }

    #[test]
    fn test_filter_matches_reference_loop_and_is_idempotent() {
        let data = rows();
        let mut c = criteria();
        c.set(SEARCH_FIELD, "o");
        c.set("status", "Ativo");

        let mut reference = Vec::new();
        for row in &data {
            if matches(row, &c) {
                reference.push(row.clone());
            }
        }
        let once: Vec<Row> = filter_records(&data, &c).into_iter().cloned().collect();
        assert_eq!(once, reference);

        let twice: Vec<Row> = filter_records(&once, &c).into_iter().cloned().collect();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut c = criteria();
        assert!(!c.set("branch", "Rio"));
        assert_eq!(c, criteria());
        assert_eq!(c.get("branch"), None);
    }

    #[test]
    fn test_clear_and_active_count() {
        let mut c = criteria();
        assert!(c.is_empty());
        c.set(SEARCH_FIELD, "x");
        c.set("status", "Ativo");
        assert_eq!(c.active_count(), 2);
        assert_eq!(c.get("status"), Some("Ativo"));

        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.get("status"), Some("Todos os Status"));
        assert_eq!(c.get(SEARCH_FIELD), Some(""));
    }

    #[test]
    fn test_from_values_dedups_in_order() {
        let f = EnumFilter::from_values("city", "Cidade", "Todas", ["Rio", "SP", "Rio", "BH"]);
        assert_eq!(f.options, vec!["Rio", "SP", "BH"]);
        assert!(f.is_unconstrained());
    }
}
