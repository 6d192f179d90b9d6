//! Generic filtered + paginated list pipeline.

pub mod controller;
pub mod filter;
pub mod pagination;

pub use controller::{ListModel, ListPage, ListView};
pub use filter::{filter_records, matches, EnumFilter, FilterCriteria, Searchable, SEARCH_FIELD};
pub use pagination::{clamp_page, page_window, paginate, total_pages, PageSlice};

/// Message rendered in place of an empty result table.
pub const EMPTY_STATE_MESSAGE: &str = "Nenhum registro encontrado. Ajuste seus filtros.";
