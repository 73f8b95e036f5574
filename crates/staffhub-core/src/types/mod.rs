//! Shared value types for the data-access core.

pub mod pagination;
pub mod search;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use search::SearchQuery;
pub use sorting::SortDirection;
