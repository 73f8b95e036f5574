//! Listing parameters shared by every catalogue service.

use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;

/// Search and ordering inputs for list operations.
///
/// `sort_by` carries the raw client field name; each service resolves it
/// against its own sort key set and falls back to the entity default when
/// the name is unknown.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Normalized search term; empty means no filter.
    pub search: SearchQuery,
    /// Raw requested sort field, if any.
    pub sort_by: Option<String>,
    /// Requested sort direction.
    pub direction: SortDirection,
}
