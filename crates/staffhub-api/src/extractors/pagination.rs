//! Search, sort, and pagination query parameter types.

use serde::{Deserialize, Serialize};

use staffhub_core::error::AppError;
use staffhub_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_service::ListParams;

/// Query parameters for unpaged list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQueryParams {
    /// Free-text search term (optional).
    pub search: Option<String>,
    /// Sort field (optional).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    pub sort_dir: Option<String>,
}

impl ListQueryParams {
    /// Converts to service-layer list parameters.
    pub fn into_list_params(self) -> ListParams {
        ListParams {
            search: SearchQuery::new(self.search),
            sort_by: self.sort_by,
            direction: SortDirection::from_param(self.sort_dir.as_deref()),
        }
    }
}

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedQueryParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Free-text search term (optional).
    pub search: Option<String>,
    /// Sort field (optional).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    pub sort_dir: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PagedQueryParams {
    /// Converts to a validated page request plus list parameters.
    ///
    /// Out-of-range page values are rejected rather than clamped.
    pub fn into_parts(self) -> Result<(PageRequest, ListParams), AppError> {
        let page = PageRequest::try_new(self.page, self.per_page)?;
        let params = ListParams {
            search: SearchQuery::new(self.search),
            sort_by: self.sort_by,
            direction: SortDirection::from_param(self.sort_dir.as_deref()),
        };
        Ok((page, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let params: PagedQueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
    }

    #[test]
    fn test_out_of_range_page_rejected() {
        let params = PagedQueryParams {
            page: 0,
            per_page: 10,
            search: None,
            sort_by: None,
            sort_dir: None,
        };
        assert!(params.into_parts().is_err());

        let params = PagedQueryParams {
            page: 1,
            per_page: 101,
            search: None,
            sort_by: None,
            sort_dir: None,
        };
        assert!(params.into_parts().is_err());
    }

    #[test]
    fn test_sort_dir_parsing() {
        let params = ListQueryParams {
            search: None,
            sort_by: Some("lastName".to_string()),
            sort_dir: Some("DESC".to_string()),
        };
        let list = params.into_list_params();
        assert_eq!(list.direction, SortDirection::Desc);
        assert_eq!(list.sort_by.as_deref(), Some("lastName"));
    }
}
