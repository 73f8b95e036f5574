//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Constructed through [`PageRequest::try_new`], which rejects out-of-range
/// values instead of silently clamping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request, validating bounds.
    ///
    /// `page` must be at least 1 and `page_size` must lie in
    /// `[1, MAX_PAGE_SIZE]`; anything else is a validation error.
    pub fn try_new(page: u64, page_size: u64) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::validation("page must be at least 1"));
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self { page, page_size })
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    ///
    /// `total_items` is the count of the filtered-but-unpaged set; a page
    /// past the end carries empty items together with the true total.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Map the page items to another shape, carrying the metadata over.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_valid_bounds() {
        let page = PageRequest::try_new(1, 1).unwrap();
        assert_eq!(page.offset(), 0);
        let page = PageRequest::try_new(3, 100).unwrap();
        assert_eq!(page.offset(), 200);
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(PageRequest::try_new(0, 10).is_err());
        assert!(PageRequest::try_new(1, 0).is_err());
        assert!(PageRequest::try_new(1, 101).is_err());
    }

    #[test]
    fn test_page_response_metadata() {
        let page = PageResponse::new(vec![1, 2], 1, 2, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_previous);

        let last = PageResponse::new(vec![5], 3, 2, 5);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let page = PageResponse::<i32>::new(Vec::new(), 1, 10, 0);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = PageResponse::new(vec![1, 2, 3], 2, 3, 7);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_items, 7);
        assert_eq!(mapped.total_pages, 3);
    }
}
