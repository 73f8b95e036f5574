//! Sorting types for list endpoints.
//!
//! The per-entity sort keys themselves live in `staffhub-entity`; this
//! module carries the direction type and the name normalization every key
//! enum resolves through.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse a direction from a raw query parameter.
    ///
    /// Only `"desc"` (case-insensitive) selects descending; anything else,
    /// including absence, is ascending.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Normalize a raw sort-by name for matching against a sort-key enum.
///
/// Lowercases and strips underscores so that `companyName`, `company_name`,
/// and `companyname` all resolve to the same key.
pub fn normalize_sort_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(SortDirection::from_param(None), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::from_param(Some("desc")), SortDirection::Desc);
        assert_eq!(
            SortDirection::from_param(Some("sideways")),
            SortDirection::Asc
        );
    }

    #[test]
    fn test_normalize_sort_name() {
        assert_eq!(normalize_sort_name("companyName"), "companyname");
        assert_eq!(normalize_sort_name("company_name"), "companyname");
        assert_eq!(normalize_sort_name("COMPANYNAME"), "companyname");
    }
}
