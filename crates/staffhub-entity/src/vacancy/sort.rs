//! Sort keys for vacancy listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns a vacancy listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VacancySortKey {
    /// Order by position title.
    Position,
    /// Order by salary.
    Salary,
    /// Order by posting date (default).
    #[default]
    CreatedAt,
    /// Order by open/closed flag.
    IsOpen,
    /// Order by the related company name.
    CompanyName,
}

impl VacancySortKey {
    /// Resolve a raw sort-by string into a key and effective direction.
    ///
    /// Unrecognized or absent names fall back to the default key with
    /// ascending order.
    pub fn resolve(sort_by: Option<&str>, direction: SortDirection) -> (Self, SortDirection) {
        let Some(raw) = sort_by else {
            return (Self::default(), SortDirection::Asc);
        };
        match normalize_sort_name(raw).as_str() {
            "position" => (Self::Position, direction),
            "salary" => (Self::Salary, direction),
            "createdat" => (Self::CreatedAt, direction),
            "isopen" => (Self::IsOpen, direction),
            "companyname" => (Self::CompanyName, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::Position => "v.position",
            Self::Salary => "v.salary",
            Self::CreatedAt => "v.created_at",
            Self::IsOpen => "v.is_open",
            Self::CompanyName => "c.company_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_salary_sorts_numerically() {
        let (key, dir) = VacancySortKey::resolve(Some("salary"), SortDirection::Desc);
        assert_eq!(key, VacancySortKey::Salary);
        assert_eq!(dir, SortDirection::Desc);
        assert_eq!(key.order_sql(), "v.salary");
    }

    #[test]
    fn test_unknown_key_falls_back_to_created_at() {
        let (key, dir) = VacancySortKey::resolve(Some("whatever"), SortDirection::Desc);
        assert_eq!(key, VacancySortKey::CreatedAt);
        assert_eq!(dir, SortDirection::Asc);
    }
}
