//! Sort keys for worker listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns a worker listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkerSortKey {
    /// Order by last name (default).
    #[default]
    LastName,
    /// Order by first name.
    FirstName,
    /// Order by qualification.
    Qualification,
    /// Order by email.
    Email,
    /// Order by expected salary (textual).
    ExpectedSalary,
    /// Order by the related activity type name.
    ActivityTypeName,
}

impl WorkerSortKey {
    /// Resolve a raw sort-by string into a key and effective direction.
    ///
    /// Unrecognized or absent names fall back to the default key with
    /// ascending order.
    pub fn resolve(sort_by: Option<&str>, direction: SortDirection) -> (Self, SortDirection) {
        let Some(raw) = sort_by else {
            return (Self::default(), SortDirection::Asc);
        };
        match normalize_sort_name(raw).as_str() {
            "lastname" => (Self::LastName, direction),
            "firstname" => (Self::FirstName, direction),
            "qualification" => (Self::Qualification, direction),
            "email" => (Self::Email, direction),
            "expectedsalary" => (Self::ExpectedSalary, direction),
            "activitytypename" => (Self::ActivityTypeName, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::LastName => "w.last_name",
            Self::FirstName => "w.first_name",
            Self::Qualification => "w.qualification",
            Self::Email => "w.email",
            Self::ExpectedSalary => "w.expected_salary",
            Self::ActivityTypeName => "a.activity_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_and_underscore_insensitive() {
        for raw in ["lastName", "last_name", "LASTNAME"] {
            let (key, dir) = WorkerSortKey::resolve(Some(raw), SortDirection::Desc);
            assert_eq!(key, WorkerSortKey::LastName);
            assert_eq!(dir, SortDirection::Desc);
        }
    }

    #[test]
    fn test_related_entity_key() {
        let (key, _) = WorkerSortKey::resolve(Some("activityTypeName"), SortDirection::Asc);
        assert_eq!(key, WorkerSortKey::ActivityTypeName);
        assert_eq!(key.order_sql(), "a.activity_name");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let (key, dir) = WorkerSortKey::resolve(Some("salary"), SortDirection::Desc);
        assert_eq!(key, WorkerSortKey::LastName);
        assert_eq!(dir, SortDirection::Asc);
    }
}
