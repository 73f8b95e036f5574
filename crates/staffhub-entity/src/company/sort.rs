//! Sort keys for company listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns a company listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompanySortKey {
    /// Order by company name (default).
    #[default]
    CompanyName,
    /// Order by email.
    Email,
    /// Order by address.
    Address,
    /// Order by phone number.
    Phone,
    /// Order by the related activity type name.
    ActivityTypeName,
}

impl CompanySortKey {
    /// Resolve a raw sort-by string into a key and effective direction.
    ///
    /// Unrecognized or absent names fall back to the default key with
    /// ascending order.
    pub fn resolve(sort_by: Option<&str>, direction: SortDirection) -> (Self, SortDirection) {
        let Some(raw) = sort_by else {
            return (Self::default(), SortDirection::Asc);
        };
        match normalize_sort_name(raw).as_str() {
            "companyname" => (Self::CompanyName, direction),
            // "emailcompany" is the historical name some clients still send.
            "email" | "emailcompany" => (Self::Email, direction),
            "address" => (Self::Address, direction),
            "phone" => (Self::Phone, direction),
            "activitytypename" => (Self::ActivityTypeName, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::CompanyName => "c.company_name",
            Self::Email => "c.email",
            Self::Address => "c.address",
            Self::Phone => "c.phone",
            Self::ActivityTypeName => "a.activity_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        let (key, dir) = CompanySortKey::resolve(Some("companyName"), SortDirection::Desc);
        assert_eq!(key, CompanySortKey::CompanyName);
        assert_eq!(dir, SortDirection::Desc);

        let (key, _) = CompanySortKey::resolve(Some("emailCompany"), SortDirection::Asc);
        assert_eq!(key, CompanySortKey::Email);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let (key, dir) = CompanySortKey::resolve(Some("nonexistent_field"), SortDirection::Desc);
        assert_eq!(key, CompanySortKey::CompanyName);
        assert_eq!(dir, SortDirection::Asc);
    }

    #[test]
    fn test_absent_key_is_default_ascending() {
        let (key, dir) = CompanySortKey::resolve(None, SortDirection::Desc);
        assert_eq!(key, CompanySortKey::CompanyName);
        assert_eq!(dir, SortDirection::Asc);
    }
}
