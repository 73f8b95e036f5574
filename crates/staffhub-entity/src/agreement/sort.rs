//! Sort keys for agreement listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns an agreement listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgreementSortKey {
    /// Order by position title.
    Position,
    /// Order by commission.
    Commission,
    /// Order by signing date (default).
    #[default]
    AgreementDate,
    /// Order by the placed worker's last name.
    WorkerName,
    /// Order by the hiring company's name.
    CompanyName,
}

impl AgreementSortKey {
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
            "commission" => (Self::Commission, direction),
            "agreementdate" => (Self::AgreementDate, direction),
            "workername" => (Self::WorkerName, direction),
            "companyname" => (Self::CompanyName, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::Position => "g.position",
            Self::Commission => "g.commission",
            Self::AgreementDate => "g.agreement_date",
            Self::WorkerName => "w.last_name",
            Self::CompanyName => "c.company_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys() {
        let (key, dir) = AgreementSortKey::resolve(Some("agreement_date"), SortDirection::Desc);
        assert_eq!(key, AgreementSortKey::AgreementDate);
        assert_eq!(dir, SortDirection::Desc);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let (key, dir) = AgreementSortKey::resolve(Some("signed"), SortDirection::Desc);
        assert_eq!(key, AgreementSortKey::AgreementDate);
        assert_eq!(dir, SortDirection::Asc);
    }
}
