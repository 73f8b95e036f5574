//! Sort keys for vacancy response listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns a response listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VacancyResponseSortKey {
    /// Order by the responding worker's last name.
    WorkerName,
    /// Order by the vacancy's position title.
    Position,
    /// Order by status.
    Status,
    /// Order by the time the response was sent (default).
    #[default]
    SentAt,
}

impl VacancyResponseSortKey {
    /// Resolve a raw sort-by string into a key and effective direction.
    ///
    /// Unrecognized or absent names fall back to the default key with
    /// ascending order.
    pub fn resolve(sort_by: Option<&str>, direction: SortDirection) -> (Self, SortDirection) {
        let Some(raw) = sort_by else {
            return (Self::default(), SortDirection::Asc);
        };
        match normalize_sort_name(raw).as_str() {
            "workername" => (Self::WorkerName, direction),
            "position" => (Self::Position, direction),
            "status" => (Self::Status, direction),
            "sentat" => (Self::SentAt, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::WorkerName => "w.last_name",
            Self::Position => "v.position",
            Self::Status => "r.status",
            Self::SentAt => "r.sent_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_name_sorts_by_last_name() {
        let (key, _) = VacancyResponseSortKey::resolve(Some("workerName"), SortDirection::Asc);
        assert_eq!(key, VacancyResponseSortKey::WorkerName);
        assert_eq!(key.order_sql(), "w.last_name");
    }

    #[test]
    fn test_unknown_key_falls_back_to_sent_at() {
        let (key, dir) = VacancyResponseSortKey::resolve(Some("vacancy"), SortDirection::Desc);
        assert_eq!(key, VacancyResponseSortKey::SentAt);
        assert_eq!(dir, SortDirection::Asc);
    }
}
