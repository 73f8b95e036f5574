//! Sort keys for activity type listings.

use staffhub_core::types::sorting::{SortDirection, normalize_sort_name};

/// Closed set of columns an activity type listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityTypeSortKey {
    /// Order by activity name (default).
    #[default]
    ActivityName,
}

impl ActivityTypeSortKey {
    /// Resolve a raw sort-by string into a key and effective direction.
    ///
    /// Resolution never fails: an unrecognized or absent name falls back to
    /// the default key with ascending order, ignoring the requested
    /// direction.
    pub fn resolve(sort_by: Option<&str>, direction: SortDirection) -> (Self, SortDirection) {
        let Some(raw) = sort_by else {
            return (Self::default(), SortDirection::Asc);
        };
        match normalize_sort_name(raw).as_str() {
            "activityname" => (Self::ActivityName, direction),
            _ => (Self::default(), SortDirection::Asc),
        }
    }

    /// The ORDER BY expression for this key.
    pub fn order_sql(&self) -> &'static str {
        match self {
            Self::ActivityName => "a.activity_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_key_keeps_direction() {
        let (key, dir) =
            ActivityTypeSortKey::resolve(Some("activity_name"), SortDirection::Desc);
        assert_eq!(key, ActivityTypeSortKey::ActivityName);
        assert_eq!(dir, SortDirection::Desc);
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_ascending() {
        let (key, dir) =
            ActivityTypeSortKey::resolve(Some("nonexistent_field"), SortDirection::Desc);
        assert_eq!(key, ActivityTypeSortKey::ActivityName);
        assert_eq!(dir, SortDirection::Asc);
    }
}
