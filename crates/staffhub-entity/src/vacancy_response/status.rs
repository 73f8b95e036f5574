//! Vacancy response status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Processing status of a worker's response to a vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "response_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Awaiting review.
    Pending,
    /// Accepted by the company.
    Accepted,
    /// Rejected by the company.
    Rejected,
}

impl ResponseStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Check whether a transition to `next` is allowed.
    ///
    /// Pending may move to accepted or rejected; accepted and rejected are
    /// terminal. A same-status update is always a permitted no-op.
    pub fn can_transition_to(&self, next: ResponseStatus) -> bool {
        *self == next || matches!(self, Self::Pending)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseStatus {
    type Err = staffhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(staffhub_core::AppError::validation(format!(
                "Invalid response status: '{s}'. Expected one of: pending, accepted, rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_may_move_to_either_outcome() {
        assert!(ResponseStatus::Pending.can_transition_to(ResponseStatus::Accepted));
        assert!(ResponseStatus::Pending.can_transition_to(ResponseStatus::Rejected));
        assert!(ResponseStatus::Pending.can_transition_to(ResponseStatus::Pending));
    }

    #[test]
    fn test_outcomes_are_terminal() {
        assert!(!ResponseStatus::Accepted.can_transition_to(ResponseStatus::Rejected));
        assert!(!ResponseStatus::Accepted.can_transition_to(ResponseStatus::Pending));
        assert!(!ResponseStatus::Rejected.can_transition_to(ResponseStatus::Accepted));
        assert!(!ResponseStatus::Rejected.can_transition_to(ResponseStatus::Pending));
    }

    #[test]
    fn test_same_status_is_a_no_op() {
        assert!(ResponseStatus::Accepted.can_transition_to(ResponseStatus::Accepted));
        assert!(ResponseStatus::Rejected.can_transition_to(ResponseStatus::Rejected));
    }

    #[test]
    fn test_from_str_round_trip() {
        for status in [
            ResponseStatus::Pending,
            ResponseStatus::Accepted,
            ResponseStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ResponseStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<ResponseStatus>().is_err());
    }
}
