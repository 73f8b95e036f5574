//! Vacancy response entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ResponseStatus;

/// A worker's application to a vacancy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyResponse {
    /// Unique identifier.
    pub id: Uuid,
    /// When the response was sent.
    pub sent_at: DateTime<Utc>,
    /// Processing status.
    pub status: ResponseStatus,
    /// Responding worker.
    pub worker_id: Uuid,
    /// Target vacancy.
    pub vacancy_id: Uuid,
}

/// Response row joined with worker and vacancy names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyResponseDetail {
    /// Unique identifier.
    pub id: Uuid,
    /// When the response was sent.
    pub sent_at: DateTime<Utc>,
    /// Processing status.
    pub status: ResponseStatus,
    /// Responding worker.
    pub worker_id: Uuid,
    /// Target vacancy.
    pub vacancy_id: Uuid,
    /// Denormalized worker full name ("Last First").
    pub worker_full_name: String,
    /// Denormalized position title of the vacancy.
    pub position: String,
}

/// Data required to create a new response.
///
/// A response always starts pending with a server-assigned `sent_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacancyResponse {
    /// Responding worker.
    pub worker_id: Uuid,
    /// Target vacancy.
    pub vacancy_id: Uuid,
}

/// Data for updating an existing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVacancyResponse {
    /// New processing status; checked against the transition table.
    pub status: ResponseStatus,
}
