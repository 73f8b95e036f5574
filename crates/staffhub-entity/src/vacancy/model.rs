//! Vacancy entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job opening posted by a company.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    /// Unique identifier.
    pub id: Uuid,
    /// Position title.
    pub position: String,
    /// Free-form description (optional).
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// When the vacancy was posted.
    pub created_at: DateTime<Utc>,
    /// Whether the vacancy is still accepting responses.
    pub is_open: bool,
    /// Company that posted the vacancy.
    pub company_id: Uuid,
}

/// Vacancy row joined with its company name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyDetail {
    /// Unique identifier.
    pub id: Uuid,
    /// Position title.
    pub position: String,
    /// Free-form description (optional).
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// When the vacancy was posted.
    pub created_at: DateTime<Utc>,
    /// Whether the vacancy is still accepting responses.
    pub is_open: bool,
    /// Company that posted the vacancy.
    pub company_id: Uuid,
    /// Denormalized company name.
    pub company_name: String,
}

/// Data required to create a new vacancy.
///
/// `created_at` is always server-assigned; `is_open` defaults to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVacancy {
    /// Position title.
    pub position: String,
    /// Free-form description (optional).
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// Whether the vacancy starts open. Defaults to true.
    pub is_open: Option<bool>,
    /// Referenced company.
    pub company_id: Uuid,
}

/// Data for replacing an existing vacancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVacancy {
    /// Position title.
    pub position: String,
    /// Free-form description (optional).
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// Whether the vacancy is still accepting responses.
    pub is_open: bool,
    /// Referenced company.
    pub company_id: Uuid,
}
