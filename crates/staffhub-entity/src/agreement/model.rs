//! Agreement entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A placement agreement between a worker and a company.
///
/// At most one agreement may exist per (worker, company) pair; the unique
/// constraint on those columns is the authoritative enforcement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agreement {
    /// Unique identifier.
    pub id: Uuid,
    /// Position the worker was placed into.
    pub position: String,
    /// Agency commission.
    pub commission: Decimal,
    /// When the agreement was signed.
    pub agreement_date: DateTime<Utc>,
    /// Placed worker.
    pub worker_id: Uuid,
    /// Hiring company.
    pub company_id: Uuid,
}

/// Agreement row joined with worker and company names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AgreementDetail {
    /// Unique identifier.
    pub id: Uuid,
    /// Position the worker was placed into.
    pub position: String,
    /// Agency commission.
    pub commission: Decimal,
    /// When the agreement was signed.
    pub agreement_date: DateTime<Utc>,
    /// Placed worker.
    pub worker_id: Uuid,
    /// Hiring company.
    pub company_id: Uuid,
    /// Denormalized worker full name ("Last First").
    pub worker_full_name: String,
    /// Denormalized company name.
    pub company_name: String,
}

/// Data required to create a new agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgreement {
    /// Position the worker was placed into.
    pub position: String,
    /// Agency commission.
    pub commission: Decimal,
    /// Signing date. Defaults to now when absent.
    pub agreement_date: Option<DateTime<Utc>>,
    /// Referenced worker.
    pub worker_id: Uuid,
    /// Referenced company.
    pub company_id: Uuid,
}

/// Data for replacing an existing agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAgreement {
    /// Position the worker was placed into.
    pub position: String,
    /// Agency commission.
    pub commission: Decimal,
    /// Signing date.
    pub agreement_date: DateTime<Utc>,
    /// Referenced worker.
    pub worker_id: Uuid,
    /// Referenced company.
    pub company_id: Uuid,
}
