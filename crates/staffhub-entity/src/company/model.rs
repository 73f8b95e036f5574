//! Company entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employer that posts vacancies and signs agreements.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Unique identifier.
    pub id: Uuid,
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Field of activity this company operates in.
    pub activity_type_id: Uuid,
}

/// Company row joined with its activity type name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyDetail {
    /// Unique identifier.
    pub id: Uuid,
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Field of activity this company operates in.
    pub activity_type_id: Uuid,
    /// Denormalized activity type name.
    pub activity_type_name: String,
}

/// Data required to create a new company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompany {
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}

/// Data for replacing an existing company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompany {
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}
