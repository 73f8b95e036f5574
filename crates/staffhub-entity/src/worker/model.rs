//! Worker entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job seeker registered with the agency.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Worker {
    /// Unique identifier.
    pub id: Uuid,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Professional qualification.
    pub qualification: String,
    /// Contact email.
    pub email: String,
    /// Expected salary, free text.
    pub expected_salary: String,
    /// Additional free-form information.
    pub other_info: Option<String>,
    /// Field of activity this worker belongs to.
    pub activity_type_id: Uuid,
}

/// Worker row joined with its activity type name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkerDetail {
    /// Unique identifier.
    pub id: Uuid,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Professional qualification.
    pub qualification: String,
    /// Contact email.
    pub email: String,
    /// Expected salary, free text.
    pub expected_salary: String,
    /// Additional free-form information.
    pub other_info: Option<String>,
    /// Field of activity this worker belongs to.
    pub activity_type_id: Uuid,
    /// Denormalized activity type name.
    pub activity_type_name: String,
}

/// Data required to create a new worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorker {
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Professional qualification.
    pub qualification: String,
    /// Contact email.
    pub email: String,
    /// Expected salary, free text.
    pub expected_salary: String,
    /// Additional free-form information.
    pub other_info: Option<String>,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}

/// Data for replacing an existing worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorker {
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name (optional).
    pub middle_name: Option<String>,
    /// Professional qualification.
    pub qualification: String,
    /// Contact email.
    pub email: String,
    /// Expected salary, free text.
    pub expected_salary: String,
    /// Additional free-form information.
    pub other_info: Option<String>,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}
