//! Activity type entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A field of activity that workers and companies belong to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityType {
    /// Unique identifier.
    pub id: Uuid,
    /// Name of the activity field.
    pub activity_name: String,
}

/// Data required to create a new activity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityType {
    /// Name of the activity field.
    pub activity_name: String,
}

/// Data for replacing an existing activity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateActivityType {
    /// New name of the activity field.
    pub activity_name: String,
}
