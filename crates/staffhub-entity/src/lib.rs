//! # staffhub-entity
//!
//! Domain entity models for StaffHub. Every struct in this crate
//! represents a database table row, a joined detail projection, or a
//! create/update payload. All entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and database entities additionally derive
//! `sqlx::FromRow`.
//!
//! Each entity module also carries its closed sort-key enum: raw sort-by
//! strings from the caller are resolved into these enums exactly once at
//! the service boundary, and only typed keys reach the query layer.

pub mod activity_type;
pub mod agreement;
pub mod company;
pub mod vacancy;
pub mod vacancy_response;
pub mod worker;
