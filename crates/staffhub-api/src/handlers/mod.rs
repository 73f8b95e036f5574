//! HTTP request handlers, one module per domain.

pub mod activity_type;
pub mod admin;
pub mod agreement;
pub mod company;
pub mod health;
pub mod vacancy;
pub mod vacancy_response;
pub mod worker;
