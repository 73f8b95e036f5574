//! # staffhub-core
//!
//! Core crate for StaffHub. Contains configuration schemas, the unified
//! error system, and the shared pagination/sorting/search types that the
//! data-access and service layers build on.
//!
//! This crate has **no** internal dependencies on other StaffHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
