//! # staffhub-service
//!
//! Business logic service layer for StaffHub. Each service orchestrates
//! repositories and units of work to implement application-level use
//! cases: referential checks before writes, status transition rules,
//! and uniqueness guarantees.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod activity_type;
pub mod admin;
pub mod agreement;
pub mod company;
pub mod params;
pub mod vacancy;
pub mod vacancy_response;
pub mod worker;

pub use activity_type::ActivityTypeService;
pub use admin::AdminService;
pub use agreement::AgreementService;
pub use company::CompanyService;
pub use params::ListParams;
pub use vacancy::VacancyService;
pub use vacancy_response::VacancyResponseService;
pub use worker::WorkerService;
