//! Company (employer) entity.

pub mod model;
pub mod sort;

pub use model::{Company, CompanyDetail, CreateCompany, UpdateCompany};
pub use sort::CompanySortKey;
