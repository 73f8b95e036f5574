//! Agreement entity — a signed placement between a worker and a company.

pub mod model;
pub mod sort;

pub use model::{Agreement, AgreementDetail, CreateAgreement, UpdateAgreement};
pub use sort::AgreementSortKey;
