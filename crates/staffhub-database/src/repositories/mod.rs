//! Concrete repository implementations.
//!
//! Repositories are stateless views over the shared pool: reads run
//! directly on it, writes are staged on the caller's [`crate::UnitOfWork`]
//! and take effect at commit.

pub mod activity_type;
pub mod agreement;
pub mod company;
pub mod vacancy;
pub mod vacancy_response;
pub mod worker;

pub use activity_type::ActivityTypeRepository;
pub use agreement::AgreementRepository;
pub use company::CompanyRepository;
pub use vacancy::VacancyRepository;
pub use vacancy_response::VacancyResponseRepository;
pub use worker::WorkerRepository;
