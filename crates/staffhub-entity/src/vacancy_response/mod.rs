//! Vacancy response entity — a worker's application to a vacancy.

pub mod model;
pub mod sort;
pub mod status;

pub use model::{CreateVacancyResponse, UpdateVacancyResponse, VacancyResponse,
    VacancyResponseDetail};
pub use sort::VacancyResponseSortKey;
pub use status::ResponseStatus;
