//! Vacancy (job posting) entity.

pub mod model;
pub mod sort;

pub use model::{CreateVacancy, UpdateVacancy, Vacancy, VacancyDetail};
pub use sort::VacancySortKey;
