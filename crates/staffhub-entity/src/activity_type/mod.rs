//! Activity type entity.

pub mod model;
pub mod sort;

pub use model::{ActivityType, CreateActivityType, UpdateActivityType};
pub use sort::ActivityTypeSortKey;
