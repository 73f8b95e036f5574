//! Worker (job seeker) entity.

pub mod model;
pub mod sort;

pub use model::{CreateWorker, UpdateWorker, Worker, WorkerDetail};
pub use sort::WorkerSortKey;
