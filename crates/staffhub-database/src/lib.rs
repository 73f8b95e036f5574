//! # staffhub-database
//!
//! PostgreSQL connection management, the per-request unit of work, the
//! shared filtered/sorted/paged query facade, and concrete repository
//! implementations for all StaffHub entities.
//!
//! Reads run directly on the pool with no transaction; writes are staged
//! on a [`uow::UnitOfWork`] and become visible only at commit.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod seed;
pub mod uow;

pub use connection::create_pool;
pub use uow::UnitOfWork;
