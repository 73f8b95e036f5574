//! Integration tests for the StaffHub HTTP API.
//!
//! These run against a live PostgreSQL instance named by the
//! `STAFFHUB_TEST_DATABASE_URL` environment variable; without it every
//! test is a no-op skip. Tests serialize on a shared lock because they
//! clean and repopulate the same database.

mod helpers;

mod activity_type_test;
mod admin_test;
mod agreement_test;
mod company_test;
mod response_test;
mod vacancy_test;
mod worker_test;
