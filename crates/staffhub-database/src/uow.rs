//! Per-request unit of work.
//!
//! One `UnitOfWork` is constructed explicitly for each inbound write
//! request and handed down to the repositories that stage changes on it.
//! Staged writes are invisible to pool-level reads until [`UnitOfWork::commit`];
//! dropping an uncommitted unit of work rolls the transaction back, which
//! also covers a request future cancelled mid-flight — a cancelled
//! operation never half-commits.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;

/// An explicit transaction scope shared by all repositories of one request.
#[derive(Debug)]
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Begin a new transaction on the pool.
    pub async fn begin(pool: &PgPool) -> AppResult<Self> {
        let tx = pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;
        Ok(Self { tx })
    }

    /// The connection to execute staged statements on.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit all staged changes atomically.
    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Discard all staged changes.
    pub async fn rollback(self) -> AppResult<()> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
        })
    }
}
