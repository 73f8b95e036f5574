//! Administrative data management: seeding, clearing, and row counts.

use tracing::info;

use staffhub_core::result::AppResult;
use staffhub_database::seed::{self, SeedStats};

/// Handles demo data population and teardown.
#[derive(Debug, Clone)]
pub struct AdminService {
    pool: sqlx::PgPool,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Populates every table with generated data.
    ///
    /// Fails when the database already holds rows.
    pub async fn seed(&self) -> AppResult<SeedStats> {
        seed::seed_all(&self.pool).await
    }

    /// Seeds only when every table is empty; returns `None` otherwise.
    ///
    /// Used at startup when automatic seeding is enabled.
    pub async fn seed_if_empty(&self) -> AppResult<Option<SeedStats>> {
        if seed::stats(&self.pool).await?.is_empty() {
            let stats = seed::seed_all(&self.pool).await?;
            info!("Seeded empty database on startup");
            Ok(Some(stats))
        } else {
            Ok(None)
        }
    }

    /// Removes every row from every table.
    pub async fn clear(&self) -> AppResult<()> {
        seed::clear_all(&self.pool).await?;
        info!("Cleared all data");
        Ok(())
    }

    /// Reports the current row count of every table.
    pub async fn stats(&self) -> AppResult<SeedStats> {
        seed::stats(&self.pool).await
    }
}
