//! Agreement repository implementation.
//!
//! The `agreements_worker_id_company_id_key` unique constraint is the
//! authoritative enforcement of one agreement per (worker, company) pair;
//! a violation raised by a racing insert maps to the same validation error
//! as the in-process fast-path check.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::agreement::{
    Agreement, AgreementDetail, AgreementSortKey, CreateAgreement, UpdateAgreement,
};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "agreement",
    select: "SELECT g.id, g.position, g.commission, g.agreement_date, g.worker_id, \
             g.company_id, w.last_name || ' ' || w.first_name AS worker_full_name, \
             c.company_name",
    from: "FROM agreements g \
           JOIN workers w ON w.id = g.worker_id \
           JOIN companies c ON c.id = g.company_id",
    search_columns: &[
        "g.position",
        "w.last_name",
        "w.first_name",
        "c.company_name",
    ],
    id_column: "g.id",
};

const PAIR_CONSTRAINT: &str = "agreements_worker_id_company_id_key";

/// Repository for agreement CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AgreementRepository {
    pool: PgPool,
}

impl AgreementRepository {
    /// Create a new agreement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all agreements matching the search term, with related names.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: AgreementSortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<AgreementDetail>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of agreements matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: AgreementSortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AgreementDetail>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find an agreement detail row by primary key.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<AgreementDetail>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Find a plain agreement row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Agreement>> {
        sqlx::query_as::<_, Agreement>("SELECT * FROM agreements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find agreement by id", e)
            })
    }

    /// Check whether an agreement already covers the (worker, company) pair.
    ///
    /// `exclude` skips the entity's own row during update checks.
    pub async fn pair_exists(
        &self,
        worker_id: Uuid,
        company_id: Uuid,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM agreements \
             WHERE worker_id = $1 AND company_id = $2 AND ($3::uuid IS NULL OR id <> $3))",
        )
        .bind(worker_id)
        .bind(company_id)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check agreement pair", e)
        })
    }

    /// Stage an insert on the unit of work.
    pub async fn insert(
        &self,
        uow: &mut UnitOfWork,
        data: &CreateAgreement,
    ) -> AppResult<Agreement> {
        sqlx::query_as::<_, Agreement>(
            "INSERT INTO agreements (position, commission, agreement_date, worker_id, company_id) \
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5) \
             RETURNING *",
        )
        .bind(&data.position)
        .bind(data.commission)
        .bind(data.agreement_date)
        .bind(data.worker_id)
        .bind(data.company_id)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| Self::map_pair_violation(e, "Failed to create agreement"))
    }

    /// Stage a full-row replace on the unit of work.
    pub async fn update(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        data: &UpdateAgreement,
    ) -> AppResult<Option<Agreement>> {
        sqlx::query_as::<_, Agreement>(
            "UPDATE agreements SET position = $2, commission = $3, agreement_date = $4, \
                                   worker_id = $5, company_id = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.position)
        .bind(data.commission)
        .bind(data.agreement_date)
        .bind(data.worker_id)
        .bind(data.company_id)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| Self::map_pair_violation(e, "Failed to update agreement"))
    }

    /// Stage a removal; returns false when the id does not exist.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM agreements WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete agreement", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total agreements.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agreements")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count agreements", e)
            })?;
        Ok(count as u64)
    }

    fn map_pair_violation(err: sqlx::Error, context: &str) -> AppError {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(PAIR_CONSTRAINT) => {
                AppError::validation(
                    "An agreement between this worker and company already exists",
                )
            }
            _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
        }
    }
}
