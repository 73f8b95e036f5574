//! Vacancy response repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::vacancy_response::{
    CreateVacancyResponse, ResponseStatus, VacancyResponse, VacancyResponseDetail,
    VacancyResponseSortKey,
};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "vacancy response",
    select: "SELECT r.id, r.sent_at, r.status, r.worker_id, r.vacancy_id, \
             w.last_name || ' ' || w.first_name AS worker_full_name, v.position",
    from: "FROM responses r \
           JOIN workers w ON w.id = r.worker_id \
           JOIN vacancies v ON v.id = r.vacancy_id",
    search_columns: &[
        "w.first_name",
        "w.last_name",
        "v.position",
        "r.status::text",
    ],
    id_column: "r.id",
};

/// Repository for vacancy response CRUD and query operations.
#[derive(Debug, Clone)]
pub struct VacancyResponseRepository {
    pool: PgPool,
}

impl VacancyResponseRepository {
    /// Create a new vacancy response repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all responses matching the search term, with related names.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: VacancyResponseSortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<VacancyResponseDetail>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of responses matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: VacancyResponseSortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VacancyResponseDetail>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find a response detail row by primary key.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<VacancyResponseDetail>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Find a plain response row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VacancyResponse>> {
        sqlx::query_as::<_, VacancyResponse>("SELECT * FROM responses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find response by id", e)
            })
    }

    /// Stage an insert on the unit of work.
    ///
    /// Every response starts pending with a server-assigned `sent_at`.
    pub async fn insert(
        &self,
        uow: &mut UnitOfWork,
        data: &CreateVacancyResponse,
    ) -> AppResult<VacancyResponse> {
        sqlx::query_as::<_, VacancyResponse>(
            "INSERT INTO responses (sent_at, status, worker_id, vacancy_id) \
             VALUES (NOW(), $1, $2, $3) \
             RETURNING *",
        )
        .bind(ResponseStatus::Pending)
        .bind(data.worker_id)
        .bind(data.vacancy_id)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create response", e))
    }

    /// Stage a status update on the unit of work.
    pub async fn update_status(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        status: ResponseStatus,
    ) -> AppResult<Option<VacancyResponse>> {
        sqlx::query_as::<_, VacancyResponse>(
            "UPDATE responses SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update response status", e)
        })
    }

    /// Stage a removal; returns false when the id does not exist.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM responses WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete response", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total responses.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM responses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count responses", e)
            })?;
        Ok(count as u64)
    }
}
