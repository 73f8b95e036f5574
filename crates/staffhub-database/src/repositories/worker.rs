//! Worker repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::worker::{CreateWorker, UpdateWorker, Worker, WorkerDetail, WorkerSortKey};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "worker",
    select: "SELECT w.id, w.last_name, w.first_name, w.middle_name, w.qualification, \
             w.email, w.expected_salary, w.other_info, w.activity_type_id, \
             a.activity_name AS activity_type_name",
    from: "FROM workers w JOIN activity_types a ON a.id = w.activity_type_id",
    search_columns: &[
        "w.last_name",
        "w.first_name",
        "w.qualification",
        "w.email",
        "w.expected_salary",
        "a.activity_name",
    ],
    id_column: "w.id",
};

/// Repository for worker CRUD and query operations.
#[derive(Debug, Clone)]
pub struct WorkerRepository {
    pool: PgPool,
}

impl WorkerRepository {
    /// Create a new worker repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all workers matching the search term, with activity type names.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: WorkerSortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<WorkerDetail>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of workers matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: WorkerSortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<WorkerDetail>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find a worker detail row by primary key.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<WorkerDetail>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Find a plain worker row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Worker>> {
        sqlx::query_as::<_, Worker>("SELECT * FROM workers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find worker by id", e)
            })
    }

    /// Check whether a worker with the given id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM workers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check worker existence", e)
            })
    }

    /// Stage an insert on the unit of work.
    pub async fn insert(&self, uow: &mut UnitOfWork, data: &CreateWorker) -> AppResult<Worker> {
        sqlx::query_as::<_, Worker>(
            "INSERT INTO workers (last_name, first_name, middle_name, qualification, \
                                  email, expected_salary, other_info, activity_type_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.qualification)
        .bind(&data.email)
        .bind(&data.expected_salary)
        .bind(&data.other_info)
        .bind(data.activity_type_id)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create worker", e))
    }

    /// Stage a full-row replace on the unit of work.
    pub async fn update(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        data: &UpdateWorker,
    ) -> AppResult<Option<Worker>> {
        sqlx::query_as::<_, Worker>(
            "UPDATE workers SET last_name = $2, first_name = $3, middle_name = $4, \
                                qualification = $5, email = $6, expected_salary = $7, \
                                other_info = $8, activity_type_id = $9 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.qualification)
        .bind(&data.email)
        .bind(&data.expected_salary)
        .bind(&data.other_info)
        .bind(data.activity_type_id)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update worker", e))
    }

    /// Stage a removal; returns false when the id does not exist.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workers WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete worker", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total workers.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count workers", e)
            })?;
        Ok(count as u64)
    }
}
