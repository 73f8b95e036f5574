//! Activity type repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::activity_type::{
    ActivityType, ActivityTypeSortKey, CreateActivityType, UpdateActivityType,
};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "activity type",
    select: "SELECT a.id, a.activity_name",
    from: "FROM activity_types a",
    search_columns: &["a.activity_name"],
    id_column: "a.id",
};

/// Repository for activity type CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ActivityTypeRepository {
    pool: PgPool,
}

impl ActivityTypeRepository {
    /// Create a new activity type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all activity types matching the search term, ordered.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: ActivityTypeSortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<ActivityType>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of activity types matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: ActivityTypeSortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ActivityType>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find an activity type by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ActivityType>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Check whether an activity type with the given id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM activity_types WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to check activity type existence",
                    e,
                )
            })
    }

    /// Stage an insert on the unit of work.
    pub async fn insert(
        &self,
        uow: &mut UnitOfWork,
        data: &CreateActivityType,
    ) -> AppResult<ActivityType> {
        sqlx::query_as::<_, ActivityType>(
            "INSERT INTO activity_types (activity_name) VALUES ($1) RETURNING *",
        )
        .bind(&data.activity_name)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create activity type", e)
        })
    }

    /// Stage a full-row replace on the unit of work.
    pub async fn update(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        data: &UpdateActivityType,
    ) -> AppResult<Option<ActivityType>> {
        sqlx::query_as::<_, ActivityType>(
            "UPDATE activity_types SET activity_name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.activity_name)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update activity type", e)
        })
    }

    /// Stage a removal; returns false when the id does not exist.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM activity_types WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete activity type", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total activity types.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity_types")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count activity types", e)
            })?;
        Ok(count as u64)
    }
}
