//! Vacancy repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::vacancy::{
    CreateVacancy, UpdateVacancy, Vacancy, VacancyDetail, VacancySortKey,
};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "vacancy",
    select: "SELECT v.id, v.position, v.description, v.salary, v.created_at, v.is_open, \
             v.company_id, c.company_name",
    from: "FROM vacancies v JOIN companies c ON c.id = v.company_id",
    // Salary is numeric; the search contract matches its textual form.
    search_columns: &[
        "v.position",
        "v.description",
        "v.salary::text",
        "c.company_name",
    ],
    id_column: "v.id",
};

/// Repository for vacancy CRUD and query operations.
#[derive(Debug, Clone)]
pub struct VacancyRepository {
    pool: PgPool,
}

impl VacancyRepository {
    /// Create a new vacancy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all vacancies matching the search term, with company names.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: VacancySortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<VacancyDetail>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of vacancies matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: VacancySortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VacancyDetail>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find a vacancy detail row by primary key.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<VacancyDetail>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Find a plain vacancy row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vacancy>> {
        sqlx::query_as::<_, Vacancy>("SELECT * FROM vacancies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find vacancy by id", e)
            })
    }

    /// Check whether a vacancy with the given id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vacancies WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check vacancy existence", e)
            })
    }

    /// Stage an insert on the unit of work.
    ///
    /// `created_at` is server-assigned; `is_open` defaults to true.
    pub async fn insert(&self, uow: &mut UnitOfWork, data: &CreateVacancy) -> AppResult<Vacancy> {
        sqlx::query_as::<_, Vacancy>(
            "INSERT INTO vacancies (position, description, salary, created_at, is_open, company_id) \
             VALUES ($1, $2, $3, NOW(), $4, $5) \
             RETURNING *",
        )
        .bind(&data.position)
        .bind(&data.description)
        .bind(data.salary)
        .bind(data.is_open.unwrap_or(true))
        .bind(data.company_id)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create vacancy", e))
    }

    /// Stage a full-row replace on the unit of work.
    pub async fn update(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        data: &UpdateVacancy,
    ) -> AppResult<Option<Vacancy>> {
        sqlx::query_as::<_, Vacancy>(
            "UPDATE vacancies SET position = $2, description = $3, salary = $4, is_open = $5, \
                                  company_id = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.position)
        .bind(&data.description)
        .bind(data.salary)
        .bind(data.is_open)
        .bind(data.company_id)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update vacancy", e))
    }

    /// Stage a removal; returns false when the id does not exist.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete vacancy", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total vacancies.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vacancies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count vacancies", e)
            })?;
        Ok(count as u64)
    }
}
