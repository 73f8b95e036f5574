//! Company repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_core::types::search::SearchQuery;
use staffhub_core::types::sorting::SortDirection;
use staffhub_entity::company::{
    Company, CompanyDetail, CompanySortKey, CreateCompany, UpdateCompany,
};

use crate::query::EntityQuery;
use crate::uow::UnitOfWork;

const QUERY: EntityQuery = EntityQuery {
    entity: "company",
    select: "SELECT c.id, c.company_name, c.email, c.address, c.phone, c.activity_type_id, \
             a.activity_name AS activity_type_name",
    from: "FROM companies c JOIN activity_types a ON a.id = c.activity_type_id",
    search_columns: &[
        "c.company_name",
        "c.email",
        "c.address",
        "c.phone",
        "a.activity_name",
    ],
    id_column: "c.id",
};

/// Repository for company CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all companies matching the search term, with activity type names.
    pub async fn list(
        &self,
        search: &SearchQuery,
        key: CompanySortKey,
        direction: SortDirection,
    ) -> AppResult<Vec<CompanyDetail>> {
        QUERY
            .fetch_all(&self.pool, search, key.order_sql(), direction)
            .await
    }

    /// List one page of companies matching the search term.
    pub async fn list_paged(
        &self,
        search: &SearchQuery,
        key: CompanySortKey,
        direction: SortDirection,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CompanyDetail>> {
        QUERY
            .fetch_page(&self.pool, search, key.order_sql(), direction, page)
            .await
    }

    /// Find a company detail row by primary key.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<CompanyDetail>> {
        QUERY.fetch_by_id(&self.pool, id).await
    }

    /// Find a plain company row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find company by id", e)
            })
    }

    /// Check whether a company with the given id exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check company existence", e)
            })
    }

    /// Stage an insert on the unit of work.
    pub async fn insert(&self, uow: &mut UnitOfWork, data: &CreateCompany) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (company_name, email, address, phone, activity_type_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.company_name)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(data.activity_type_id)
        .fetch_one(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create company", e))
    }

    /// Stage a full-row replace on the unit of work.
    pub async fn update(
        &self,
        uow: &mut UnitOfWork,
        id: Uuid,
        data: &UpdateCompany,
    ) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET company_name = $2, email = $3, address = $4, phone = $5, \
                                  activity_type_id = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.company_name)
        .bind(&data.email)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(data.activity_type_id)
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update company", e))
    }

    /// Stage a removal; returns false when the id does not exist.
    ///
    /// Deleting a company cascades at the storage level to its vacancies,
    /// their responses, and its agreements.
    pub async fn delete(&self, uow: &mut UnitOfWork, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete company", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total companies.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count companies", e)
            })?;
        Ok(count as u64)
    }
}
