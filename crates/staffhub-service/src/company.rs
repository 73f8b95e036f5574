//! Company catalogue operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::{ActivityTypeRepository, CompanyRepository};
use staffhub_database::UnitOfWork;
use staffhub_entity::company::{CompanyDetail, CompanySortKey, CreateCompany, UpdateCompany};

use crate::params::ListParams;

/// Handles company CRUD with activity type referential checks.
#[derive(Debug, Clone)]
pub struct CompanyService {
    pool: sqlx::PgPool,
    companies: Arc<CompanyRepository>,
    activity_types: Arc<ActivityTypeRepository>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(
        pool: sqlx::PgPool,
        companies: Arc<CompanyRepository>,
        activity_types: Arc<ActivityTypeRepository>,
    ) -> Self {
        Self {
            pool,
            companies,
            activity_types,
        }
    }

    /// Lists all companies matching the search term, with activity type names.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<CompanyDetail>> {
        let (key, direction) = CompanySortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.companies.list(&params.search, key, direction).await
    }

    /// Lists one page of companies matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CompanyDetail>> {
        let (key, direction) = CompanySortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.companies
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single company by id, with the activity type name.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<CompanyDetail>> {
        self.companies.find_detail(id).await
    }

    /// Creates a new company after verifying the referenced activity type.
    pub async fn create(&self, data: CreateCompany) -> AppResult<CompanyDetail> {
        self.ensure_activity_type(data.activity_type_id).await?;

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.companies.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(company_id = %row.id, "Company created");

        self.companies
            .find_detail(row.id)
            .await?
            .ok_or_else(|| AppError::internal("Created company could not be re-read"))
    }

    /// Replaces a company; returns `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, data: UpdateCompany) -> AppResult<Option<CompanyDetail>> {
        let Some(existing) = self.companies.find_by_id(id).await? else {
            return Ok(None);
        };

        if existing.activity_type_id != data.activity_type_id {
            self.ensure_activity_type(data.activity_type_id).await?;
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let updated = self.companies.update(&mut uow, id, &data).await?;
        uow.commit().await?;

        if updated.is_none() {
            return Ok(None);
        }

        info!(company_id = %id, "Company updated");

        self.companies.find_detail(id).await
    }

    /// Deletes a company; returns `false` when the id does not exist.
    ///
    /// The company's vacancies, their responses, and its agreements are
    /// removed by the storage-level cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.companies.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(company_id = %id, "Company deleted");
        }

        Ok(deleted)
    }

    async fn ensure_activity_type(&self, id: Uuid) -> AppResult<()> {
        if !self.activity_types.exists(id).await? {
            return Err(AppError::validation(format!(
                "Activity type {id} does not exist"
            )));
        }
        Ok(())
    }
}
