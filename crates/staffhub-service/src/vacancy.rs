//! Vacancy catalogue operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::{CompanyRepository, VacancyRepository};
use staffhub_database::UnitOfWork;
use staffhub_entity::vacancy::{CreateVacancy, UpdateVacancy, VacancyDetail, VacancySortKey};

use crate::params::ListParams;

/// Handles vacancy CRUD with company referential checks.
#[derive(Debug, Clone)]
pub struct VacancyService {
    pool: sqlx::PgPool,
    vacancies: Arc<VacancyRepository>,
    companies: Arc<CompanyRepository>,
}

impl VacancyService {
    /// Creates a new vacancy service.
    pub fn new(
        pool: sqlx::PgPool,
        vacancies: Arc<VacancyRepository>,
        companies: Arc<CompanyRepository>,
    ) -> Self {
        Self {
            pool,
            vacancies,
            companies,
        }
    }

    /// Lists all vacancies matching the search term, with company names.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<VacancyDetail>> {
        let (key, direction) = VacancySortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.vacancies.list(&params.search, key, direction).await
    }

    /// Lists one page of vacancies matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VacancyDetail>> {
        let (key, direction) = VacancySortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.vacancies
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single vacancy by id, with the company name.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<VacancyDetail>> {
        self.vacancies.find_detail(id).await
    }

    /// Creates a new vacancy after verifying the referenced company.
    ///
    /// Omitted `is_open` defaults to open; `created_at` is assigned by
    /// the storage layer.
    pub async fn create(&self, data: CreateVacancy) -> AppResult<VacancyDetail> {
        self.ensure_company(data.company_id).await?;

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.vacancies.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(vacancy_id = %row.id, "Vacancy created");

        self.vacancies
            .find_detail(row.id)
            .await?
            .ok_or_else(|| AppError::internal("Created vacancy could not be re-read"))
    }

    /// Replaces a vacancy; returns `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, data: UpdateVacancy) -> AppResult<Option<VacancyDetail>> {
        let Some(existing) = self.vacancies.find_by_id(id).await? else {
            return Ok(None);
        };

        if existing.company_id != data.company_id {
            self.ensure_company(data.company_id).await?;
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let updated = self.vacancies.update(&mut uow, id, &data).await?;
        uow.commit().await?;

        if updated.is_none() {
            return Ok(None);
        }

        info!(vacancy_id = %id, "Vacancy updated");

        self.vacancies.find_detail(id).await
    }

    /// Deletes a vacancy; returns `false` when the id does not exist.
    ///
    /// The vacancy's responses are removed by the storage-level cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.vacancies.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(vacancy_id = %id, "Vacancy deleted");
        }

        Ok(deleted)
    }

    async fn ensure_company(&self, id: Uuid) -> AppResult<()> {
        if !self.companies.exists(id).await? {
            return Err(AppError::validation(format!("Company {id} does not exist")));
        }
        Ok(())
    }
}
