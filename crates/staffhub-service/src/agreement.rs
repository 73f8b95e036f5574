//! Agreement operations.
//!
//! At most one agreement may exist per (worker, company) pair. The
//! service checks the pair up front for a friendly error, and the
//! unique constraint in storage settles any race between concurrent
//! writers with the same validation error.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::{
    AgreementRepository, CompanyRepository, WorkerRepository,
};
use staffhub_database::UnitOfWork;
use staffhub_entity::agreement::{
    AgreementDetail, AgreementSortKey, CreateAgreement, UpdateAgreement,
};

use crate::params::ListParams;

/// Handles agreement CRUD with pair uniqueness enforcement.
#[derive(Debug, Clone)]
pub struct AgreementService {
    pool: sqlx::PgPool,
    agreements: Arc<AgreementRepository>,
    workers: Arc<WorkerRepository>,
    companies: Arc<CompanyRepository>,
}

impl AgreementService {
    /// Creates a new agreement service.
    pub fn new(
        pool: sqlx::PgPool,
        agreements: Arc<AgreementRepository>,
        workers: Arc<WorkerRepository>,
        companies: Arc<CompanyRepository>,
    ) -> Self {
        Self {
            pool,
            agreements,
            workers,
            companies,
        }
    }

    /// Lists all agreements matching the search term, with related names.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<AgreementDetail>> {
        let (key, direction) =
            AgreementSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.agreements.list(&params.search, key, direction).await
    }

    /// Lists one page of agreements matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AgreementDetail>> {
        let (key, direction) =
            AgreementSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.agreements
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single agreement by id, with related names.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<AgreementDetail>> {
        self.agreements.find_detail(id).await
    }

    /// Creates a new agreement after verifying both references and the
    /// pair's uniqueness.
    ///
    /// Omitted `agreement_date` defaults to now.
    pub async fn create(&self, data: CreateAgreement) -> AppResult<AgreementDetail> {
        self.ensure_references(data.worker_id, data.company_id).await?;
        self.ensure_pair_free(data.worker_id, data.company_id, None)
            .await?;

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.agreements.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(agreement_id = %row.id, "Agreement created");

        self.agreements
            .find_detail(row.id)
            .await?
            .ok_or_else(|| AppError::internal("Created agreement could not be re-read"))
    }

    /// Replaces an agreement; returns `None` when the id does not exist.
    ///
    /// The uniqueness check skips the agreement's own row, so re-saving
    /// with the same pair is allowed.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateAgreement,
    ) -> AppResult<Option<AgreementDetail>> {
        let Some(existing) = self.agreements.find_by_id(id).await? else {
            return Ok(None);
        };

        if existing.worker_id != data.worker_id || existing.company_id != data.company_id {
            self.ensure_references(data.worker_id, data.company_id).await?;
        }
        self.ensure_pair_free(data.worker_id, data.company_id, Some(id))
            .await?;

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let updated = self.agreements.update(&mut uow, id, &data).await?;
        uow.commit().await?;

        if updated.is_none() {
            return Ok(None);
        }

        info!(agreement_id = %id, "Agreement updated");

        self.agreements.find_detail(id).await
    }

    /// Deletes an agreement; returns `false` when the id does not exist.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.agreements.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(agreement_id = %id, "Agreement deleted");
        }

        Ok(deleted)
    }

    async fn ensure_references(&self, worker_id: Uuid, company_id: Uuid) -> AppResult<()> {
        if !self.workers.exists(worker_id).await? {
            return Err(AppError::validation(format!(
                "Worker {worker_id} does not exist"
            )));
        }
        if !self.companies.exists(company_id).await? {
            return Err(AppError::validation(format!(
                "Company {company_id} does not exist"
            )));
        }
        Ok(())
    }

    async fn ensure_pair_free(
        &self,
        worker_id: Uuid,
        company_id: Uuid,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        if self.agreements.pair_exists(worker_id, company_id, exclude).await? {
            return Err(AppError::validation(
                "An agreement between this worker and company already exists",
            ));
        }
        Ok(())
    }
}
