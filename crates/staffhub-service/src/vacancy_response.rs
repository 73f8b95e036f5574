//! Vacancy response operations.
//!
//! Responses are created in the pending state and move through a one-way
//! lifecycle: pending may become accepted or rejected, and both of those
//! are terminal.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::{
    VacancyRepository, VacancyResponseRepository, WorkerRepository,
};
use staffhub_database::UnitOfWork;
use staffhub_entity::vacancy_response::{
    CreateVacancyResponse, UpdateVacancyResponse, VacancyResponseDetail, VacancyResponseSortKey,
};

use crate::params::ListParams;

/// Handles vacancy response CRUD and status transitions.
#[derive(Debug, Clone)]
pub struct VacancyResponseService {
    pool: sqlx::PgPool,
    responses: Arc<VacancyResponseRepository>,
    workers: Arc<WorkerRepository>,
    vacancies: Arc<VacancyRepository>,
}

impl VacancyResponseService {
    /// Creates a new vacancy response service.
    pub fn new(
        pool: sqlx::PgPool,
        responses: Arc<VacancyResponseRepository>,
        workers: Arc<WorkerRepository>,
        vacancies: Arc<VacancyRepository>,
    ) -> Self {
        Self {
            pool,
            responses,
            workers,
            vacancies,
        }
    }

    /// Lists all responses matching the search term, with related names.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<VacancyResponseDetail>> {
        let (key, direction) =
            VacancyResponseSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.responses.list(&params.search, key, direction).await
    }

    /// Lists one page of responses matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VacancyResponseDetail>> {
        let (key, direction) =
            VacancyResponseSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.responses
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single response by id, with related names.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<VacancyResponseDetail>> {
        self.responses.find_detail(id).await
    }

    /// Creates a new pending response after verifying both references.
    ///
    /// `sent_at` is assigned by the storage layer.
    pub async fn create(&self, data: CreateVacancyResponse) -> AppResult<VacancyResponseDetail> {
        if !self.workers.exists(data.worker_id).await? {
            return Err(AppError::validation(format!(
                "Worker {} does not exist",
                data.worker_id
            )));
        }
        if !self.vacancies.exists(data.vacancy_id).await? {
            return Err(AppError::validation(format!(
                "Vacancy {} does not exist",
                data.vacancy_id
            )));
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.responses.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(response_id = %row.id, "Vacancy response created");

        self.responses
            .find_detail(row.id)
            .await?
            .ok_or_else(|| AppError::internal("Created response could not be re-read"))
    }

    /// Applies a status transition; returns `None` when the id does not exist.
    ///
    /// Re-submitting the current status is a no-op; any other change from
    /// a terminal status is rejected.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateVacancyResponse,
    ) -> AppResult<Option<VacancyResponseDetail>> {
        let Some(existing) = self.responses.find_by_id(id).await? else {
            return Ok(None);
        };

        if existing.status == data.status {
            return self.responses.find_detail(id).await;
        }

        if !existing.status.can_transition_to(data.status) {
            return Err(AppError::validation(format!(
                "Cannot change response status from {} to {}",
                existing.status, data.status
            )));
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        self.responses.update_status(&mut uow, id, data.status).await?;
        uow.commit().await?;

        info!(response_id = %id, status = %data.status, "Vacancy response status changed");

        self.responses.find_detail(id).await
    }

    /// Deletes a response; returns `false` when the id does not exist.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.responses.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(response_id = %id, "Vacancy response deleted");
        }

        Ok(deleted)
    }
}
