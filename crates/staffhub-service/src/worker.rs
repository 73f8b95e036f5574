//! Worker catalogue operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::{ActivityTypeRepository, WorkerRepository};
use staffhub_database::UnitOfWork;
use staffhub_entity::worker::{CreateWorker, UpdateWorker, WorkerDetail, WorkerSortKey};

use crate::params::ListParams;

/// Handles worker CRUD with activity type referential checks.
#[derive(Debug, Clone)]
pub struct WorkerService {
    pool: sqlx::PgPool,
    workers: Arc<WorkerRepository>,
    activity_types: Arc<ActivityTypeRepository>,
}

impl WorkerService {
    /// Creates a new worker service.
    pub fn new(
        pool: sqlx::PgPool,
        workers: Arc<WorkerRepository>,
        activity_types: Arc<ActivityTypeRepository>,
    ) -> Self {
        Self {
            pool,
            workers,
            activity_types,
        }
    }

    /// Lists all workers matching the search term, with activity type names.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<WorkerDetail>> {
        let (key, direction) = WorkerSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.workers.list(&params.search, key, direction).await
    }

    /// Lists one page of workers matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<WorkerDetail>> {
        let (key, direction) = WorkerSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.workers
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single worker by id, with the activity type name.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<WorkerDetail>> {
        self.workers.find_detail(id).await
    }

    /// Creates a new worker after verifying the referenced activity type.
    pub async fn create(&self, data: CreateWorker) -> AppResult<WorkerDetail> {
        self.ensure_activity_type(data.activity_type_id).await?;

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.workers.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(worker_id = %row.id, "Worker created");

        self.workers
            .find_detail(row.id)
            .await?
            .ok_or_else(|| AppError::internal("Created worker could not be re-read"))
    }

    /// Replaces a worker; returns `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, data: UpdateWorker) -> AppResult<Option<WorkerDetail>> {
        let Some(existing) = self.workers.find_by_id(id).await? else {
            return Ok(None);
        };

        if existing.activity_type_id != data.activity_type_id {
            self.ensure_activity_type(data.activity_type_id).await?;
        }

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let updated = self.workers.update(&mut uow, id, &data).await?;
        uow.commit().await?;

        if updated.is_none() {
            return Ok(None);
        }

        info!(worker_id = %id, "Worker updated");

        self.workers.find_detail(id).await
    }

    /// Deletes a worker; returns `false` when the id does not exist.
    ///
    /// The worker's responses and agreements are removed by the
    /// storage-level cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.workers.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(worker_id = %id, "Worker deleted");
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
