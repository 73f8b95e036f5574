//! Activity type catalogue operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_database::repositories::ActivityTypeRepository;
use staffhub_database::UnitOfWork;
use staffhub_entity::activity_type::{
    ActivityType, ActivityTypeSortKey, CreateActivityType, UpdateActivityType,
};

use crate::params::ListParams;

/// Handles activity type CRUD.
#[derive(Debug, Clone)]
pub struct ActivityTypeService {
    pool: sqlx::PgPool,
    activity_types: Arc<ActivityTypeRepository>,
}

impl ActivityTypeService {
    /// Creates a new activity type service.
    pub fn new(pool: sqlx::PgPool, activity_types: Arc<ActivityTypeRepository>) -> Self {
        Self {
            pool,
            activity_types,
        }
    }

    /// Lists all activity types matching the search term.
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<ActivityType>> {
        let (key, direction) =
            ActivityTypeSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.activity_types.list(&params.search, key, direction).await
    }

    /// Lists one page of activity types matching the search term.
    pub async fn list_paged(
        &self,
        params: &ListParams,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ActivityType>> {
        let (key, direction) =
            ActivityTypeSortKey::resolve(params.sort_by.as_deref(), params.direction);
        self.activity_types
            .list_paged(&params.search, key, direction, page)
            .await
    }

    /// Gets a single activity type by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Option<ActivityType>> {
        self.activity_types.find_by_id(id).await
    }

    /// Creates a new activity type.
    pub async fn create(&self, data: CreateActivityType) -> AppResult<ActivityType> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let row = self.activity_types.insert(&mut uow, &data).await?;
        uow.commit().await?;

        info!(activity_type_id = %row.id, "Activity type created");

        Ok(row)
    }

    /// Replaces an activity type; returns `None` when the id does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateActivityType,
    ) -> AppResult<Option<ActivityType>> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let updated = self.activity_types.update(&mut uow, id, &data).await?;
        uow.commit().await?;

        if updated.is_some() {
            info!(activity_type_id = %id, "Activity type updated");
        }

        Ok(updated)
    }

    /// Deletes an activity type; returns `false` when the id does not exist.
    ///
    /// Workers and companies referencing the type are removed by the
    /// storage-level cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        let deleted = self.activity_types.delete(&mut uow, id).await?;
        uow.commit().await?;

        if deleted {
            info!(activity_type_id = %id, "Activity type deleted");
        }

        Ok(deleted)
    }
}
