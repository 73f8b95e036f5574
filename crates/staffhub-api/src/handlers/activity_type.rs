//! Activity type handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;

use crate::dto::request::ActivityTypeRequest;
use crate::dto::response::{ActivityTypeDto, ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/activity-types
pub async fn list_activity_types(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<ActivityTypeDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state
        .activity_type_service
        .list_paged(&params, &page)
        .await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/activity-types/all
pub async fn list_all_activity_types(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<ActivityTypeDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.activity_type_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(ActivityTypeDto::from).collect(),
    )))
}

/// GET /api/activity-types/{id}
pub async fn get_activity_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ActivityTypeDto>>, ApiError> {
    let row = state
        .activity_type_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Activity type not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/activity-types
pub async fn create_activity_type(
    State(state): State<AppState>,
    Json(req): Json<ActivityTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityTypeDto>>), ApiError> {
    req.validate()?;
    let row = state.activity_type_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/activity-types/{id}
pub async fn update_activity_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActivityTypeRequest>,
) -> Result<Json<ApiResponse<ActivityTypeDto>>, ApiError> {
    req.validate()?;
    let row = state
        .activity_type_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Activity type not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/activity-types/{id}
pub async fn delete_activity_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.activity_type_service.delete(id).await? {
        return Err(AppError::not_found("Activity type not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
