//! Worker handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;

use crate::dto::request::WorkerRequest;
use crate::dto::response::{ApiResponse, PaginatedResponse, WorkerDto};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/workers
pub async fn list_workers(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<WorkerDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state.worker_service.list_paged(&params, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/workers/all
pub async fn list_all_workers(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<WorkerDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.worker_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(WorkerDto::from).collect(),
    )))
}

/// GET /api/workers/{id}
pub async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WorkerDto>>, ApiError> {
    let row = state
        .worker_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Worker not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/workers
pub async fn create_worker(
    State(state): State<AppState>,
    Json(req): Json<WorkerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkerDto>>), ApiError> {
    req.validate()?;
    let row = state.worker_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/workers/{id}
pub async fn update_worker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<WorkerRequest>,
) -> Result<Json<ApiResponse<WorkerDto>>, ApiError> {
    req.validate()?;
    let row = state
        .worker_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Worker not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/workers/{id}
pub async fn delete_worker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.worker_service.delete(id).await? {
        return Err(AppError::not_found("Worker not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
