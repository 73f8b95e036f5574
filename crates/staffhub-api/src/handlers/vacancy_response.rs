//! Vacancy response handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_entity::vacancy_response::{ResponseStatus, UpdateVacancyResponse};

use crate::dto::request::{CreateResponseRequest, UpdateResponseRequest};
use crate::dto::response::{ApiResponse, PaginatedResponse, ResponseDto};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/responses
pub async fn list_responses(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<ResponseDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state.response_service.list_paged(&params, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/responses/all
pub async fn list_all_responses(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<ResponseDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.response_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(ResponseDto::from).collect(),
    )))
}

/// GET /api/responses/{id}
pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResponseDto>>, ApiError> {
    let row = state
        .response_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Response not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/responses
pub async fn create_response(
    State(state): State<AppState>,
    Json(req): Json<CreateResponseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ResponseDto>>), ApiError> {
    let row = state.response_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/responses/{id}
pub async fn update_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResponseRequest>,
) -> Result<Json<ApiResponse<ResponseDto>>, ApiError> {
    let status: ResponseStatus = req.status.parse()?;
    let row = state
        .response_service
        .update(id, UpdateVacancyResponse { status })
        .await?
        .ok_or_else(|| AppError::not_found("Response not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/responses/{id}
pub async fn delete_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.response_service.delete(id).await? {
        return Err(AppError::not_found("Response not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
