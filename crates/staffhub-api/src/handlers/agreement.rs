//! Agreement handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;

use crate::dto::request::{CreateAgreementRequest, UpdateAgreementRequest};
use crate::dto::response::{AgreementDto, ApiResponse, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/agreements
pub async fn list_agreements(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<AgreementDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state.agreement_service.list_paged(&params, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/agreements/all
pub async fn list_all_agreements(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<AgreementDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.agreement_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(AgreementDto::from).collect(),
    )))
}

/// GET /api/agreements/{id}
pub async fn get_agreement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AgreementDto>>, ApiError> {
    let row = state
        .agreement_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Agreement not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/agreements
pub async fn create_agreement(
    State(state): State<AppState>,
    Json(req): Json<CreateAgreementRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AgreementDto>>), ApiError> {
    req.validate()?;
    let row = state.agreement_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/agreements/{id}
pub async fn update_agreement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAgreementRequest>,
) -> Result<Json<ApiResponse<AgreementDto>>, ApiError> {
    req.validate()?;
    let row = state
        .agreement_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Agreement not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/agreements/{id}
pub async fn delete_agreement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.agreement_service.delete(id).await? {
        return Err(AppError::not_found("Agreement not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
