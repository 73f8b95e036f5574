//! Company handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;

use crate::dto::request::CompanyRequest;
use crate::dto::response::{ApiResponse, CompanyDto, PaginatedResponse};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<CompanyDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state.company_service.list_paged(&params, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/companies/all
pub async fn list_all_companies(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<CompanyDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.company_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(CompanyDto::from).collect(),
    )))
}

/// GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CompanyDto>>, ApiError> {
    let row = state
        .company_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<CompanyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CompanyDto>>), ApiError> {
    req.validate()?;
    let row = state.company_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompanyRequest>,
) -> Result<Json<ApiResponse<CompanyDto>>, ApiError> {
    req.validate()?;
    let row = state
        .company_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.company_service.delete(id).await? {
        return Err(AppError::not_found("Company not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
