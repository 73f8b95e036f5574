//! Vacancy handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;

use crate::dto::request::{CreateVacancyRequest, UpdateVacancyRequest};
use crate::dto::response::{ApiResponse, PaginatedResponse, VacancyDto};
use crate::error::ApiError;
use crate::extractors::{ListQueryParams, PagedQueryParams};
use crate::state::AppState;

/// GET /api/vacancies
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<PagedQueryParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<VacancyDto>>>, ApiError> {
    let (page, params) = query.into_parts()?;
    let result = state.vacancy_service.list_paged(&params, &page).await?;

    Ok(Json(ApiResponse::ok(PaginatedResponse::from_page(result))))
}

/// GET /api/vacancies/all
pub async fn list_all_vacancies(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<VacancyDto>>>, ApiError> {
    let params = query.into_list_params();
    let rows = state.vacancy_service.list(&params).await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter().map(VacancyDto::from).collect(),
    )))
}

/// GET /api/vacancies/{id}
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VacancyDto>>, ApiError> {
    let row = state
        .vacancy_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Vacancy not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// POST /api/vacancies
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(req): Json<CreateVacancyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VacancyDto>>), ApiError> {
    req.validate()?;
    let row = state.vacancy_service.create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row.into()))))
}

/// PUT /api/vacancies/{id}
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVacancyRequest>,
) -> Result<Json<ApiResponse<VacancyDto>>, ApiError> {
    req.validate()?;
    let row = state
        .vacancy_service
        .update(id, req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Vacancy not found"))?;

    Ok(Json(ApiResponse::ok(row.into())))
}

/// DELETE /api/vacancies/{id}
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.vacancy_service.delete(id).await? {
        return Err(AppError::not_found("Vacancy not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
