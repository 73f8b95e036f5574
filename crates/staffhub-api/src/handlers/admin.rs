//! Admin data-management handlers: seed, clear, and row counts.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, SeedStatsDto};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/seed
pub async fn seed_database(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<SeedStatsDto>>), ApiError> {
    let stats = state.admin_service.seed().await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stats.into()))))
}

/// DELETE /api/admin/seed
pub async fn clear_database(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.admin_service.clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/stats
pub async fn database_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SeedStatsDto>>, ApiError> {
    let stats = state.admin_service.stats().await?;

    Ok(Json(ApiResponse::ok(stats.into())))
}
