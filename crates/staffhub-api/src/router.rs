//! Route definitions for the StaffHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use staffhub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(activity_type_routes())
        .merge(worker_routes())
        .merge(company_routes())
        .merge(vacancy_routes())
        .merge(response_routes())
        .merge(agreement_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Activity type catalogue endpoints
fn activity_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/activity-types",
            get(handlers::activity_type::list_activity_types),
        )
        .route(
            "/activity-types/all",
            get(handlers::activity_type::list_all_activity_types),
        )
        .route(
            "/activity-types/{id}",
            get(handlers::activity_type::get_activity_type),
        )
        .route(
            "/activity-types",
            post(handlers::activity_type::create_activity_type),
        )
        .route(
            "/activity-types/{id}",
            put(handlers::activity_type::update_activity_type),
        )
        .route(
            "/activity-types/{id}",
            delete(handlers::activity_type::delete_activity_type),
        )
}

/// Worker catalogue endpoints
fn worker_routes() -> Router<AppState> {
    Router::new()
        .route("/workers", get(handlers::worker::list_workers))
        .route("/workers/all", get(handlers::worker::list_all_workers))
        .route("/workers/{id}", get(handlers::worker::get_worker))
        .route("/workers", post(handlers::worker::create_worker))
        .route("/workers/{id}", put(handlers::worker::update_worker))
        .route("/workers/{id}", delete(handlers::worker::delete_worker))
}

/// Company catalogue endpoints
fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(handlers::company::list_companies))
        .route("/companies/all", get(handlers::company::list_all_companies))
        .route("/companies/{id}", get(handlers::company::get_company))
        .route("/companies", post(handlers::company::create_company))
        .route("/companies/{id}", put(handlers::company::update_company))
        .route("/companies/{id}", delete(handlers::company::delete_company))
}

/// Vacancy catalogue endpoints
fn vacancy_routes() -> Router<AppState> {
    Router::new()
        .route("/vacancies", get(handlers::vacancy::list_vacancies))
        .route("/vacancies/all", get(handlers::vacancy::list_all_vacancies))
        .route("/vacancies/{id}", get(handlers::vacancy::get_vacancy))
        .route("/vacancies", post(handlers::vacancy::create_vacancy))
        .route("/vacancies/{id}", put(handlers::vacancy::update_vacancy))
        .route("/vacancies/{id}", delete(handlers::vacancy::delete_vacancy))
}

/// Vacancy response endpoints
fn response_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/responses",
            get(handlers::vacancy_response::list_responses),
        )
        .route(
            "/responses/all",
            get(handlers::vacancy_response::list_all_responses),
        )
        .route(
            "/responses/{id}",
            get(handlers::vacancy_response::get_response),
        )
        .route(
            "/responses",
            post(handlers::vacancy_response::create_response),
        )
        .route(
            "/responses/{id}",
            put(handlers::vacancy_response::update_response),
        )
        .route(
            "/responses/{id}",
            delete(handlers::vacancy_response::delete_response),
        )
}

/// Agreement endpoints
fn agreement_routes() -> Router<AppState> {
    Router::new()
        .route("/agreements", get(handlers::agreement::list_agreements))
        .route(
            "/agreements/all",
            get(handlers::agreement::list_all_agreements),
        )
        .route("/agreements/{id}", get(handlers::agreement::get_agreement))
        .route("/agreements", post(handlers::agreement::create_agreement))
        .route(
            "/agreements/{id}",
            put(handlers::agreement::update_agreement),
        )
        .route(
            "/agreements/{id}",
            delete(handlers::agreement::delete_agreement),
        )
}

/// Seed, clear, and stats endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/seed", post(handlers::admin::seed_database))
        .route("/admin/seed", delete(handlers::admin::clear_database))
        .route("/admin/stats", get(handlers::admin::database_stats))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use tower_http::cors::{AllowOrigin, Any};

    let mut cors = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    cors.allow_methods(methods)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
