//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use staffhub_core::config::AppConfig;
use staffhub_database::repositories::{
    ActivityTypeRepository, AgreementRepository, CompanyRepository, VacancyRepository,
    VacancyResponseRepository, WorkerRepository,
};
use staffhub_service::{
    ActivityTypeService, AdminService, AgreementService, CompanyService, VacancyResponseService,
    VacancyService, WorkerService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Activity type operations.
    pub activity_type_service: Arc<ActivityTypeService>,
    /// Worker operations.
    pub worker_service: Arc<WorkerService>,
    /// Company operations.
    pub company_service: Arc<CompanyService>,
    /// Vacancy operations.
    pub vacancy_service: Arc<VacancyService>,
    /// Vacancy response operations.
    pub response_service: Arc<VacancyResponseService>,
    /// Agreement operations.
    pub agreement_service: Arc<AgreementService>,
    /// Seed, clear, and stats operations.
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Wires repositories and services onto the shared pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let activity_type_repo = Arc::new(ActivityTypeRepository::new(db_pool.clone()));
        let worker_repo = Arc::new(WorkerRepository::new(db_pool.clone()));
        let company_repo = Arc::new(CompanyRepository::new(db_pool.clone()));
        let vacancy_repo = Arc::new(VacancyRepository::new(db_pool.clone()));
        let response_repo = Arc::new(VacancyResponseRepository::new(db_pool.clone()));
        let agreement_repo = Arc::new(AgreementRepository::new(db_pool.clone()));

        let activity_type_service = Arc::new(ActivityTypeService::new(
            db_pool.clone(),
            Arc::clone(&activity_type_repo),
        ));
        let worker_service = Arc::new(WorkerService::new(
            db_pool.clone(),
            Arc::clone(&worker_repo),
            Arc::clone(&activity_type_repo),
        ));
        let company_service = Arc::new(CompanyService::new(
            db_pool.clone(),
            Arc::clone(&company_repo),
            Arc::clone(&activity_type_repo),
        ));
        let vacancy_service = Arc::new(VacancyService::new(
            db_pool.clone(),
            Arc::clone(&vacancy_repo),
            Arc::clone(&company_repo),
        ));
        let response_service = Arc::new(VacancyResponseService::new(
            db_pool.clone(),
            Arc::clone(&response_repo),
            Arc::clone(&worker_repo),
            Arc::clone(&vacancy_repo),
        ));
        let agreement_service = Arc::new(AgreementService::new(
            db_pool.clone(),
            Arc::clone(&agreement_repo),
            Arc::clone(&worker_repo),
            Arc::clone(&company_repo),
        ));
        let admin_service = Arc::new(AdminService::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            activity_type_service,
            worker_service,
            company_service,
            vacancy_service,
            response_service,
            agreement_service,
            admin_service,
        }
    }
}
