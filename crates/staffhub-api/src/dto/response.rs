//! Response DTOs.
//!
//! Wire types use camelCase and carry the joined display names the
//! detail projections provide, so clients never need a second lookup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staffhub_core::types::pagination::PageResponse;
use staffhub_database::seed::SeedStats;
use staffhub_entity::activity_type::ActivityType;
use staffhub_entity::agreement::AgreementDetail;
use staffhub_entity::company::CompanyDetail;
use staffhub_entity::vacancy::VacancyDetail;
use staffhub_entity::vacancy_response::VacancyResponseDetail;
use staffhub_entity::worker::WorkerDetail;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T: Serialize> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Current page (1-based).
    pub page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total items across all pages.
    pub total_items: u64,
    /// Total pages.
    pub total_pages: u64,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Converts a domain page, mapping each item to its wire shape.
    pub fn from_page<D>(page: PageResponse<D>) -> Self
    where
        D: Serialize + Into<T>,
    {
        let mapped = page.map(Into::into);
        Self {
            items: mapped.items,
            page: mapped.page,
            page_size: mapped.page_size,
            total_items: mapped.total_items,
            total_pages: mapped.total_pages,
            has_next: mapped.has_next,
            has_previous: mapped.has_previous,
        }
    }
}

/// Activity type wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeDto {
    /// Identifier.
    pub id: Uuid,
    /// Activity type name.
    pub activity_name: String,
}

impl From<ActivityType> for ActivityTypeDto {
    fn from(row: ActivityType) -> Self {
        Self {
            id: row.id,
            activity_name: row.activity_name,
        }
    }
}

/// Worker wire shape, with the activity type name joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDto {
    /// Identifier.
    pub id: Uuid,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Middle name, if any.
    pub middle_name: Option<String>,
    /// Professional qualification.
    pub qualification: String,
    /// Contact email.
    pub email: String,
    /// Expected salary, free-form.
    pub expected_salary: String,
    /// Additional notes.
    pub other_info: Option<String>,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
    /// Display name of the activity type.
    pub activity_type_name: String,
}

impl From<WorkerDetail> for WorkerDto {
    fn from(row: WorkerDetail) -> Self {
        Self {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            qualification: row.qualification,
            email: row.email,
            expected_salary: row.expected_salary,
            other_info: row.other_info,
            activity_type_id: row.activity_type_id,
            activity_type_name: row.activity_type_name,
        }
    }
}

/// Company wire shape, with the activity type name joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    /// Identifier.
    pub id: Uuid,
    /// Company name.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
    /// Display name of the activity type.
    pub activity_type_name: String,
}

impl From<CompanyDetail> for CompanyDto {
    fn from(row: CompanyDetail) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name,
            email: row.email,
            address: row.address,
            phone: row.phone,
            activity_type_id: row.activity_type_id,
            activity_type_name: row.activity_type_name,
        }
    }
}

/// Vacancy wire shape, with the company name joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyDto {
    /// Identifier.
    pub id: Uuid,
    /// Position title.
    pub position: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the vacancy accepts responses.
    pub is_open: bool,
    /// Referenced company.
    pub company_id: Uuid,
    /// Display name of the company.
    pub company_name: String,
}

impl From<VacancyDetail> for VacancyDto {
    fn from(row: VacancyDetail) -> Self {
        Self {
            id: row.id,
            position: row.position,
            description: row.description,
            salary: row.salary,
            created_at: row.created_at,
            is_open: row.is_open,
            company_id: row.company_id,
            company_name: row.company_name,
        }
    }
}

/// Vacancy response wire shape, with worker and vacancy names joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto {
    /// Identifier.
    pub id: Uuid,
    /// Submission timestamp.
    pub sent_at: DateTime<Utc>,
    /// Current status.
    pub status: String,
    /// Responding worker.
    pub worker_id: Uuid,
    /// Target vacancy.
    pub vacancy_id: Uuid,
    /// Display name of the worker.
    pub worker_full_name: String,
    /// Position of the target vacancy.
    pub position: String,
}

impl From<VacancyResponseDetail> for ResponseDto {
    fn from(row: VacancyResponseDetail) -> Self {
        Self {
            id: row.id,
            sent_at: row.sent_at,
            status: row.status.to_string(),
            worker_id: row.worker_id,
            vacancy_id: row.vacancy_id,
            worker_full_name: row.worker_full_name,
            position: row.position,
        }
    }
}

/// Agreement wire shape, with worker and company names joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementDto {
    /// Identifier.
    pub id: Uuid,
    /// Position the agreement covers.
    pub position: String,
    /// Placement commission.
    pub commission: Decimal,
    /// Agreement date.
    pub agreement_date: DateTime<Utc>,
    /// Referenced worker.
    pub worker_id: Uuid,
    /// Referenced company.
    pub company_id: Uuid,
    /// Display name of the worker.
    pub worker_full_name: String,
    /// Display name of the company.
    pub company_name: String,
}

impl From<AgreementDetail> for AgreementDto {
    fn from(row: AgreementDetail) -> Self {
        Self {
            id: row.id,
            position: row.position,
            commission: row.commission,
            agreement_date: row.agreement_date,
            worker_id: row.worker_id,
            company_id: row.company_id,
            worker_full_name: row.worker_full_name,
            company_name: row.company_name,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database reachability.
    pub database: String,
}

/// Row counts per table, returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStatsDto {
    /// Activity type rows.
    pub activity_types: u64,
    /// Company rows.
    pub companies: u64,
    /// Worker rows.
    pub workers: u64,
    /// Vacancy rows.
    pub vacancies: u64,
    /// Vacancy response rows.
    pub responses: u64,
    /// Agreement rows.
    pub agreements: u64,
}

impl From<SeedStats> for SeedStatsDto {
    fn from(stats: SeedStats) -> Self {
        Self {
            activity_types: stats.activity_types,
            companies: stats.companies,
            workers: stats.workers,
            vacancies: stats.vacancies,
            responses: stats.responses,
            agreements: stats.agreements,
        }
    }
}
