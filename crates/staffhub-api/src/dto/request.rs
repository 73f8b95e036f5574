//! Request DTOs with validation.
//!
//! Bodies use camelCase field names on the wire; each DTO converts into
//! the corresponding entity-layer create/update struct.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use staffhub_entity::activity_type::{CreateActivityType, UpdateActivityType};
use staffhub_entity::agreement::{CreateAgreement, UpdateAgreement};
use staffhub_entity::company::{CreateCompany, UpdateCompany};
use staffhub_entity::vacancy::{CreateVacancy, UpdateVacancy};
use staffhub_entity::vacancy_response::CreateVacancyResponse;
use staffhub_entity::worker::{CreateWorker, UpdateWorker};

/// Create or replace an activity type.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeRequest {
    /// Activity type name.
    #[validate(length(min = 1, max = 255, message = "Activity name is required"))]
    pub activity_name: String,
}

impl From<ActivityTypeRequest> for CreateActivityType {
    fn from(req: ActivityTypeRequest) -> Self {
        Self {
            activity_name: req.activity_name,
        }
    }
}

impl From<ActivityTypeRequest> for UpdateActivityType {
    fn from(req: ActivityTypeRequest) -> Self {
        Self {
            activity_name: req.activity_name,
        }
    }
}

/// Create or replace a worker.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    /// Last name.
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,
    /// First name.
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,
    /// Middle name, if any.
    pub middle_name: Option<String>,
    /// Professional qualification.
    #[validate(length(min = 1, max = 255, message = "Qualification is required"))]
    pub qualification: String,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Expected salary, free-form.
    #[validate(length(min = 1, max = 255, message = "Expected salary is required"))]
    pub expected_salary: String,
    /// Additional notes.
    pub other_info: Option<String>,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}

impl From<WorkerRequest> for CreateWorker {
    fn from(req: WorkerRequest) -> Self {
        Self {
            last_name: req.last_name,
            first_name: req.first_name,
            middle_name: req.middle_name,
            qualification: req.qualification,
            email: req.email,
            expected_salary: req.expected_salary,
            other_info: req.other_info,
            activity_type_id: req.activity_type_id,
        }
    }
}

impl From<WorkerRequest> for UpdateWorker {
    fn from(req: WorkerRequest) -> Self {
        Self {
            last_name: req.last_name,
            first_name: req.first_name,
            middle_name: req.middle_name,
            qualification: req.qualification,
            email: req.email,
            expected_salary: req.expected_salary,
            other_info: req.other_info,
            activity_type_id: req.activity_type_id,
        }
    }
}

/// Create or replace a company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    /// Company name.
    #[validate(length(min = 1, max = 255, message = "Company name is required"))]
    pub company_name: String,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Postal address.
    #[validate(length(min = 1, max = 500, message = "Address is required"))]
    pub address: String,
    /// Contact phone.
    #[validate(length(min = 1, max = 50, message = "Phone is required"))]
    pub phone: String,
    /// Referenced activity type.
    pub activity_type_id: Uuid,
}

impl From<CompanyRequest> for CreateCompany {
    fn from(req: CompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
            email: req.email,
            address: req.address,
            phone: req.phone,
            activity_type_id: req.activity_type_id,
        }
    }
}

impl From<CompanyRequest> for UpdateCompany {
    fn from(req: CompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
            email: req.email,
            address: req.address,
            phone: req.phone,
            activity_type_id: req.activity_type_id,
        }
    }
}

/// Create a vacancy.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacancyRequest {
    /// Position title.
    #[validate(length(min = 1, max = 255, message = "Position is required"))]
    pub position: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// Whether the vacancy accepts responses; defaults to open.
    pub is_open: Option<bool>,
    /// Referenced company.
    pub company_id: Uuid,
}

impl From<CreateVacancyRequest> for CreateVacancy {
    fn from(req: CreateVacancyRequest) -> Self {
        Self {
            position: req.position,
            description: req.description,
            salary: req.salary,
            is_open: req.is_open,
            company_id: req.company_id,
        }
    }
}

/// Replace a vacancy.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVacancyRequest {
    /// Position title.
    #[validate(length(min = 1, max = 255, message = "Position is required"))]
    pub position: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Offered salary.
    pub salary: Decimal,
    /// Whether the vacancy accepts responses.
    pub is_open: bool,
    /// Referenced company.
    pub company_id: Uuid,
}

impl From<UpdateVacancyRequest> for UpdateVacancy {
    fn from(req: UpdateVacancyRequest) -> Self {
        Self {
            position: req.position,
            description: req.description,
            salary: req.salary,
            is_open: req.is_open,
            company_id: req.company_id,
        }
    }
}

/// Create a vacancy response.
///
/// New responses always start pending; `sent_at` is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponseRequest {
    /// Responding worker.
    pub worker_id: Uuid,
    /// Target vacancy.
    pub vacancy_id: Uuid,
}

impl From<CreateResponseRequest> for CreateVacancyResponse {
    fn from(req: CreateResponseRequest) -> Self {
        Self {
            worker_id: req.worker_id,
            vacancy_id: req.vacancy_id,
        }
    }
}

/// Change a vacancy response's status.
///
/// The status arrives as a string so an unknown value maps to a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponseRequest {
    /// Target status: `pending`, `accepted`, or `rejected`.
    pub status: String,
}

/// Create an agreement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgreementRequest {
    /// Position the agreement covers.
    #[validate(length(min = 1, max = 255, message = "Position is required"))]
    pub position: String,
    /// Placement commission.
    pub commission: Decimal,
    /// Agreement date; defaults to now when omitted.
    pub agreement_date: Option<DateTime<Utc>>,
    /// Referenced worker.
    pub worker_id: Uuid,
    /// Referenced company.
    pub company_id: Uuid,
}

impl From<CreateAgreementRequest> for CreateAgreement {
    fn from(req: CreateAgreementRequest) -> Self {
        Self {
            position: req.position,
            commission: req.commission,
            agreement_date: req.agreement_date,
            worker_id: req.worker_id,
            company_id: req.company_id,
        }
    }
}

/// Replace an agreement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgreementRequest {
    /// Position the agreement covers.
    #[validate(length(min = 1, max = 255, message = "Position is required"))]
    pub position: String,
    /// Placement commission.
    pub commission: Decimal,
    /// Agreement date.
    pub agreement_date: DateTime<Utc>,
    /// Referenced worker.
    pub worker_id: Uuid,
    /// Referenced company.
    pub company_id: Uuid,
}

impl From<UpdateAgreementRequest> for UpdateAgreement {
    fn from(req: UpdateAgreementRequest) -> Self {
        Self {
            position: req.position,
            commission: req.commission,
            agreement_date: req.agreement_date,
            worker_id: req.worker_id,
            company_id: req.company_id,
        }
    }
}
