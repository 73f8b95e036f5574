//! Generated seed data for development and demos.
//!
//! Populates an empty database with realistic fake records: activity
//! types first, then companies and workers referencing them, vacancies,
//! responses, and agreements with distinct (worker, company) pairs. All
//! inserts run in one transaction.

use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::company::en::{CompanyName, Industry};
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::RngExt;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_entity::agreement::CreateAgreement;
use staffhub_entity::company::CreateCompany;
use staffhub_entity::vacancy::CreateVacancy;
use staffhub_entity::vacancy_response::{CreateVacancyResponse, ResponseStatus};
use staffhub_entity::worker::CreateWorker;

use crate::repositories::{
    ActivityTypeRepository, AgreementRepository, CompanyRepository, VacancyRepository,
    VacancyResponseRepository, WorkerRepository,
};
use crate::uow::UnitOfWork;

const ACTIVITY_TYPE_COUNT: usize = 10;
const COMPANY_COUNT: usize = 15;
const WORKER_COUNT: usize = 20;
const VACANCY_COUNT: usize = 25;
const RESPONSE_COUNT: usize = 40;
const AGREEMENT_COUNT: usize = 30;

/// Row counts per table.
#[derive(Debug, Clone, Serialize)]
pub struct SeedStats {
    /// Activity type rows.
    pub activity_types: u64,
    /// Company rows.
    pub companies: u64,
    /// Worker rows.
    pub workers: u64,
    /// Vacancy rows.
    pub vacancies: u64,
    /// Response rows.
    pub responses: u64,
    /// Agreement rows.
    pub agreements: u64,
}

impl SeedStats {
    /// Whether every table is empty.
    pub fn is_empty(&self) -> bool {
        self.activity_types == 0
            && self.companies == 0
            && self.workers == 0
            && self.vacancies == 0
            && self.responses == 0
            && self.agreements == 0
    }
}

/// Collect row counts for every table.
pub async fn stats(pool: &PgPool) -> AppResult<SeedStats> {
    Ok(SeedStats {
        activity_types: ActivityTypeRepository::new(pool.clone()).count().await?,
        companies: CompanyRepository::new(pool.clone()).count().await?,
        workers: WorkerRepository::new(pool.clone()).count().await?,
        vacancies: VacancyRepository::new(pool.clone()).count().await?,
        responses: VacancyResponseRepository::new(pool.clone()).count().await?,
        agreements: AgreementRepository::new(pool.clone()).count().await?,
    })
}

/// Populate all tables with generated data.
///
/// Refuses when any table already holds rows, so a re-run cannot
/// duplicate the dataset.
pub async fn seed_all(pool: &PgPool) -> AppResult<SeedStats> {
    if !stats(pool).await?.is_empty() {
        return Err(AppError::validation(
            "Database already contains data; clear it before seeding",
        ));
    }

    info!("Seeding database with generated data");

    let activity_types = ActivityTypeRepository::new(pool.clone());
    let companies = CompanyRepository::new(pool.clone());
    let workers = WorkerRepository::new(pool.clone());
    let vacancies = VacancyRepository::new(pool.clone());
    let responses = VacancyResponseRepository::new(pool.clone());
    let agreements = AgreementRepository::new(pool.clone());

    let mut uow = UnitOfWork::begin(pool).await?;

    // The thread-local rng is confined to sync blocks between awaits so
    // the whole future stays Send.
    let mut activity_type_ids = Vec::with_capacity(ACTIVITY_TYPE_COUNT);
    for name in generate_activity_names(ACTIVITY_TYPE_COUNT) {
        let row = activity_types
            .insert(
                &mut uow,
                &staffhub_entity::activity_type::CreateActivityType {
                    activity_name: name,
                },
            )
            .await?;
        activity_type_ids.push(row.id);
    }

    let company_data = {
        let mut rng = rand::rng();
        generate_companies(COMPANY_COUNT, &activity_type_ids, &mut rng)
    };
    let mut company_ids = Vec::with_capacity(COMPANY_COUNT);
    for data in &company_data {
        let row = companies.insert(&mut uow, data).await?;
        company_ids.push(row.id);
    }

    let worker_data = {
        let mut rng = rand::rng();
        generate_workers(WORKER_COUNT, &activity_type_ids, &mut rng)
    };
    let mut worker_ids = Vec::with_capacity(WORKER_COUNT);
    for data in &worker_data {
        let row = workers.insert(&mut uow, data).await?;
        worker_ids.push(row.id);
    }

    let vacancy_data = {
        let mut rng = rand::rng();
        generate_vacancies(VACANCY_COUNT, &company_ids, &mut rng)
    };
    let mut vacancy_ids = Vec::with_capacity(VACANCY_COUNT);
    for data in &vacancy_data {
        let row = vacancies.insert(&mut uow, data).await?;
        vacancy_ids.push(row.id);
    }

    // Responses start pending through the repository; vary the status
    // afterwards so listings show all three states.
    let (response_data, statuses) = {
        let mut rng = rand::rng();
        let data = generate_responses(RESPONSE_COUNT, &worker_ids, &vacancy_ids, &mut rng);
        let statuses: Vec<ResponseStatus> = (0..data.len())
            .map(|_| {
                [
                    ResponseStatus::Pending,
                    ResponseStatus::Accepted,
                    ResponseStatus::Rejected,
                ]
                .choose(&mut rng)
                .copied()
                .unwrap_or(ResponseStatus::Pending)
            })
            .collect();
        (data, statuses)
    };
    for (data, status) in response_data.iter().zip(statuses) {
        let row = responses.insert(&mut uow, data).await?;
        if status != ResponseStatus::Pending {
            responses.update_status(&mut uow, row.id, status).await?;
        }
    }

    let agreement_data = {
        let mut rng = rand::rng();
        generate_agreements(AGREEMENT_COUNT, &worker_ids, &company_ids, &mut rng)
    };
    for data in &agreement_data {
        agreements.insert(&mut uow, data).await?;
    }

    uow.commit().await?;

    let stats = stats(pool).await?;
    info!(
        activity_types = stats.activity_types,
        companies = stats.companies,
        workers = stats.workers,
        vacancies = stats.vacancies,
        responses = stats.responses,
        agreements = stats.agreements,
        "Seed data committed"
    );
    Ok(stats)
}

/// Delete all rows, children before parents, in one transaction.
pub async fn clear_all(pool: &PgPool) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool).await?;
    for table in [
        "agreements",
        "responses",
        "vacancies",
        "workers",
        "companies",
        "activity_types",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(uow.conn())
            .await
            .map_err(|e| {
                AppError::with_source(
                    staffhub_core::error::ErrorKind::Database,
                    format!("Failed to clear table {table}"),
                    e,
                )
            })?;
    }
    uow.commit().await?;
    info!("All tables cleared");
    Ok(())
}

fn generate_activity_names(count: usize) -> Vec<String> {
    // Industry names collide now and then; suffix duplicates to keep the
    // listing readable.
    let mut seen: Vec<String> = Vec::with_capacity(count);
    while seen.len() < count {
        let mut name: String = Industry().fake();
        if seen.contains(&name) {
            name = format!("{name} ({})", seen.len() + 1);
        }
        seen.push(name);
    }
    seen
}

fn generate_companies(
    count: usize,
    activity_type_ids: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<CreateCompany> {
    (0..count)
        .map(|_| CreateCompany {
            company_name: CompanyName().fake(),
            email: SafeEmail().fake(),
            address: format!(
                "{} {}",
                rng.random_range(1..200),
                StreetName().fake::<String>()
            ),
            phone: PhoneNumber().fake(),
            activity_type_id: pick(activity_type_ids, rng),
        })
        .collect()
}

fn generate_workers(
    count: usize,
    activity_type_ids: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<CreateWorker> {
    (0..count)
        .map(|_| CreateWorker {
            last_name: LastName().fake(),
            first_name: FirstName().fake(),
            middle_name: if rng.random_bool(0.5) {
                Some(FirstName().fake())
            } else {
                None
            },
            qualification: Title().fake(),
            email: SafeEmail().fake(),
            expected_salary: rng.random_range(10_000..=30_000).to_string(),
            other_info: if rng.random_bool(0.3) {
                Some(Sentence(3..8).fake())
            } else {
                None
            },
            activity_type_id: pick(activity_type_ids, rng),
        })
        .collect()
}

fn generate_vacancies(
    count: usize,
    company_ids: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<CreateVacancy> {
    (0..count)
        .map(|_| CreateVacancy {
            position: Title().fake(),
            description: Some(Sentence(4..10).fake()),
            salary: Decimal::from(rng.random_range(10_000..=40_000)),
            is_open: Some(rng.random_bool(0.8)),
            company_id: pick(company_ids, rng),
        })
        .collect()
}

fn generate_responses(
    count: usize,
    worker_ids: &[Uuid],
    vacancy_ids: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<CreateVacancyResponse> {
    (0..count)
        .map(|_| CreateVacancyResponse {
            worker_id: pick(worker_ids, rng),
            vacancy_id: pick(vacancy_ids, rng),
        })
        .collect()
}

fn generate_agreements(
    count: usize,
    worker_ids: &[Uuid],
    company_ids: &[Uuid],
    rng: &mut impl Rng,
) -> Vec<CreateAgreement> {
    // Distinct (worker, company) pairs only; fewer than `count` rows come
    // out when the random picks collide.
    let mut pairs: Vec<(Uuid, Uuid)> = Vec::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let pair = (pick(worker_ids, rng), pick(company_ids, rng));
        if pairs.contains(&pair) {
            continue;
        }
        pairs.push(pair);
        out.push(CreateAgreement {
            position: Title().fake(),
            commission: Decimal::from(rng.random_range(100..=1_000)),
            agreement_date: None,
            worker_id: pair.0,
            company_id: pair.1,
        });
    }
    out
}

fn pick(ids: &[Uuid], rng: &mut impl Rng) -> Uuid {
    ids.choose(rng).copied().unwrap_or_else(Uuid::new_v4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_names_are_unique() {
        let names = generate_activity_names(10);
        assert_eq!(names.len(), 10);
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn test_generated_rows_reference_given_ids() {
        let mut rng = rand::rng();
        let activity_type_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        for company in generate_companies(5, &activity_type_ids, &mut rng) {
            assert!(activity_type_ids.contains(&company.activity_type_id));
        }
        for worker in generate_workers(5, &activity_type_ids, &mut rng) {
            assert!(activity_type_ids.contains(&worker.activity_type_id));
        }
    }

    #[test]
    fn test_agreement_pairs_are_distinct() {
        let mut rng = rand::rng();
        let worker_ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let company_ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let agreements = generate_agreements(30, &worker_ids, &company_ids, &mut rng);
        let mut pairs: Vec<(Uuid, Uuid)> = agreements
            .iter()
            .map(|a| (a.worker_id, a.company_id))
            .collect();
        let before = pairs.len();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
    }

    #[test]
    fn test_salaries_are_in_range() {
        let mut rng = rand::rng();
        let company_ids = vec![Uuid::new_v4()];
        for vacancy in generate_vacancies(20, &company_ids, &mut rng) {
            assert!(vacancy.salary >= Decimal::from(10_000));
            assert!(vacancy.salary <= Decimal::from(40_000));
        }
    }
}
