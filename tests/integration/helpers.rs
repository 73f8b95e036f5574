//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;
use uuid::Uuid;

use staffhub_api::{AppState, build_router};
use staffhub_core::config::AppConfig;
use staffhub_core::config::app::{CorsConfig, ServerConfig};
use staffhub_core::config::database::DatabaseConfig;
use staffhub_core::config::logging::LoggingConfig;
use staffhub_core::config::seed::SeedConfig;

// Tests share one database, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    _lock: MutexGuard<'static, ()>,
}

impl TestApp {
    /// Create a test application against the database named by
    /// `STAFFHUB_TEST_DATABASE_URL`, or `None` when the variable is unset.
    pub async fn spawn() -> Option<Self> {
        let Ok(url) = std::env::var("STAFFHUB_TEST_DATABASE_URL") else {
            eprintln!("STAFFHUB_TEST_DATABASE_URL not set; skipping integration test");
            return None;
        };

        let lock = DB_LOCK.lock().await;

        let config = test_config(url);

        let db_pool = staffhub_database::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        staffhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        staffhub_database::seed::clear_all(&db_pool)
            .await
            .expect("Failed to clean test database");

        let state = AppState::new(config, db_pool.clone());
        let router = build_router(state);

        Some(Self {
            router,
            db_pool,
            _lock: lock,
        })
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create an activity type through the API and return its id.
    pub async fn create_activity_type(&self, name: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/activity-types",
                Some(serde_json::json!({ "activityName": name })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Activity type creation failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Create a company through the API and return its id.
    pub async fn create_company(&self, name: &str, activity_type_id: Uuid) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/companies",
                Some(serde_json::json!({
                    "companyName": name,
                    "email": "hiring@example.com",
                    "address": "1 Main Street",
                    "phone": "+1-555-0100",
                    "activityTypeId": activity_type_id,
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Company creation failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Create a worker through the API and return its id.
    pub async fn create_worker(&self, last_name: &str, activity_type_id: Uuid) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/workers",
                Some(serde_json::json!({
                    "lastName": last_name,
                    "firstName": "Alex",
                    "qualification": "Engineer",
                    "email": "worker@example.com",
                    "expectedSalary": "25000",
                    "activityTypeId": activity_type_id,
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Worker creation failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Create a vacancy through the API and return its id.
    pub async fn create_vacancy(&self, position: &str, company_id: Uuid) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/vacancies",
                Some(serde_json::json!({
                    "position": position,
                    "salary": "30000",
                    "companyId": company_id,
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Vacancy creation failed: {:?}",
            response.body
        );
        response.data_id()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extract `data` from the success envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("No data in response body")
    }

    /// Extract `data.id` as a Uuid.
    pub fn data_id(&self) -> Uuid {
        self.data()
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No id in response data")
    }
}

fn test_config(database_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 5,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        seed: SeedConfig::default(),
    }
}
