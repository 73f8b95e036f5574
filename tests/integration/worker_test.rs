//! Integration tests for worker endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_worker_round_trip_carries_activity_type_name() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Engineering").await;
    let id = app.create_worker("Smith", at_id).await;

    let response = app.request("GET", &format!("/api/workers/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["lastName"], "Smith");
    assert_eq!(response.data()["activityTypeName"], "Engineering");
    assert!(response.data()["middleName"].is_null());
}

#[tokio::test]
async fn test_worker_update_revalidates_changed_activity_type() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Engineering").await;
    let id = app.create_worker("Jones", at_id).await;

    // Same activity type: no referential check needed, succeeds.
    let response = app
        .request(
            "PUT",
            &format!("/api/workers/{id}"),
            Some(json!({
                "lastName": "Jones",
                "firstName": "Morgan",
                "qualification": "Senior Engineer",
                "email": "jones@example.com",
                "expectedSalary": "28000",
                "activityTypeId": at_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["qualification"], "Senior Engineer");

    // Switching to a nonexistent activity type fails validation.
    let response = app
        .request(
            "PUT",
            &format!("/api/workers/{id}"),
            Some(json!({
                "lastName": "Jones",
                "firstName": "Morgan",
                "qualification": "Senior Engineer",
                "email": "jones@example.com",
                "expectedSalary": "28000",
                "activityTypeId": uuid::Uuid::new_v4(),
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_worker_invalid_email_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Engineering").await;
    let response = app
        .request(
            "POST",
            "/api/workers",
            Some(json!({
                "lastName": "Smith",
                "firstName": "Alex",
                "qualification": "Engineer",
                "email": "not-an-email",
                "expectedSalary": "25000",
                "activityTypeId": at_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_worker_get_missing_returns_404() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request("GET", &format!("/api/workers/{}", uuid::Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
