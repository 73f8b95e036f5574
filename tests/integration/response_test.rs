//! Integration tests for vacancy response endpoints and the status
//! lifecycle.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn setup_response(app: &TestApp) -> uuid::Uuid {
    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Taylor", at_id).await;
    let company_id = app.create_company("Initech", at_id).await;
    let vacancy_id = app.create_vacancy("Backend Developer", company_id).await;

    let response = app
        .request(
            "POST",
            "/api/responses",
            Some(json!({ "workerId": worker_id, "vacancyId": vacancy_id })),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Response creation failed: {:?}",
        response.body
    );
    response.data_id()
}

#[tokio::test]
async fn test_response_starts_pending_with_joined_names() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = setup_response(&app).await;

    let response = app.request("GET", &format!("/api/responses/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "pending");
    assert_eq!(response.data()["position"], "Backend Developer");
    assert_eq!(response.data()["workerFullName"], "Taylor Alex");
}

#[tokio::test]
async fn test_response_pending_to_accepted() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = setup_response(&app).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/responses/{id}"),
            Some(json!({ "status": "accepted" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "accepted");
}

#[tokio::test]
async fn test_response_terminal_status_is_immutable() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = setup_response(&app).await;

    app.request(
        "PUT",
        &format!("/api/responses/{id}"),
        Some(json!({ "status": "rejected" })),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/responses/{id}"),
            Some(json!({ "status": "accepted" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Re-submitting the current status is a permitted no-op.
    let response = app
        .request(
            "PUT",
            &format!("/api/responses/{id}"),
            Some(json!({ "status": "rejected" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "rejected");
}

#[tokio::test]
async fn test_response_unknown_status_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = setup_response(&app).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/responses/{id}"),
            Some(json!({ "status": "maybe" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_response_with_unknown_worker_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Initech", at_id).await;
    let vacancy_id = app.create_vacancy("Backend Developer", company_id).await;

    let response = app
        .request(
            "POST",
            "/api/responses",
            Some(json!({ "workerId": uuid::Uuid::new_v4(), "vacancyId": vacancy_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
