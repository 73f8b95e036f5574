//! Integration tests for vacancy endpoints and cascade behavior.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_vacancy_defaults_to_open() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Initech", at_id).await;
    let id = app.create_vacancy("Backend Developer", company_id).await;

    let response = app.request("GET", &format!("/api/vacancies/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["isOpen"], true);
    assert_eq!(response.data()["companyName"], "Initech");
    assert!(!response.data()["createdAt"].is_null());
}

#[tokio::test]
async fn test_vacancy_salary_round_trip() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Initech", at_id).await;

    let response = app
        .request(
            "POST",
            "/api/vacancies",
            Some(json!({
                "position": "Data Analyst",
                "description": "Reporting pipeline ownership",
                "salary": "42500.50",
                "isOpen": false,
                "companyId": company_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["salary"], "42500.50");
    assert_eq!(response.data()["isOpen"], false);
}

#[tokio::test]
async fn test_vacancy_with_unknown_company_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/vacancies",
            Some(json!({
                "position": "Ghost Role",
                "salary": "10000",
                "companyId": uuid::Uuid::new_v4(),
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_company_cascades_to_vacancies() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Doomed Corp", at_id).await;
    let vacancy_id = app.create_vacancy("Short-lived Role", company_id).await;

    let response = app
        .request("DELETE", &format!("/api/companies/{company_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/api/vacancies/{vacancy_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vacancy_sort_by_created_at_is_default() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Initech", at_id).await;
    app.create_vacancy("First", company_id).await;
    app.create_vacancy("Second", company_id).await;

    let response = app.request("GET", "/api/vacancies/all", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.data().as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["position"], "First");
    assert_eq!(items[1]["position"], "Second");
}
