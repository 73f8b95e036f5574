//! Integration tests for company endpoints, paging, and sorting.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_company_create_includes_activity_type_name() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Retail").await;
    let id = app.create_company("Northwind", at_id).await;

    let response = app.request("GET", &format!("/api/companies/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["companyName"], "Northwind");
    assert_eq!(response.data()["activityTypeName"], "Retail");
}

#[tokio::test]
async fn test_company_create_with_unknown_activity_type_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/companies",
            Some(json!({
                "companyName": "Orphan Ltd",
                "email": "info@example.com",
                "address": "2 Side Street",
                "phone": "+1-555-0101",
                "activityTypeId": uuid::Uuid::new_v4(),
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_company_paging_arithmetic() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Finance").await;
    for name in ["Alpha", "Bravo", "Charlie", "Delta", "Echo"] {
        app.create_company(name, at_id).await;
    }

    let response = app
        .request("GET", "/api/companies?page=1&per_page=2", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["totalItems"], 5);
    assert_eq!(data["totalPages"], 3);
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["hasNext"], true);
    assert_eq!(data["hasPrevious"], false);

    let response = app
        .request("GET", "/api/companies?page=3&per_page=2", None)
        .await;
    let data = response.data();
    assert_eq!(data["items"].as_array().unwrap().len(), 1);
    assert_eq!(data["hasNext"], false);
    assert_eq!(data["hasPrevious"], true);

    // Past the end: empty items, true total.
    let response = app
        .request("GET", "/api/companies?page=9&per_page=2", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["items"].as_array().unwrap().len(), 0);
    assert_eq!(data["totalItems"], 5);
}

#[tokio::test]
async fn test_company_paging_bounds_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request("GET", "/api/companies?page=0&per_page=10", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/companies?page=1&per_page=101", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/companies?page=1&per_page=100", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_company_sort_and_fallback() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Media").await;
    for name in ["Zenith", "Apex", "Mid"] {
        app.create_company(name, at_id).await;
    }

    let response = app
        .request(
            "GET",
            "/api/companies/all?sort_by=companyName&sort_dir=desc",
            None,
        )
        .await;
    let items = response.data().as_array().unwrap().clone();
    assert_eq!(items[0]["companyName"], "Zenith");
    assert_eq!(items[2]["companyName"], "Apex");

    // Unknown sort field falls back to name ascending, ignoring direction.
    let response = app
        .request(
            "GET",
            "/api/companies/all?sort_by=bogus&sort_dir=desc",
            None,
        )
        .await;
    let items = response.data().as_array().unwrap().clone();
    assert_eq!(items[0]["companyName"], "Apex");
    assert_eq!(items[2]["companyName"], "Zenith");
}

#[tokio::test]
async fn test_company_search_escapes_like_metacharacters() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Consulting").await;
    app.create_company("100% Committed", at_id).await;
    app.create_company("Plain Consulting", at_id).await;

    let response = app
        .request("GET", "/api/companies/all?search=100%25", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.data().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["companyName"], "100% Committed");
}
