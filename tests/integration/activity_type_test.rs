//! Integration tests for activity type endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_activity_type_crud_round_trip() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let id = app.create_activity_type("Logistics").await;

    let response = app
        .request("GET", &format!("/api/activity-types/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["activityName"], "Logistics");

    let response = app
        .request(
            "PUT",
            &format!("/api/activity-types/{id}"),
            Some(json!({ "activityName": "Freight" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["activityName"], "Freight");

    let response = app
        .request("DELETE", &format!("/api/activity-types/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/api/activity-types/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activity_type_empty_name_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/activity-types",
            Some(json!({ "activityName": "" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_missing_activity_type_returns_404() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app
        .request(
            "DELETE",
            &format!("/api/activity-types/{}", uuid::Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_activity_type_search_filters() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    app.create_activity_type("Construction").await;
    app.create_activity_type("Information Technology").await;
    app.create_activity_type("Healthcare").await;

    let response = app
        .request("GET", "/api/activity-types/all?search=tech", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.data().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["activityName"], "Information Technology");
}
