//! Integration tests for admin seed, clear, and stats endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_seed_populates_every_table() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let response = app.request("POST", "/api/admin/seed", None).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let data = response.data();
    assert_eq!(data["activityTypes"], 10);
    assert_eq!(data["companies"], 15);
    assert_eq!(data["workers"], 20);
    assert_eq!(data["vacancies"], 25);
    assert_eq!(data["responses"], 40);
    assert!(data["agreements"].as_u64().unwrap() >= 1);
    assert!(data["agreements"].as_u64().unwrap() <= 30);

    let response = app.request("GET", "/api/admin/stats", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["workers"], 20);
}

#[tokio::test]
async fn test_seed_refuses_non_empty_database() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    app.create_activity_type("Lonely Row").await;

    let response = app.request("POST", "/api/admin/seed", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_clear_empties_every_table() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    app.request("POST", "/api/admin/seed", None).await;

    let response = app.request("DELETE", "/api/admin/seed", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/api/admin/stats", None).await;
    let data = response.data();
    for table in [
        "activityTypes",
        "companies",
        "workers",
        "vacancies",
        "responses",
        "agreements",
    ] {
        assert_eq!(data[table], 0, "{table} not empty after clear");
    }
}

#[tokio::test]
async fn test_seeded_listings_are_pageable() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    app.request("POST", "/api/admin/seed", None).await;

    let response = app.request("GET", "/api/workers?page=2&per_page=8", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["totalItems"], 20);
    assert_eq!(data["totalPages"], 3);
    assert_eq!(data["items"].as_array().unwrap().len(), 8);
}
