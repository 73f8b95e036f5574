//! Integration tests for agreement endpoints and pair uniqueness.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_agreement_round_trip_with_default_date() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Reed", at_id).await;
    let company_id = app.create_company("Initech", at_id).await;

    let response = app
        .request(
            "POST",
            "/api/agreements",
            Some(json!({
                "position": "Backend Developer",
                "commission": "750.00",
                "workerId": worker_id,
                "companyId": company_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["commission"], "750.00");
    assert_eq!(response.data()["workerFullName"], "Reed Alex");
    assert_eq!(response.data()["companyName"], "Initech");
    assert!(!response.data()["agreementDate"].is_null());
}

#[tokio::test]
async fn test_unknown_worker_rejected_and_nothing_stored() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let company_id = app.create_company("Initech", at_id).await;

    let response = app
        .request(
            "POST",
            "/api/agreements",
            Some(json!({
                "position": "Backend Developer",
                "commission": "500",
                "workerId": uuid::Uuid::new_v4(),
                "companyId": company_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app.request("GET", "/api/agreements/all", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_pair_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Reed", at_id).await;
    let company_id = app.create_company("Initech", at_id).await;

    let body = json!({
        "position": "Backend Developer",
        "commission": "500",
        "workerId": worker_id,
        "companyId": company_id,
    });

    let response = app.request("POST", "/api/agreements", Some(body.clone())).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("POST", "/api/agreements", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_keeping_same_pair_is_allowed() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Reed", at_id).await;
    let company_id = app.create_company("Initech", at_id).await;

    let response = app
        .request(
            "POST",
            "/api/agreements",
            Some(json!({
                "position": "Backend Developer",
                "commission": "500",
                "workerId": worker_id,
                "companyId": company_id,
            })),
        )
        .await;
    let id = response.data_id();
    let date = response.data()["agreementDate"].clone();

    let response = app
        .request(
            "PUT",
            &format!("/api/agreements/{id}"),
            Some(json!({
                "position": "Lead Developer",
                "commission": "900",
                "agreementDate": date,
                "workerId": worker_id,
                "companyId": company_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["position"], "Lead Developer");
}

#[tokio::test]
async fn test_update_onto_existing_pair_rejected() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Reed", at_id).await;
    let first_company = app.create_company("Initech", at_id).await;
    let second_company = app.create_company("Globex", at_id).await;

    app.request(
        "POST",
        "/api/agreements",
        Some(json!({
            "position": "Backend Developer",
            "commission": "500",
            "workerId": worker_id,
            "companyId": first_company,
        })),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/agreements",
            Some(json!({
                "position": "Consultant",
                "commission": "300",
                "workerId": worker_id,
                "companyId": second_company,
            })),
        )
        .await;
    let second_id = response.data_id();
    let date = response.data()["agreementDate"].clone();

    // Moving the second agreement onto the first pair collides.
    let response = app
        .request(
            "PUT",
            &format!("/api/agreements/{second_id}"),
            Some(json!({
                "position": "Consultant",
                "commission": "300",
                "agreementDate": date,
                "workerId": worker_id,
                "companyId": first_company,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_worker_cascades_to_agreements() {
    let Some(app) = TestApp::spawn().await else {
        return;
    };

    let at_id = app.create_activity_type("Software").await;
    let worker_id = app.create_worker("Reed", at_id).await;
    let company_id = app.create_company("Initech", at_id).await;

    let response = app
        .request(
            "POST",
            "/api/agreements",
            Some(json!({
                "position": "Backend Developer",
                "commission": "500",
                "workerId": worker_id,
                "companyId": company_id,
            })),
        )
        .await;
    let agreement_id = response.data_id();

    app.request("DELETE", &format!("/api/workers/{worker_id}"), None)
        .await;

    let response = app
        .request("GET", &format!("/api/agreements/{agreement_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
