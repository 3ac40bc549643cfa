// ABOUTME: HTTP tests for registration, login and the current-user routes
// ABOUTME: Drives the full router in-process with tower oneshot requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;
mod helpers;

use healthcare_portal::server::HealthcareServer;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_then_login() {
    let resources = common::create_test_resources().await.unwrap();
    let app = HealthcareServer::router(&resources);

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "Ada@Example.com",
            "password": "analytical"
        }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    let user_id = body["user_id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "ada@example.com", "password": "analytical" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Ada Lovelace");
    let token = body["token"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::get("/api/users/me")
        .bearer(&token)
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["user"]["id"], user_id.as_str());
}

#[tokio::test]
async fn test_register_validation_errors() {
    let resources = common::create_test_resources().await.unwrap();
    let app = HealthcareServer::router(&resources);

    let cases = [
        (
            json!({ "name": "", "email": "a@example.com", "password": "secret1" }),
            "MISSING_REQUIRED_FIELD",
            "All fields are required",
        ),
        (
            json!({ "email": "a@example.com", "password": "secret1" }),
            "MISSING_REQUIRED_FIELD",
            "All fields are required",
        ),
        (
            json!({ "name": "Ada", "email": "a@example.com", "password": "12345" }),
            "INVALID_INPUT",
            "Password must be at least 6 characters",
        ),
        (
            json!({ "name": "Ada", "email": "not-an-email", "password": "secret1" }),
            "INVALID_INPUT",
            "Invalid email format",
        ),
    ];

    for (payload, code, message) in cases {
        let response = AxumTestRequest::post("/api/auth/register")
            .json(&payload)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "payload {payload}");
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], code);
        assert_eq!(body["error"]["message"], message);
    }
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let resources = common::create_test_resources().await.unwrap();
    common::create_test_user(&resources.database, "Ada", "ada@example.com")
        .await
        .unwrap();
    let app = HealthcareServer::router(&resources);

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({
            "name": "Impostor",
            "email": "ADA@example.com",
            "password": "secret1"
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
    assert_eq!(body["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let resources = common::create_test_resources().await.unwrap();
    common::create_test_user(&resources.database, "Ada", "ada@example.com")
        .await
        .unwrap();
    let app = HealthcareServer::router(&resources);

    for payload in [
        json!({ "email": "ada@example.com", "password": "wrong-password" }),
        json!({ "email": "nobody@example.com", "password": common::TEST_PASSWORD }),
    ] {
        let response = AxumTestRequest::post("/api/auth/login")
            .json(&payload)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 401);
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "ada@example.com" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Email and password are required");
}

#[tokio::test]
async fn test_protected_route_requires_valid_token() {
    let resources = common::create_test_resources().await.unwrap();
    let app = HealthcareServer::router(&resources);

    let response = AxumTestRequest::get("/api/users/me").send(app.clone()).await;
    assert_eq!(response.status(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    let response = AxumTestRequest::get("/api/users/me")
        .bearer("not.a.token")
        .send(app)
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_stats_only_for_self() {
    let resources = common::create_test_resources().await.unwrap();
    let ada = common::create_test_user(&resources.database, "Ada", "ada@example.com")
        .await
        .unwrap();
    let grace = common::create_test_user(&resources.database, "Grace", "grace@example.com")
        .await
        .unwrap();
    let token = common::token_for(&resources, &ada).unwrap();
    let app = HealthcareServer::router(&resources);

    let response = AxumTestRequest::get(&format!("/api/users/{}/stats", ada.id))
        .bearer(&token)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["stats"]["total_assessments"], 0);
    assert!(body["stats"]["avg_risk_score"].is_null());

    let response = AxumTestRequest::get(&format!("/api/users/{}/stats", grace.id))
        .bearer(&token)
        .send(app)
        .await;
    assert_eq!(response.status(), 403);
}

#[tokio::test]
async fn test_health_endpoints_and_request_id() {
    let resources = common::create_test_resources().await.unwrap();
    let app = HealthcareServer::router(&resources);

    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    assert!(response
        .header("x-request-id")
        .is_some_and(|id| id.starts_with("req_")));
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");

    let response = AxumTestRequest::get("/ready")
        .header("x-request-id", "req_client_supplied")
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.header("x-request-id"), Some("req_client_supplied"));
}
