//! Verifies the HTTP error body contract: every error is
//! `{"error": {"code", "message", "details"}}` with a stable code per
//! status.

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use storefront_api::AppError;

fn server_failing_with(make_error: fn() -> AppError) -> TestServer {
    let app = Router::new().route(
        "/fail",
        get(move || async move { Err::<(), AppError>(make_error()) }),
    );
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_validation_error_body() {
    let server = server_failing_with(|| {
        AppError::bad_request("Validation failed", json!({"field": "count"}))
    });

    let response = server.get("/fail").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Validation failed");
    assert_eq!(body["error"]["details"]["field"], "count");
}

#[tokio::test]
async fn test_unauthorized_error_body() {
    let server = server_failing_with(|| AppError::unauthorized("Unauthorized", json!({})));

    let response = server.get("/fail").await;

    response.assert_status_unauthorized();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_not_found_error_body() {
    let server =
        server_failing_with(|| AppError::not_found("User not found", json!({"email": "x@y.z"})));

    let response = server.get("/fail").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["email"], "x@y.z");
}

#[tokio::test]
async fn test_conflict_error_body() {
    let server = server_failing_with(|| AppError::conflict("Already exists", json!({})));

    let response = server.get("/fail").await;

    response.assert_status_conflict();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_internal_error_body() {
    let server = server_failing_with(|| AppError::internal("Database error", json!({})));

    let response = server.get("/fail").await;

    response.assert_status_internal_server_error();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}
