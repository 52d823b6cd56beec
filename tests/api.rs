//! HTTP-level tests that exercise routing, extraction, and validation
//! without a running database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{MultipartForm, TestApp};

fn valid_asset_form() -> MultipartForm {
    MultipartForm::new()
        .text("name", "Vineyard")
        .text("description", "A small vineyard")
        .text("equity", "10")
        .text("seeking", "50000")
        .text("location", "Napa")
        .text("category", "Agriculture")
        .text("valuation", "500000")
        .text("sharePrice", "25")
        .text("creator", "user-1")
        .text("owner", "org-1")
        .file("imgData", "vineyard.png", "image/png", b"not-really-a-png")
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert!(response.body.get("version").is_some());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/no-such-route", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body.get("error").and_then(|v| v.as_str()),
        Some("NOT_FOUND")
    );
    assert!(response.body.get("message").is_some());
}

#[tokio::test]
async fn test_create_asset_rejects_non_numeric_field() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .text("name", "Vineyard")
        .text("description", "A small vineyard")
        .text("equity", "ten")
        .text("seeking", "50000")
        .text("location", "Napa")
        .text("category", "Agriculture")
        .text("valuation", "500000")
        .text("sharePrice", "25")
        .text("creator", "user-1")
        .text("owner", "org-1")
        .file("imgData", "vineyard.png", "image/png", b"bytes");

    let response = app.send_multipart("/api/assets", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").and_then(|v| v.as_str()),
        Some("VALIDATION")
    );
    let message = response
        .body
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert!(message.contains("equity"), "message was: {message}");
}

#[tokio::test]
async fn test_create_asset_requires_image() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .text("name", "Vineyard")
        .text("description", "A small vineyard")
        .text("equity", "10")
        .text("seeking", "50000")
        .text("location", "Napa")
        .text("category", "Agriculture")
        .text("valuation", "500000")
        .text("sharePrice", "25")
        .text("creator", "user-1")
        .text("owner", "org-1");

    let response = app.send_multipart("/api/assets", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response
        .body
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert!(message.contains("imgData"), "message was: {message}");
}

#[tokio::test]
async fn test_create_asset_rejects_mismatched_custom_fields() {
    let app = TestApp::new().await;

    let form = valid_asset_form()
        .text("fieldNames[]", "Soil")
        .text("fieldNames[]", "Climate")
        .text("values[]", "Volcanic");

    let response = app.send_multipart("/api/assets", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response
        .body
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert!(
        message.contains("fieldNames") && message.contains("values"),
        "message was: {message}"
    );
}

#[tokio::test]
async fn test_create_organization_requires_logo() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .text("name", "Acme")
        .text("email", "admin@acme.test");

    let response = app.send_multipart("/api/organizations", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response
        .body
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert!(message.contains("logo"), "message was: {message}");
}

#[tokio::test]
async fn test_get_asset_rejects_malformed_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/assets/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_creator_rejects_blank_user_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/assets/creator/%20", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response
        .body
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    assert!(message.contains("user_id"), "message was: {message}");
}

#[tokio::test]
async fn test_tokenize_rejects_incomplete_body() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/assets/tokenize", Some(json!({})))
        .await;

    assert!(
        response.status.is_client_error(),
        "status was: {}",
        response.status
    );
}

#[tokio::test]
async fn test_complete_tokenization_rejects_incomplete_body() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/assets/tokenize/complete",
            Some(json!({ "id": "00000000-0000-0000-0000-000000000001" })),
        )
        .await;

    assert!(
        response.status.is_client_error(),
        "status was: {}",
        response.status
    );
}

#[tokio::test]
async fn test_invite_rejects_non_json_body() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/organizations/00000000-0000-0000-0000-000000000001/invite",
            None,
        )
        .await;

    assert!(
        response.status.is_client_error(),
        "status was: {}",
        response.status
    );
}
