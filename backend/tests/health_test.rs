//! Integration tests for the health check endpoint

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_health_rejects_post() {
    let app = common::TestApp::new();

    let (status, _) = app.post("/api/health", "{}").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
