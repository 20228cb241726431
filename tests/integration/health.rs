//! Health endpoint integration tests
//!
//! Tests for the health check endpoints against the real router:
//! - GET /health - Full health check with dependency status
//! - GET /health/ready - Readiness probe
//! - GET /health/live - Liveness probe

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use wiremock::MockServer;

use crate::common::{constants, test_server};

#[tokio::test]
async fn health_reports_configured_gemini() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream.uri(), Some(constants::TEST_GEMINI_KEY));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["gemini"]["configured"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_degrades_without_server_key() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream.uri(), None);

    let response = server.get("/health").await;

    // Degraded still serves traffic
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["gemini"]["configured"], false);
    assert!(body["checks"]["gemini"]["error"]
        .as_str()
        .unwrap()
        .contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn readiness_and_liveness_answer_healthy() {
    let upstream = MockServer::start().await;
    let server = test_server(&upstream.uri(), None);

    for probe in ["/health/ready", "/health/live"] {
        let response = server.get(probe).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}
