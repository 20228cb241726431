//! Common test utilities for Storyboard
//!
//! Shared fixtures, mock upstream responders, and helpers used across the
//! integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use storyboard::{AppState, Config};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test configuration constants
pub mod constants {
    /// Default test Gemini API key
    pub const TEST_GEMINI_KEY: &str = "test-gemini-key";
    /// Default test model identifier
    pub const TEST_MODEL: &str = "gemini-2.5-flash-image-preview";
}

/// The upstream path `generateContent` requests hit for a model
pub fn generate_path(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

/// Build a config pointing at a mock upstream
pub fn test_config(gemini_url: &str, api_key: Option<&str>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gemini_api_url: gemini_url.to_string(),
        gemini_api_key: api_key.map(str::to_string),
        gemini_model: constants::TEST_MODEL.to_string(),
        guidelines_path: "assets/comic-prompt.txt".to_string(),
        request_timeout_seconds: 5,
    }
}

/// Spin up a TestServer running the real router against a mock upstream
pub fn test_server(gemini_url: &str, api_key: Option<&str>) -> TestServer {
    let state = AppState::new(test_config(gemini_url, api_key)).expect("test app state");
    let router = storyboard::create_router(Arc::new(state));
    TestServer::new(router).expect("test server")
}

/// Mock Gemini upstream responses
pub mod gemini_mocks {
    use super::*;
    use serde_json::json;

    /// Upstream answers with a single text part
    pub async fn mock_text_response(server: &MockServer, model: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(generate_path(model)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {"content": {"parts": [{"text": text}]}}
                ]
            })))
            .mount(server)
            .await;
    }

    /// Upstream answers with one inline image part
    pub async fn mock_image_response(server: &MockServer, model: &str) {
        Mock::given(method("POST"))
            .and(path(generate_path(model)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {"content": {"parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "abc123"}}
                    ]}}
                ]
            })))
            .mount(server)
            .await;
    }

    /// Upstream answers with interleaved text and image parts
    pub async fn mock_mixed_response(server: &MockServer, model: &str) {
        Mock::given(method("POST"))
            .and(path(generate_path(model)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {"content": {"parts": [
                        {"text": "Panel 1."},
                        {"inlineData": {"mimeType": "image/png", "data": "abc123"}},
                        {"text": " Panel 2."}
                    ]}}
                ]
            })))
            .mount(server)
            .await;
    }

    /// Upstream fails with the given status and plain-text body
    pub async fn mock_upstream_error(server: &MockServer, model: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(generate_path(model)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }
}
