//! End-to-end pipeline tests
//!
//! Runs the full generation flow against a mocked upstream: options
//! parsing, context and prompt assembly, transport, normalization, and
//! sanitization of the returned text.

use pretty_assertions::assert_eq;
use serde_json::json;
use storyboard::{generate_comic, DecisionInput, GeminiClient, TransportClient};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{constants, generate_path};

fn transport_for(upstream: &MockServer) -> TransportClient {
    let client = reqwest::Client::new();
    let gemini = GeminiClient::new(
        client.clone(),
        upstream.uri(),
        Some(constants::TEST_GEMINI_KEY.to_string()),
    );
    // Direct path only; the proxy is not involved in these tests
    TransportClient::new(client, gemini, "http://localhost:0", constants::TEST_MODEL)
}

#[tokio::test]
async fn prompt_carries_problem_options_and_guidelines() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path(constants::TEST_MODEL)))
        .and(body_string_contains("Problem: Buy a laptop"))
        .and(body_string_contains("- Apple"))
        .and(body_string_contains("- Amazon"))
        .and(body_string_contains("User scenario to tailor for:"))
        .and(body_string_contains("Comic strip guidelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Go with Amazon."}]}}]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let input = DecisionInput {
        problem: Some("Buy a laptop".to_string()),
        options_json: Some(r#"["Apple","Amazon"]"#.to_string()),
    };

    let result = generate_comic(&transport_for(&upstream), "assets/comic-prompt.txt", &input)
        .await
        .unwrap();

    assert_eq!(result.text, "Go with Amazon.");
    assert!(result.images.is_empty());
}

#[tokio::test]
async fn echoed_guidelines_are_sanitized_from_the_result() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path(constants::TEST_MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Guidelines:\nDo X.\n\nActual answer."}
            ]}}]
        })))
        .mount(&upstream)
        .await;

    let result = generate_comic(
        &transport_for(&upstream),
        "assets/comic-prompt.txt",
        &DecisionInput::default(),
    )
    .await
    .unwrap();

    assert_eq!(result.text, "Actual answer.");
}

#[tokio::test]
async fn malformed_options_degrade_and_generation_still_runs() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path(constants::TEST_MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let input = DecisionInput {
        problem: Some("Buy a laptop".to_string()),
        options_json: Some("not json at all".to_string()),
    };

    let result = generate_comic(&transport_for(&upstream), "assets/comic-prompt.txt", &input)
        .await
        .unwrap();
    assert_eq!(result.text, "ok");

    // Degraded options leave no Options section in the prompt
    let requests = upstream.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("Options:"));
    assert!(body.contains("Problem: Buy a laptop"));
}

#[tokio::test]
async fn missing_guidance_document_still_attempts_generation() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path(constants::TEST_MODEL)))
        .and(body_string_contains("Guidelines:"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "still works"}]}}]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let result = generate_comic(
        &transport_for(&upstream),
        "/nonexistent/comic-prompt.txt",
        &DecisionInput::default(),
    )
    .await
    .unwrap();

    assert_eq!(result.text, "still works");
}

#[tokio::test]
async fn mixed_parts_preserve_text_order_and_images() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path(constants::TEST_MODEL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Panel 1."},
                {"inlineData": {"mimeType": "image/png", "data": "abc123"}},
                {"text": " Panel 2."}
            ]}}]
        })))
        .mount(&upstream)
        .await;

    let result = generate_comic(
        &transport_for(&upstream),
        "assets/comic-prompt.txt",
        &DecisionInput::default(),
    )
    .await
    .unwrap();

    assert_eq!(result.text, "Panel 1. Panel 2.");
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].data, "abc123");
}
