//! Integration tests for `BriefClient` using wiremock HTTP mocks.

use adintel_brief::{BriefClient, BriefError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> BriefClient {
    BriefClient::with_base_url("test-key", "claude-sonnet-4-6", 1200, 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn generate_returns_first_text_block() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            { "type": "text", "text": "## 🎯 Executive Summary\nTracked 57 ads this week." }
        ],
        "model": "claude-sonnet-4-6",
        "stop_reason": "end_turn"
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-sonnet-4-6",
            "max_tokens": 1200
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let markdown = client
        .generate("Write the weekly brief.")
        .await
        .expect("should parse message");

    assert!(markdown.starts_with("## 🎯 Executive Summary"));
    assert!(markdown.contains("57 ads"));
}

#[tokio::test]
async fn generate_surfaces_api_error_envelope() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "error",
        "error": { "type": "authentication_error", "message": "invalid x-api-key" }
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, BriefError::Api(ref m) if m == "invalid x-api-key"));
}

#[tokio::test]
async fn generate_rejects_response_without_text_content() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": "msg_02",
        "type": "message",
        "role": "assistant",
        "content": [],
        "model": "claude-sonnet-4-6",
        "stop_reason": "end_turn"
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, BriefError::MissingContent));
}

#[tokio::test]
async fn generate_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, BriefError::Deserialize { .. }));
}
