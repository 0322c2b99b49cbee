mod common;

use articleforge_sdk::{
    anthropic::{AnthropicBackend, AnthropicBackendOptions},
    Backend, Credentials, GenerationError,
};
use mockito::Matcher;
use serde_json::json;

fn backend(server: &mockito::Server) -> AnthropicBackend {
    AnthropicBackend::new(AnthropicBackendOptions {
        base_url: Some(server.url()),
        ..Default::default()
    })
}

#[tokio::test]
async fn sends_keyed_request_and_joins_text_blocks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "sk-ant-test")
        .match_header("anthropic-version", "2023-06-01")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "claude-3-5-sonnet-20240620",
            "max_tokens": 2000,
            "messages": [{ "role": "user", "content": "Pick keywords" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::anthropic_message_body(json!([
            { "type": "text", "text": "Here you go:" },
            { "type": "text", "text": "{\"ok\": true}" }
        ])))
        .create_async()
        .await;

    let text = backend(&server)
        .send("Pick keywords", 2000, Some(&Credentials::new("sk-ant-test")))
        .await
        .expect("send should succeed");

    assert_eq!(text, "Here you go:\n{\"ok\": true}");
    mock.assert_async().await;
}

#[tokio::test]
async fn client_error_carries_provider_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"x"}}"#)
        .create_async()
        .await;

    let error = backend(&server)
        .send("prompt", 100, Some(&Credentials::new("sk-ant-test")))
        .await
        .unwrap_err();

    let GenerationError::BackendError {
        provider,
        status,
        message,
    } = error
    else {
        panic!("expected a backend error, got {error:?}");
    };
    assert_eq!(provider, "anthropic");
    assert_eq!(status.as_u16(), 400);
    assert_eq!(message, "x");
}

#[tokio::test]
async fn server_error_without_json_body_uses_fallback_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(529)
        .with_body("overloaded")
        .create_async()
        .await;

    let error = backend(&server)
        .send("prompt", 100, Some(&Credentials::new("sk-ant-test")))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        GenerationError::BackendError { ref message, .. } if message == "Anthropic API error"
    ));
}

#[tokio::test]
async fn missing_credentials_fail_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .expect(0)
        .create_async()
        .await;

    let error = backend(&server).send("prompt", 100, None).await.unwrap_err();

    assert!(matches!(error, GenerationError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
#[ignore = "requires ANTHROPIC_API_KEY and network access"]
async fn live_generation_returns_text() {
    dotenvy::dotenv().ok();
    let key = std::env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set");

    let text = AnthropicBackend::new(AnthropicBackendOptions::default())
        .send(
            "Reply with the JSON object {\"pong\": true} and nothing else.",
            50,
            Some(&Credentials::new(key)),
        )
        .await
        .expect("live send should succeed");

    assert!(text.contains("pong"));
}
