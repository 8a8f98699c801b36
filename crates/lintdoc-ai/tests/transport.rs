//! Transport tests against a local mock server

use lintdoc_ai::{find_provider, AiClient, Error, ProviderConfig, ANTHROPIC_VERSION};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, provider: &str, route: &str) -> ProviderConfig {
    let spec = find_provider(provider).unwrap();
    ProviderConfig::new(spec, "test-key", "test-model")
        .with_endpoint(&format!("{}{}", server.uri(), route))
        .unwrap()
}

#[tokio::test]
async fn test_openai_json_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0,
            "response_format": {"type": "json_object"},
            "messages": [{"role": "system", "content": "sys"}, {"role": "user", "content": "hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"xyzabc\": \"🧠\"}"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "openai", "/v1/chat/completions");
    let reply = client.request_json_object(&config, Some("sys"), "hi").await.unwrap();

    assert_eq!(reply["xyzabc"], "🧠");
}

#[tokio::test]
async fn test_json_format_tag_follows_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"response_format": {"type": "json"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": [{"type": "text", "text": "{\"a\": \"🧪\"}"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "together", "/v1/chat/completions");
    let reply = client.request_json_object(&config, None, "hi").await.unwrap();

    assert_eq!(reply["a"], "🧪");
}

#[tokio::test]
async fn test_anthropic_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", ANTHROPIC_VERSION))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0,
            "system": "sys",
            "messages": [{"role": "user", "content": "hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "text", "text": "```json\n{\"xyzabc\": "},
                {"type": "text", "text": "\":rocket:\"}\n```"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "anthropic", "/v1/messages");
    let reply = client.request_json_object(&config, Some("sys"), "hi").await.unwrap();

    assert_eq!(reply["xyzabc"], ":rocket:");
}

#[tokio::test]
async fn test_free_text_request_has_no_response_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "  # Title\n\nBody  "}}]
        })))
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "openai", "/v1/chat/completions");
    let text = client.request_text(&config, None, "hi").await.unwrap();
    assert_eq!(text, "# Title\n\nBody");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("response_format").is_none());
}

#[tokio::test]
async fn test_status_error_with_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"message": "Model overloaded", "type": "server_error", "code": "overloaded"}
        })))
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "groq", "/v1/chat/completions");
    let err = client.request_text(&config, None, "hi").await.unwrap_err();

    assert!(err.is_transport());
    let message = err.to_string();
    assert!(message.contains("Groq"), "{message}");
    assert!(message.contains("503"), "{message}");
    assert!(message.contains("Model overloaded (code: overloaded, type: server_error)"), "{message}");
}

#[tokio::test]
async fn test_status_error_without_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "openai", "/v1/chat/completions");
    let err = client.request_text(&config, None, "hi").await.unwrap_err();

    match err {
        Error::HttpStatus { status, envelope, .. } => {
            assert_eq!(status.as_u16(), 502);
            assert!(envelope.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_timeout_is_distinct() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]})),
        )
        .mount(&server)
        .await;

    let client = AiClient::with_timeout(Duration::from_millis(100)).unwrap();
    let config = config(&server, "openai", "/v1/chat/completions");
    let err = client.request_text(&config, None, "hi").await.unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }), "{err}");
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_network_failure() {
    let spec = find_provider("openai").unwrap();
    // nothing listens on port 9 locally
    let config = ProviderConfig::new(spec, "k", "m")
        .with_endpoint("http://127.0.0.1:9/v1/chat/completions")
        .unwrap();

    let client = AiClient::new().unwrap();
    let err = client.request_text(&config, None, "hi").await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "{err}");
}

#[tokio::test]
async fn test_missing_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": [{"type": "tool_use"}]})))
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "anthropic", "/v1/messages");
    let err = client.request_json_object(&config, None, "hi").await.unwrap_err();
    assert!(matches!(err, Error::MissingContent { .. }), "{err}");
}

#[tokio::test]
async fn test_non_object_reply_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "[\"🧠\"]"}}]
        })))
        .mount(&server)
        .await;

    let client = AiClient::new().unwrap();
    let config = config(&server, "openai", "/v1/chat/completions");
    let err = client.request_json_object(&config, None, "hi").await.unwrap_err();
    assert!(err.is_malformed_response(), "{err}");
}
