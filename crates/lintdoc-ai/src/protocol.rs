//! Wire formats for the supported chat APIs
//!
//! Two request/response families exist: OpenAI-compatible chat completions
//! (OpenAI, Groq, OpenRouter, Together) and Anthropic messages. Each variant
//! knows how to build a request body, authenticate, and find the assistant
//! text in a response.

use serde_json::{json, Value};
use std::fmt;

/// `anthropic-version` header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// `max_tokens` sent on every Anthropic request
pub const ANTHROPIC_MAX_TOKENS: u32 = 4096;

/// Request/response family spoken by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireProtocol {
    /// `POST /chat/completions` with bearer auth
    OpenAiCompatible,
    /// `POST /v1/messages` with `x-api-key`
    Anthropic,
}

/// `response_format.type` value an OpenAI-compatible provider accepts for JSON mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonResponseFormat {
    /// `{"type": "json_object"}`
    JsonObject,
    /// `{"type": "json"}`
    Json,
}

impl JsonResponseFormat {
    /// Value of the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonResponseFormat::JsonObject => "json_object",
            JsonResponseFormat::Json => "json",
        }
    }
}

/// One system + user exchange
#[derive(Debug, Clone, Copy)]
pub struct ChatPrompt<'a> {
    /// Optional instructions
    pub system: Option<&'a str>,
    /// The request itself
    pub user: &'a str,
}

impl WireProtocol {
    /// Request body for `model`
    ///
    /// `json_format` is only honored by OpenAI-compatible providers; Anthropic
    /// has no response-format switch and relies on the prompt instead.
    pub fn request_body(
        &self,
        model: &str,
        prompt: &ChatPrompt<'_>,
        json_format: Option<JsonResponseFormat>,
    ) -> Value {
        match self {
            WireProtocol::OpenAiCompatible => {
                let mut messages = Vec::new();
                if let Some(system) = prompt.system {
                    messages.push(json!({"role": "system", "content": system}));
                }
                messages.push(json!({"role": "user", "content": prompt.user}));

                let mut body = json!({
                    "model": model,
                    "temperature": 0,
                    "messages": messages,
                });
                if let Some(format) = json_format {
                    body["response_format"] = json!({"type": format.as_str()});
                }
                body
            }
            WireProtocol::Anthropic => {
                let mut body = json!({
                    "model": model,
                    "max_tokens": ANTHROPIC_MAX_TOKENS,
                    "temperature": 0,
                    "messages": [{"role": "user", "content": prompt.user}],
                });
                if let Some(system) = prompt.system {
                    body["system"] = Value::String(system.to_string());
                }
                body
            }
        }
    }

    /// Attach authentication (and version) headers
    pub fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        api_key: &str,
    ) -> reqwest::RequestBuilder {
        match self {
            WireProtocol::OpenAiCompatible => request.bearer_auth(api_key),
            WireProtocol::Anthropic => request
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION),
        }
    }

    /// Assistant text of a successful response, if any
    ///
    /// Whitespace-only text counts as missing.
    pub fn extract_text(&self, payload: &Value) -> Option<String> {
        let text = match self {
            WireProtocol::OpenAiCompatible => {
                match payload.pointer("/choices/0/message/content")? {
                    Value::String(text) => text.clone(),
                    Value::Array(parts) => parts.iter().filter_map(openai_part_text).collect(),
                    _ => return None,
                }
            }
            WireProtocol::Anthropic => payload
                .get("content")?
                .as_array()?
                .iter()
                .filter(|part| part.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect(),
        };

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn openai_part_text(part: &Value) -> Option<&str> {
    match part {
        Value::String(text) => Some(text.as_str()),
        Value::Object(obj) => {
            let kind = obj.get("type").and_then(Value::as_str);
            if matches!(kind, None | Some("text") | Some("output_text")) {
                obj.get("text").and_then(Value::as_str)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Error details a provider put in a failed response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Human-readable message
    pub message: Option<String>,
    /// Machine-readable code
    pub code: Option<String>,
    /// Error category (`type`)
    pub kind: Option<String>,
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut details = Vec::new();
        if let Some(code) = &self.code {
            details.push(format!("code: {code}"));
        }
        if let Some(kind) = &self.kind {
            details.push(format!("type: {kind}"));
        }

        match (&self.message, details.is_empty()) {
            (Some(message), true) => write!(f, "{message}"),
            (Some(message), false) => write!(f, "{message} ({})", details.join(", ")),
            (None, _) => write!(f, "{}", details.join(", ")),
        }
    }
}

/// Parse `{"error": {...}}`, `{"error": "..."}` or top-level `message`/`code`/`type`
///
/// Returns `None` when no field is present.
pub fn parse_error_envelope(payload: &Value) -> Option<ErrorEnvelope> {
    let envelope = match payload.get("error") {
        Some(Value::Object(inner)) => fields_of(inner),
        Some(Value::String(message)) => ErrorEnvelope {
            message: Some(message.clone()),
            ..Default::default()
        },
        _ => payload.as_object().map(fields_of).unwrap_or_default(),
    };

    if envelope == ErrorEnvelope::default() {
        None
    } else {
        Some(envelope)
    }
}

fn fields_of(obj: &serde_json::Map<String, Value>) -> ErrorEnvelope {
    ErrorEnvelope {
        message: scalar(obj.get("message")),
        code: scalar(obj.get("code")),
        kind: scalar(obj.get("type")),
    }
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
