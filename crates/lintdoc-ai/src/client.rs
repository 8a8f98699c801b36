//! HTTP transport for chat requests

use crate::error::{Error, Result};
use crate::protocol::{parse_error_envelope, ChatPrompt, JsonResponseFormat};
use crate::provider::ProviderConfig;
use crate::reply::parse_json_object;
use serde_json::{Map, Value};
use std::time::Duration;

/// Hard limit for one request, connection through body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat client shared by the emoji and rule-doc features
///
/// One attempt per call: no retries, no backoff. The timeout wraps the whole
/// exchange, so when it fires the in-flight request is dropped and the body
/// is never read.
#[derive(Debug, Clone)]
pub struct AiClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl AiClient {
    /// Create a client with the default 30 second timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("lintdoc/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client, timeout })
    }

    /// The per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask for a JSON object reply
    ///
    /// # Errors
    ///
    /// Transport errors as for [`AiClient::request_text`], plus
    /// [`Error::MalformedResponse`] when the reply is not a JSON object.
    pub async fn request_json_object(
        &self,
        config: &ProviderConfig,
        system: Option<&str>,
        user: &str,
    ) -> Result<Map<String, Value>> {
        let prompt = ChatPrompt { system, user };
        let text = self.complete(config, &prompt, Some(config.json_format)).await?;
        parse_json_object(&text).map_err(|message| Error::MalformedResponse {
            provider: config.display_name.to_string(),
            message,
        })
    }

    /// Ask for a free-text reply
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`], [`Error::Network`], [`Error::HttpStatus`] or
    /// [`Error::MissingContent`].
    pub async fn request_text(
        &self,
        config: &ProviderConfig,
        system: Option<&str>,
        user: &str,
    ) -> Result<String> {
        let prompt = ChatPrompt { system, user };
        let text = self.complete(config, &prompt, None).await?;
        Ok(text.trim().to_string())
    }

    async fn complete(
        &self,
        config: &ProviderConfig,
        prompt: &ChatPrompt<'_>,
        json_format: Option<JsonResponseFormat>,
    ) -> Result<String> {
        let body = config.protocol.request_body(&config.model, prompt, json_format);
        let request = config
            .protocol
            .authorize(self.client.post(&config.endpoint), &config.api_key)
            .json(&body);

        tracing::debug!(provider = config.id, model = %config.model, endpoint = %config.endpoint, "Sending AI request");

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };

        let (status, text) = match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => {
                return Err(Error::Timeout {
                    provider: config.display_name.to_string(),
                    timeout: self.timeout,
                })
            }
            Ok(Err(source)) => {
                return Err(Error::Network {
                    provider: config.display_name.to_string(),
                    source,
                })
            }
            Ok(Ok(exchange)) => exchange,
        };

        let payload = serde_json::from_str::<Value>(&text).ok();

        if !status.is_success() {
            return Err(Error::HttpStatus {
                provider: config.display_name.to_string(),
                status,
                envelope: payload.as_ref().and_then(parse_error_envelope),
            });
        }

        payload
            .as_ref()
            .and_then(|payload| config.protocol.extract_text(payload))
            .ok_or_else(|| Error::MissingContent {
                provider: config.display_name.to_string(),
            })
    }
}
