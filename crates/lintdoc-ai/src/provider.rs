//! Provider table and resolution
//!
//! A run uses exactly one provider. It is either named explicitly or found
//! by scanning the environment for provider keys; finding more than one key
//! is an error rather than a guess, so a stray key never bills the wrong
//! account.

use crate::env::{read_credential, EnvSource};
use crate::error::{Error, Result};
use crate::protocol::{JsonResponseFormat, WireProtocol};
use std::fmt;

/// Static description of a supported provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSpec {
    /// Identifier used on the command line
    pub id: &'static str,
    /// Name used in messages
    pub display_name: &'static str,
    /// Variable holding the API key
    pub env_var: &'static str,
    /// Model used when none is given
    pub default_model: &'static str,
    /// Chat endpoint
    pub endpoint: &'static str,
    /// Wire format
    pub protocol: WireProtocol,
    /// JSON-mode hint (ignored for Anthropic)
    pub json_format: JsonResponseFormat,
}

/// Every supported provider, in scan order
pub const PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        id: "openai",
        display_name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        default_model: "gpt-4o-mini",
        endpoint: "https://api.openai.com/v1/chat/completions",
        protocol: WireProtocol::OpenAiCompatible,
        json_format: JsonResponseFormat::JsonObject,
    },
    ProviderSpec {
        id: "anthropic",
        display_name: "Anthropic",
        env_var: "ANTHROPIC_API_KEY",
        default_model: "claude-3-5-haiku-latest",
        endpoint: "https://api.anthropic.com/v1/messages",
        protocol: WireProtocol::Anthropic,
        json_format: JsonResponseFormat::JsonObject,
    },
    ProviderSpec {
        id: "groq",
        display_name: "Groq",
        env_var: "GROQ_API_KEY",
        default_model: "llama-3.3-70b-versatile",
        endpoint: "https://api.groq.com/openai/v1/chat/completions",
        protocol: WireProtocol::OpenAiCompatible,
        json_format: JsonResponseFormat::JsonObject,
    },
    ProviderSpec {
        id: "openrouter",
        display_name: "OpenRouter",
        env_var: "OPENROUTER_API_KEY",
        default_model: "openai/gpt-4o-mini",
        endpoint: "https://openrouter.ai/api/v1/chat/completions",
        protocol: WireProtocol::OpenAiCompatible,
        json_format: JsonResponseFormat::JsonObject,
    },
    ProviderSpec {
        id: "together",
        display_name: "Together AI",
        env_var: "TOGETHER_API_KEY",
        default_model: "meta-llama/Llama-3.3-70B-Instruct-Turbo",
        endpoint: "https://api.together.xyz/v1/chat/completions",
        protocol: WireProtocol::OpenAiCompatible,
        json_format: JsonResponseFormat::Json,
    },
];

/// Look up a provider by id (case-insensitive)
pub fn find_provider(id: &str) -> Option<&'static ProviderSpec> {
    let id = id.trim();
    PROVIDERS.iter().find(|spec| spec.id.eq_ignore_ascii_case(id))
}

/// Everything needed to call one provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider id
    pub id: &'static str,
    /// Name used in messages
    pub display_name: &'static str,
    /// API key
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Chat endpoint
    pub endpoint: String,
    /// Wire format
    pub protocol: WireProtocol,
    /// JSON-mode hint
    pub json_format: JsonResponseFormat,
}

impl ProviderConfig {
    /// Config for `spec` with its default endpoint
    pub fn new(spec: &ProviderSpec, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: spec.id,
            display_name: spec.display_name,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: spec.endpoint.to_string(),
            protocol: spec.protocol,
            json_format: spec.json_format,
        }
    }

    /// Send requests to `endpoint` instead of the provider default
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let parsed = url::Url::parse(endpoint).map_err(|source| Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        self.endpoint = parsed.to_string();
        Ok(self)
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("protocol", &self.protocol)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Pick the provider, model and key for this run
///
/// - explicit provider: its key must be set
/// - otherwise exactly one provider key must be set in `env`
///
/// A blank `explicit_model` counts as absent.
///
/// # Errors
///
/// [`Error::UnknownProvider`], [`Error::MissingApiKey`],
/// [`Error::NoProviderConfigured`] or [`Error::AmbiguousProvider`].
pub fn resolve_provider(
    explicit_provider: Option<&str>,
    explicit_model: Option<&str>,
    env: &dyn EnvSource,
) -> Result<ProviderConfig> {
    let (spec, api_key) = match explicit_provider.map(str::trim).filter(|p| !p.is_empty()) {
        Some(requested) => {
            let spec = find_provider(requested).ok_or_else(|| Error::UnknownProvider {
                provider: requested.to_string(),
                known: PROVIDERS.iter().map(|p| p.id.to_string()).collect(),
            })?;
            let key = read_credential(env, spec.env_var).ok_or_else(|| Error::MissingApiKey {
                provider: spec.display_name.to_string(),
                env_var: spec.env_var.to_string(),
            })?;
            (spec, key)
        }
        None => {
            let mut configured: Vec<(&'static ProviderSpec, String)> = PROVIDERS
                .iter()
                .filter_map(|spec| read_credential(env, spec.env_var).map(|key| (spec, key)))
                .collect();
            match configured.len() {
                0 => {
                    return Err(Error::NoProviderConfigured {
                        env_vars: PROVIDERS.iter().map(|p| p.env_var.to_string()).collect(),
                    })
                }
                1 => configured.remove(0),
                _ => {
                    return Err(Error::AmbiguousProvider {
                        env_vars: configured
                            .iter()
                            .map(|(spec, _)| spec.env_var.to_string())
                            .collect(),
                    })
                }
            }
        }
    };

    let model = explicit_model
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(spec.default_model);

    tracing::info!(provider = spec.id, model, "Resolved AI provider");
    Ok(ProviderConfig::new(spec, api_key, model))
}
