//! Error types for lintdoc-ai

use crate::protocol::ErrorEnvelope;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for lintdoc-ai operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for lintdoc-ai operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid emoji input (no config names, blank pins)
    #[error(transparent)]
    Emoji(#[from] lintdoc_emoji::Error),

    /// Explicit provider id not in the provider table
    #[error("Unknown AI provider '{provider}'. Known providers: {}", .known.join(", "))]
    UnknownProvider {
        /// Requested provider id
        provider: String,
        /// Ids of every known provider
        known: Vec<String>,
    },

    /// Explicit provider selected but its key is not set
    #[error("{provider} was requested but the {env_var} environment variable is not set")]
    MissingApiKey {
        /// Provider display name
        provider: String,
        /// Environment variable that must hold the key
        env_var: String,
    },

    /// No provider key found in the environment
    #[error("No AI provider API key found. Set one of: {}", .env_vars.join(", "))]
    NoProviderConfigured {
        /// Every recognized key variable
        env_vars: Vec<String>,
    },

    /// More than one provider key found and no provider chosen
    #[error("Multiple AI provider API keys found ({}). Choose one provider explicitly", .env_vars.join(", "))]
    AmbiguousProvider {
        /// The variables that are set
        env_vars: Vec<String>,
    },

    /// Endpoint override is not a valid URL
    #[error("Invalid AI endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// The rejected endpoint
        endpoint: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// Request did not finish within the timeout
    #[error("{provider} request timed out after {timeout:?}")]
    Timeout {
        /// Provider display name
        provider: String,
        /// The limit that expired
        timeout: Duration,
    },

    /// Connection or protocol failure
    #[error("{provider} request failed: {source}")]
    Network {
        /// Provider display name
        provider: String,
        /// Underlying failure
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error(
        "{provider} request failed with status {status}{}",
        .envelope.as_ref().map(|e| format!(": {e}")).unwrap_or_default()
    )]
    HttpStatus {
        /// Provider display name
        provider: String,
        /// Response status
        status: reqwest::StatusCode,
        /// Provider error details, when the body carried them
        envelope: Option<ErrorEnvelope>,
    },

    /// Successful response without assistant text
    #[error("{provider} response did not contain any assistant content")]
    MissingContent {
        /// Provider display name
        provider: String,
    },

    /// Assistant text present but not in the expected shape
    #[error("{provider} returned a malformed response: {message}")]
    MalformedResponse {
        /// Provider display name
        provider: String,
        /// What was wrong
        message: String,
    },

    /// HTTP client could not be constructed
    #[error("Failed to initialize HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// Problems with input or credentials, surfaced before any request
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Emoji(_)
                | Self::UnknownProvider { .. }
                | Self::MissingApiKey { .. }
                | Self::NoProviderConfigured { .. }
                | Self::AmbiguousProvider { .. }
                | Self::InvalidEndpoint { .. }
        )
    }

    /// Failures of the request itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Network { .. }
                | Self::HttpStatus { .. }
                | Self::MissingContent { .. }
                | Self::Client(_)
        )
    }

    /// Assistant text that could not be used
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
