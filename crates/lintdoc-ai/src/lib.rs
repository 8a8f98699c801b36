//! LLM provider access for lint plugin documentation
//!
//! This crate resolves which provider to call, speaks the two supported wire
//! formats (OpenAI-compatible chat completions and Anthropic messages), and
//! runs the AI-enhanced config emoji pipeline on top of `lintdoc-emoji`.
//!
//! # Example
//!
//! ```no_run
//! use lintdoc_ai::{suggest_config_emojis, AiOptions, EmojiRequest, ProcessEnv};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = EmojiRequest {
//!         names: vec!["recommended".into(), "react-hooks".into()],
//!         ai: Some(AiOptions::default()),
//!         ..Default::default()
//!     };
//!
//!     let outcome = suggest_config_emojis(&request, &ProcessEnv).await?;
//!     for (config, emoji) in &outcome.assignments {
//!         println!("{config}: {emoji}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod emoji;
mod env;
mod error;
mod protocol;
mod provider;
mod reply;
mod rule_doc;

pub use client::{AiClient, DEFAULT_TIMEOUT};
pub use emoji::{suggest_config_emojis, AiFailureMode, AiOptions, EmojiOutcome, EmojiRequest};
pub use env::{read_credential, EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use protocol::{
    parse_error_envelope, ChatPrompt, ErrorEnvelope, JsonResponseFormat, WireProtocol,
    ANTHROPIC_MAX_TOKENS, ANTHROPIC_VERSION,
};
pub use provider::{find_provider, resolve_provider, ProviderConfig, ProviderSpec, PROVIDERS};
pub use reply::{parse_json_object, strip_code_fence};
pub use rule_doc::{build_rule_doc_prompt, enhance_rule_doc, RuleDocRequest, GENERATED_MARKERS};
