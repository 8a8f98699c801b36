pub mod emoji;
pub mod enhance_doc;
pub mod providers;

pub use emoji::{handle_emoji_command, EmojiArgs, OutputFormat};
pub use enhance_doc::{handle_enhance_doc_command, EnhanceDocArgs};
pub use providers::handle_providers_command;

use clap::Args;
use std::time::Duration;

/// Provider selection shared by every AI-backed command
#[derive(Args, Debug, Clone, Default)]
pub struct ProviderArgs {
    /// Provider id (openai, anthropic, groq, openrouter, together)
    ///
    /// Detected from the environment when omitted.
    #[arg(long, value_name = "ID")]
    pub provider: Option<String>,

    /// Model id (provider default when omitted)
    #[arg(long, value_name = "ID")]
    pub model: Option<String>,

    /// Send requests to this URL instead of the provider endpoint
    #[arg(long = "ai-endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "ai-timeout", value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl ProviderArgs {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Parse a `NAME=EMOJI` pin
pub fn parse_pin(raw: &str) -> Result<(String, String), String> {
    let (name, emoji) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=EMOJI, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing config name in `{raw}`"));
    }
    Ok((name.to_string(), emoji.trim().to_string()))
}
