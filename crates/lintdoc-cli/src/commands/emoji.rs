use super::{parse_pin, ProviderArgs};
use crate::formatters;
use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::*;
use lintdoc_ai::{
    suggest_config_emojis, AiFailureMode, AiOptions, EmojiOutcome, EmojiRequest, EnvSource,
    ProcessEnv,
};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Args, Debug, Clone, Default)]
pub struct EmojiArgs {
    /// Config names
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// TOML file with `configs` and `[emoji]` pins
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Fix a config's emoji (can be specified multiple times)
    #[arg(long = "pin", value_name = "NAME=EMOJI", value_parser = parse_pin)]
    pub pins: Vec<(String, String)>,

    /// Ask an AI provider to improve the local suggestions
    #[arg(long)]
    pub ai: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,

    /// Fail instead of falling back to local suggestions when the AI request fails
    #[arg(long, requires = "ai")]
    pub strict_ai: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "tuples")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `['name', 'emoji'],` lines for generator options
    #[default]
    Tuples,
    /// Aligned two-column table
    Table,
    /// JSON document
    Json,
}

impl EmojiArgs {
    /// Combine command line and settings file into a pipeline request
    ///
    /// Command-line pins override pins from the settings file.
    pub fn to_request(&self) -> Result<EmojiRequest> {
        let settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut names = settings.configs;
        names.extend(self.names.iter().cloned());

        let mut pinned = settings.emoji;
        for (name, emoji) in &self.pins {
            pinned.insert(name.clone(), emoji.clone());
        }

        let ai = self.ai.then(|| AiOptions {
            provider: self.provider.provider.clone(),
            model: self.provider.model.clone(),
            endpoint: self.provider.endpoint.clone(),
            timeout: self.provider.timeout(),
            failure_mode: if self.strict_ai {
                AiFailureMode::Fail
            } else {
                AiFailureMode::Warn
            },
        });

        Ok(EmojiRequest { names, pinned, ai })
    }
}

/// Run the suggestion pipeline for `args`
pub async fn run_emoji(args: &EmojiArgs, env: &dyn EnvSource) -> Result<EmojiOutcome> {
    let request = args.to_request()?;
    tracing::debug!(
        names = request.names.len(),
        pinned = request.pinned.len(),
        ai = request.ai.is_some(),
        "Suggesting config emojis"
    );
    suggest_config_emojis(&request, env)
        .await
        .context("Failed to suggest config emojis")
}

pub fn handle_emoji_command(args: EmojiArgs) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let outcome = runtime.block_on(run_emoji(&args, &ProcessEnv))?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    let rendered = match args.format {
        OutputFormat::Tuples => formatters::tuples::render(&outcome),
        OutputFormat::Table => formatters::table::render(&outcome),
        OutputFormat::Json => formatters::json::render(&outcome)?,
    };
    println!("{rendered}");
    Ok(())
}
