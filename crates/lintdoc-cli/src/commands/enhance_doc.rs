use super::ProviderArgs;
use anyhow::{Context, Result};
use clap::Args;
use lintdoc_ai::{
    enhance_rule_doc, resolve_provider, AiClient, EnvSource, ProcessEnv, RuleDocRequest,
    DEFAULT_TIMEOUT,
};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Args, Debug, Clone)]
pub struct EnhanceDocArgs {
    /// Rule name, without plugin prefix
    #[arg(value_name = "RULE")]
    pub rule: String,

    /// Current documentation page
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Rule description (`meta.docs.description`)
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Rewrite the documentation page named by `args`
pub async fn run_enhance_doc(args: &EnhanceDocArgs, env: &dyn EnvSource) -> Result<String> {
    let markdown = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut config = resolve_provider(args.provider.provider.as_deref(), args.provider.model.as_deref(), env)?;
    if let Some(endpoint) = &args.provider.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    let client = AiClient::with_timeout(args.provider.timeout().unwrap_or(DEFAULT_TIMEOUT))?;

    let request = RuleDocRequest {
        rule_name: &args.rule,
        description: args.description.as_deref(),
        markdown: &markdown,
    };
    enhance_rule_doc(&client, &config, &request)
        .await
        .with_context(|| format!("Failed to enhance documentation for `{}`", args.rule))
}

pub fn handle_enhance_doc_command(args: EnhanceDocArgs) -> Result<()> {
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let markdown = runtime.block_on(run_enhance_doc(&args, &ProcessEnv))?;
    print!("{markdown}");
    Ok(())
}
