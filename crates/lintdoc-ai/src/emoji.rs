//! Config emoji suggestion pipeline
//!
//! ```text
//! seed pinned -> generate local -> [resolve provider -> request -> merge] -> emit
//! ```
//!
//! Configuration problems always abort. What happens when the request itself
//! fails is governed by [`AiFailureMode`]; an unusable reply never aborts.

use crate::client::{AiClient, DEFAULT_TIMEOUT};
use crate::env::EnvSource;
use crate::error::Result;
use crate::provider::{resolve_provider, ProviderConfig};
use lintdoc_emoji::{allocate, apply_ai_suggestions, build_emoji_prompt, EmojiAssignments};
use std::collections::BTreeMap;
use std::time::Duration;

/// What to do when the AI request fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiFailureMode {
    /// Keep the local suggestions and report a diagnostic
    #[default]
    Warn,
    /// Abort the run with the transport error
    Fail,
}

/// Settings for the optional AI pass
#[derive(Debug, Clone, Default)]
pub struct AiOptions {
    /// Provider id; auto-detected from the environment when absent
    pub provider: Option<String>,
    /// Model id; provider default when absent
    pub model: Option<String>,
    /// Endpoint override
    pub endpoint: Option<String>,
    /// Request timeout (30 seconds when absent)
    pub timeout: Option<Duration>,
    /// Behavior on transport failure
    pub failure_mode: AiFailureMode,
}

/// Input for one suggestion run
#[derive(Debug, Clone, Default)]
pub struct EmojiRequest {
    /// Every config name of the plugin
    pub names: Vec<String>,
    /// Emojis the caller already fixed
    pub pinned: BTreeMap<String, String>,
    /// AI enhancement, if wanted
    pub ai: Option<AiOptions>,
}

/// Result of one suggestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiOutcome {
    /// `(config, emoji)` in display order
    pub assignments: Vec<(String, String)>,
    /// Names the local engine resolved (the AI candidate set)
    pub generated: Vec<String>,
    /// Number of AI suggestions accepted
    pub ai_applied: usize,
    /// Provider id used for the AI pass
    pub provider: Option<String>,
    /// Non-fatal problems worth showing the user
    pub diagnostics: Vec<String>,
}

impl EmojiOutcome {
    fn from_assignments(assignments: EmojiAssignments) -> Self {
        let generated = assignments.generated_names().to_vec();
        Self {
            assignments: assignments.into_sorted_vec(),
            generated,
            ai_applied: 0,
            provider: None,
            diagnostics: Vec::new(),
        }
    }

    /// Emoji assigned to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(config, _)| config == name)
            .map(|(_, emoji)| emoji.as_str())
    }
}

/// Suggest an emoji for every config in `request`
///
/// # Errors
///
/// - empty name list or blank pin ([`crate::Error::Emoji`])
/// - provider resolution errors, whenever AI is enabled
/// - transport errors, only with [`AiFailureMode::Fail`]
pub async fn suggest_config_emojis(request: &EmojiRequest, env: &dyn EnvSource) -> Result<EmojiOutcome> {
    let mut assignments = allocate(&request.names, &request.pinned)?;

    let Some(options) = &request.ai else {
        return Ok(EmojiOutcome::from_assignments(assignments));
    };

    let candidates = assignments.generated_names().to_vec();
    if candidates.is_empty() {
        let mut outcome = EmojiOutcome::from_assignments(assignments);
        outcome
            .diagnostics
            .push("Every config already has an emoji; skipped AI suggestions".to_string());
        return Ok(outcome);
    }

    let mut config = resolve_provider(options.provider.as_deref(), options.model.as_deref(), env)?;
    if let Some(endpoint) = &options.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    let client = AiClient::with_timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT))?;

    let mut diagnostics = Vec::new();
    let mut applied = 0;
    match request_suggestions(&client, &config, &assignments, &candidates).await {
        Ok(reply) => {
            let report = apply_ai_suggestions(&candidates, &reply, &mut assignments);
            tracing::info!(
                provider = config.id,
                accepted = report.applied(),
                rejected = report.rejected,
                "Merged AI emoji suggestions"
            );
            applied = report.applied();
        }
        Err(err) if err.is_malformed_response() => {
            tracing::debug!(error = %err, "Ignoring unusable AI reply");
            diagnostics.push(format!("{err}; using local suggestions"));
        }
        Err(err) if options.failure_mode == AiFailureMode::Fail => return Err(err),
        Err(err) => {
            tracing::debug!(error = %err, "AI emoji suggestions failed");
            diagnostics.push(format!("{err}; using local suggestions"));
        }
    }

    let mut outcome = EmojiOutcome::from_assignments(assignments);
    outcome.ai_applied = applied;
    outcome.provider = Some(config.id.to_string());
    outcome.diagnostics = diagnostics;
    Ok(outcome)
}

async fn request_suggestions(
    client: &AiClient,
    config: &ProviderConfig,
    assignments: &EmojiAssignments,
    candidates: &[String],
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let prompt = build_emoji_prompt(assignments, candidates);
    client
        .request_json_object(config, Some(&prompt.system), &prompt.user)
        .await
}
