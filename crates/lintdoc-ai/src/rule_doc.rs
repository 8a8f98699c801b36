//! AI rewriting of rule documentation

use crate::client::AiClient;
use crate::error::{Error, Result};
use crate::provider::ProviderConfig;
use crate::reply::strip_code_fence;

/// Markers the documentation generator owns; a rewrite must keep them
pub const GENERATED_MARKERS: &[&str] = &[
    "<!-- end auto-generated rule header -->",
    "<!-- begin auto-generated rule options list -->",
    "<!-- end auto-generated rule options list -->",
];

const SYSTEM_PROMPT: &str = "You are a technical writer improving the documentation page of an ESLint rule. \
Keep the Markdown structure, headings and code examples valid. \
Explain what the rule reports and why, and show incorrect and correct examples. \
Keep every HTML comment marker exactly as it appears and do not edit the text generated between paired markers. \
Reply with the complete Markdown document only, without commentary or a surrounding code fence.";

/// A documentation page to improve
#[derive(Debug, Clone, Copy)]
pub struct RuleDocRequest<'a> {
    /// Rule name, without plugin prefix
    pub rule_name: &'a str,
    /// `meta.docs.description` of the rule
    pub description: Option<&'a str>,
    /// Current Markdown
    pub markdown: &'a str,
}

/// User prompt for `request`
pub fn build_rule_doc_prompt(request: &RuleDocRequest<'_>) -> String {
    let mut prompt = format!("Rule: {}\n", request.rule_name);
    if let Some(description) = request.description {
        prompt.push_str(&format!("Description: {description}\n"));
    }
    prompt.push_str("\nCurrent documentation:\n\n");
    prompt.push_str(request.markdown);
    prompt
}

/// Ask the model for an improved version of a rule's documentation
///
/// # Errors
///
/// Transport errors from [`AiClient::request_text`],
/// [`Error::MissingContent`] when the reply is an empty code fence, and
/// [`Error::MalformedResponse`] when the reply drops a generated marker that
/// the original contained.
pub async fn enhance_rule_doc(
    client: &AiClient,
    config: &ProviderConfig,
    request: &RuleDocRequest<'_>,
) -> Result<String> {
    let prompt = build_rule_doc_prompt(request);
    let reply = client.request_text(config, Some(SYSTEM_PROMPT), &prompt).await?;
    let markdown = strip_code_fence(&reply);
    if markdown.is_empty() {
        return Err(Error::MissingContent {
            provider: config.display_name.to_string(),
        });
    }

    if let Some(marker) = GENERATED_MARKERS
        .iter()
        .find(|marker| request.markdown.contains(*marker) && !markdown.contains(*marker))
    {
        return Err(Error::MalformedResponse {
            provider: config.display_name.to_string(),
            message: format!("rewritten documentation dropped the marker `{marker}`"),
        });
    }

    tracing::debug!(rule = request.rule_name, bytes = markdown.len(), "Enhanced rule documentation");
    Ok(format!("{markdown}\n"))
}
