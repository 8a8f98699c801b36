//! JSON formatter for emoji suggestions.

use anyhow::{Context, Result};
use lintdoc_ai::EmojiOutcome;
use serde_json::{json, Map, Value};

pub fn render(outcome: &EmojiOutcome) -> Result<String> {
    let assignments: Map<String, Value> = outcome
        .assignments
        .iter()
        .map(|(name, emoji)| (name.clone(), Value::String(emoji.clone())))
        .collect();

    let document = json!({
        "assignments": assignments,
        "generated": outcome.generated,
        "aiApplied": outcome.ai_applied,
        "diagnostics": outcome.diagnostics,
    });

    serde_json::to_string_pretty(&document).context("Failed to serialize emoji suggestions")
}
