//! Aligned two-column table.

use colored::*;
use lintdoc_ai::EmojiOutcome;

pub fn render(outcome: &EmojiOutcome) -> String {
    let width = outcome
        .assignments
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once("CONFIG".len()))
        .max()
        .unwrap_or_default();

    let mut lines = vec![format!("{:<width$}  {}", "CONFIG", "EMOJI").bold().to_string()];
    for (name, emoji) in &outcome.assignments {
        lines.push(format!("{name:<width$}  {emoji}"));
    }

    let mut summary = format!("{} configs", outcome.assignments.len());
    if let Some(provider) = &outcome.provider {
        summary.push_str(&format!(", {} AI suggestions from {provider}", outcome.ai_applied));
    }
    lines.push(String::new());
    lines.push(summary.bright_black().to_string());
    lines.join("\n")
}
