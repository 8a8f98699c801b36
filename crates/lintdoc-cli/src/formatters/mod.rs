//! Output formatters for emoji suggestions.

pub mod json;
pub mod table;
pub mod tuples;

#[cfg(test)]
pub(crate) fn sample_outcome() -> lintdoc_ai::EmojiOutcome {
    lintdoc_ai::EmojiOutcome {
        assignments: vec![
            ("react-hooks".to_string(), "⚛️".to_string()),
            ("recommended".to_string(), "✅".to_string()),
            ("strict".to_string(), "🔒".to_string()),
        ],
        generated: vec!["react-hooks".to_string(), "recommended".to_string()],
        ai_applied: 1,
        provider: Some("openai".to_string()),
        diagnostics: vec!["OpenAI request timed out".to_string()],
    }
}
