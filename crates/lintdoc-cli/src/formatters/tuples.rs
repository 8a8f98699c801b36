//! `['name', 'emoji'],` lines, ready to paste into generator options.

use lintdoc_ai::EmojiOutcome;

pub fn render(outcome: &EmojiOutcome) -> String {
    outcome
        .assignments
        .iter()
        .map(|(name, emoji)| format!("['{}', '{}'],", quote(name), quote(emoji)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::sample_outcome;

    #[test]
    fn test_render_tuples() {
        assert_eq!(
            render(&sample_outcome()),
            "['react-hooks', '⚛️'],\n['recommended', '✅'],\n['strict', '🔒'],"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let mut outcome = sample_outcome();
        outcome.assignments = vec![("it's".to_string(), "🔴".to_string())];
        assert_eq!(render(&outcome), r"['it\'s', '🔴'],");
    }
}
