//! Prompt text for the AI enhancement pass

use crate::assignments::EmojiAssignments;
use crate::catalog::RESERVED_EMOJIS;

/// System and user prompt for one emoji suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPrompt {
    /// Instructions
    pub system: String,
    /// The configs to suggest for
    pub user: String,
}

/// Build the prompt asking a model to improve the local suggestions for `candidates`
///
/// Emojis held by configs outside the candidate set are listed as taken so the
/// model does not waste suggestions on values the merge would reject.
pub fn build_emoji_prompt(assignments: &EmojiAssignments, candidates: &[String]) -> EmojiPrompt {
    let taken: Vec<&str> = assignments
        .sorted()
        .into_iter()
        .filter(|(name, _)| !candidates.iter().any(|c| c == name))
        .map(|(_, emoji)| emoji)
        .collect();

    let mut system = String::from(
        "You pick emoji badges for the configs of an ESLint plugin. \
         Reply with a single JSON object whose keys are exactly the config names you were given \
         and whose values are one emoji each. \
         Choose an emoji that conveys what the config is about, use a different emoji for every config, \
         and do not add any commentary.",
    );
    system.push_str("\nNever use these emojis, they already mean something else: ");
    system.push_str(&RESERVED_EMOJIS.join(" "));
    if !taken.is_empty() {
        system.push_str("\nThese emojis are already taken by other configs: ");
        system.push_str(&taken.join(" "));
    }

    let mut user = String::from("Configs (with the current suggestion):\n");
    for name in candidates {
        match assignments.get(name) {
            Some(emoji) => user.push_str(&format!("- {name}: {emoji}\n")),
            None => user.push_str(&format!("- {name}\n")),
        }
    }

    EmojiPrompt { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate;
    use std::collections::BTreeMap;

    #[test]
    fn test_prompt_lists_candidates_and_taken() {
        let names = vec!["strict".to_string(), "xyzabc".to_string()];
        let pinned = BTreeMap::from([("strict".to_string(), "🔒".to_string())]);
        let assignments = allocate(&names, &pinned).unwrap();
        let candidates = assignments.generated_names().to_vec();

        let prompt = build_emoji_prompt(&assignments, &candidates);

        assert!(prompt.user.contains("- xyzabc: "));
        assert!(!prompt.user.contains("strict"));
        assert!(prompt.system.contains("already taken by other configs: 🔒"));
        assert!(prompt.system.contains("🔧"));
        assert!(prompt.system.contains("JSON object"));
    }
}
