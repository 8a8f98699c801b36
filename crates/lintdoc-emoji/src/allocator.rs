//! Uniqueness allocator

use crate::assignments::{display_order, EmojiAssignments};
use crate::error::{Error, Result};
use crate::suggest::{suggest_emoji, SuggestionSource};
use std::collections::{BTreeMap, BTreeSet};

/// Assign an emoji to every config name
///
/// Pinned entries are seeded first and never touched by the local engine.
/// Every other name is resolved in ascending case-insensitive order against
/// the emojis used so far, so the result depends only on the inputs.
/// Pins for names outside `names` are ignored.
///
/// # Errors
///
/// Returns [`Error::NoConfigNames`] when `names` is empty and
/// [`Error::EmptyPinnedEmoji`] when a pin has a blank emoji.
pub fn allocate(names: &[String], pinned: &BTreeMap<String, String>) -> Result<EmojiAssignments> {
    if names.is_empty() {
        return Err(Error::NoConfigNames);
    }

    let names: BTreeSet<&str> = names.iter().map(String::as_str).collect();
    let mut assignments = EmojiAssignments::new();

    for (name, emoji) in pinned {
        if !names.contains(name.as_str()) {
            tracing::warn!(config = %name, "Ignoring pinned emoji for unknown config");
            continue;
        }
        let emoji = emoji.trim();
        if emoji.is_empty() {
            return Err(Error::EmptyPinnedEmoji { name: name.clone() });
        }
        assignments.pin(name, emoji);
    }

    let mut remaining: Vec<&str> = names
        .into_iter()
        .filter(|name| !assignments.is_pinned(name))
        .collect();
    remaining.sort_by(|a, b| display_order(a, b));

    for name in remaining {
        let suggestion = suggest_emoji(name, assignments.used());
        if suggestion.source == SuggestionSource::PaletteExhausted {
            tracing::debug!(config = %name, emoji = suggestion.emoji, "Fallback palette exhausted, reusing first entry");
        } else {
            tracing::debug!(config = %name, emoji = suggestion.emoji, source = ?suggestion.source, "Suggested emoji");
        }
        assignments.insert_generated(name, suggestion.emoji);
    }

    Ok(assignments)
}
