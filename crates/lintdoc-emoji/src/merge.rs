//! Folding model suggestions into local assignments

use crate::assignments::EmojiAssignments;
use crate::catalog;
use crate::normalize::normalize_emoji_candidate;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Result of one merge pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Accepted `(config, emoji)` replacements, in application order
    pub accepted: Vec<(String, String)>,
    /// Entries dropped for any reason
    pub rejected: usize,
}

impl MergeReport {
    /// Number of accepted replacements
    pub fn applied(&self) -> usize {
        self.accepted.len()
    }
}

/// Why a model entry was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    UnknownName,
    NotAString,
    Unnormalizable,
    Reserved,
    Unchanged,
    AlreadyUsed,
}

/// Apply model suggestions to the names in `candidates`
///
/// Keys are matched exactly against `candidates`, then case-insensitively
/// (first candidate wins among names differing only by case); anything else in
/// the reply is ignored. Entries are applied in the reply's iteration order,
/// so when two names get the same emoji the first one wins. Malformed entries
/// are dropped silently, never escalated.
pub fn apply_ai_suggestions(
    candidates: &[String],
    suggestions: &Map<String, Value>,
    assignments: &mut EmojiAssignments,
) -> MergeReport {
    let mut by_key: HashMap<String, &str> = HashMap::new();
    for name in candidates {
        by_key.entry(name.to_lowercase()).or_insert(name.as_str());
    }

    let mut report = MergeReport::default();
    for (key, value) in suggestions {
        match merge_entry(candidates, &by_key, key, value, assignments) {
            Ok((name, emoji)) => {
                tracing::debug!(config = %name, emoji = %emoji, "Accepted AI emoji suggestion");
                report.accepted.push((name, emoji));
            }
            Err(reason) => {
                tracing::debug!(key = %key, ?reason, "Skipped AI emoji suggestion");
                report.rejected += 1;
            }
        }
    }
    report
}

fn merge_entry(
    candidates: &[String],
    by_key: &HashMap<String, &str>,
    key: &str,
    value: &Value,
    assignments: &mut EmojiAssignments,
) -> Result<(String, String), Rejection> {
    let key = key.trim();
    let name = candidates
        .iter()
        .map(String::as_str)
        .find(|name| *name == key)
        .or_else(|| by_key.get(&key.to_lowercase()).copied())
        .ok_or(Rejection::UnknownName)?;
    let raw = value.as_str().ok_or(Rejection::NotAString)?;
    let emoji = normalize_emoji_candidate(raw).ok_or(Rejection::Unnormalizable)?;

    if catalog::is_reserved(&emoji) {
        return Err(Rejection::Reserved);
    }
    let current = assignments.get(name).ok_or(Rejection::UnknownName)?;
    if current == emoji {
        return Err(Rejection::Unchanged);
    }
    if assignments.used().contains(&emoji) {
        return Err(Rejection::AlreadyUsed);
    }

    assignments
        .replace(name, &emoji)
        .ok_or(Rejection::UnknownName)?;
    Ok((name.to_string(), emoji))
}
