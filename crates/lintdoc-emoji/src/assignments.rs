//! Assignment map and used-emoji bookkeeping

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Multiset of emojis currently present in an assignment map
///
/// Counts are kept because palette exhaustion (and caller pins) can place the
/// same emoji on more than one config; releasing one of them must not free
/// the emoji for the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedEmojis {
    counts: HashMap<String, usize>,
}

impl UsedEmojis {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any config currently uses `emoji`
    pub fn contains(&self, emoji: &str) -> bool {
        self.counts.contains_key(emoji)
    }

    /// Record one more use of `emoji`
    pub fn insert(&mut self, emoji: &str) {
        *self.counts.entry(emoji.to_string()).or_insert(0) += 1;
    }

    /// Release one use of `emoji`
    pub fn release(&mut self, emoji: &str) {
        if let Some(count) = self.counts.get_mut(emoji) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(emoji);
            }
        }
    }

    /// Number of distinct emojis in use
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing is in use
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for UsedEmojis {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut used = Self::new();
        for emoji in iter {
            used.insert(emoji);
        }
        used
    }
}

/// Display order for config names: case-insensitive, ties broken by the raw name
pub fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Config name to emoji map for one run
///
/// Pinned entries come from the caller; generated entries come from the local
/// suggestion engine. The generated names are exactly the set later offered to
/// the AI pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiAssignments {
    entries: BTreeMap<String, String>,
    used: UsedEmojis,
    pinned: BTreeSet<String>,
    generated: Vec<String>,
}

impl EmojiAssignments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pin(&mut self, name: &str, emoji: &str) {
        self.insert(name, emoji);
        self.pinned.insert(name.to_string());
    }

    pub(crate) fn insert_generated(&mut self, name: &str, emoji: &str) {
        self.insert(name, emoji);
        self.generated.push(name.to_string());
    }

    fn insert(&mut self, name: &str, emoji: &str) {
        if let Some(previous) = self.entries.insert(name.to_string(), emoji.to_string()) {
            self.used.release(&previous);
        }
        self.used.insert(emoji);
    }

    /// Swap the emoji of an existing entry, keeping the used set in step
    ///
    /// Returns the previous emoji, or `None` (and changes nothing) if `name`
    /// has no entry.
    pub(crate) fn replace(&mut self, name: &str, emoji: &str) -> Option<String> {
        let slot = self.entries.get_mut(name)?;
        let previous = std::mem::replace(slot, emoji.to_string());
        self.used.release(&previous);
        self.used.insert(emoji);
        Some(previous)
    }

    /// Emoji assigned to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Emojis currently in use
    pub fn used(&self) -> &UsedEmojis {
        &self.used
    }

    /// Whether `name` was pinned by the caller
    pub fn is_pinned(&self, name: &str) -> bool {
        self.pinned.contains(name)
    }

    /// Names resolved by the local engine, in processing order
    pub fn generated_names(&self) -> &[String] {
        &self.generated
    }

    /// Number of configs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no configs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(name, emoji)| (name.as_str(), emoji.as_str()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| display_order(a, b));
        entries
    }

    /// Owned entries in display order
    pub fn into_sorted_vec(self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self.entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| display_order(a, b));
        entries
    }
}
