//! Local suggestion engine
//!
//! Picks one emoji for a config name without any network access. The cascade
//! goes from most to least specific and the last step always produces a value:
//!
//! 1. exact config name in [`DEFAULT_CONFIG_EMOJIS`](crate::catalog::DEFAULT_CONFIG_EMOJIS)
//! 2. each token in [`KEYWORD_EMOJIS`](crate::catalog::KEYWORD_EMOJIS)
//! 3. dictionary search for the full name, then for each token
//! 4. first unused entry of the fallback palette

use crate::assignments::UsedEmojis;
use crate::catalog::{self, FALLBACK_PALETTE};
use crate::tokenize::tokenize;
use std::iter;

/// Which cascade step produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    /// Exact match on a well-known config name
    DefaultConfig,
    /// Keyword match on one of the name's tokens
    Keyword,
    /// Emoji dictionary search
    Search,
    /// Unused palette entry
    Palette,
    /// Palette fully used; first entry reused
    PaletteExhausted,
}

/// One suggested emoji and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// The emoji
    pub emoji: &'static str,
    /// Cascade step that produced it
    pub source: SuggestionSource,
}

impl Suggestion {
    fn new(emoji: &'static str, source: SuggestionSource) -> Self {
        Self { emoji, source }
    }
}

/// Suggest an emoji for `name` given the emojis already in use
///
/// Never fails. The result is never reserved and, until the palette runs
/// out, never already in `used`.
pub fn suggest_emoji(name: &str, used: &UsedEmojis) -> Suggestion {
    let acceptable = |emoji: &str| !catalog::is_reserved(emoji) && !used.contains(emoji);
    let lowered = name.trim().to_lowercase();

    if let Some(emoji) = catalog::default_config_emoji(&lowered).filter(|e| acceptable(e)) {
        return Suggestion::new(emoji, SuggestionSource::DefaultConfig);
    }

    let tokens = tokenize(name);
    if let Some(emoji) = tokens
        .iter()
        .filter_map(|token| catalog::keyword_emoji(token))
        .find(|e| acceptable(e))
    {
        return Suggestion::new(emoji, SuggestionSource::Keyword);
    }

    let terms = iter::once(lowered.as_str()).chain(tokens.iter().map(String::as_str));
    for term in terms {
        if let Some(emoji) = catalog::search(term).into_iter().find(|e| acceptable(e)) {
            return Suggestion::new(emoji, SuggestionSource::Search);
        }
    }

    match FALLBACK_PALETTE.iter().copied().find(|e| acceptable(e)) {
        Some(emoji) => Suggestion::new(emoji, SuggestionSource::Palette),
        None => Suggestion::new(FALLBACK_PALETTE[0], SuggestionSource::PaletteExhausted),
    }
}
