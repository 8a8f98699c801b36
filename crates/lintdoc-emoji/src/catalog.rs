//! Static emoji tables and dictionary search
//!
//! All tables are immutable process-wide data. Lookups are linear over small
//! slices; the broad dictionary comes from the `emojis` crate.

/// Emojis the documentation generator already uses for other badges
///
/// A config suggestion must never collide with one of these, otherwise the
/// rules table becomes ambiguous. The bare `⚠` (no variation selector) is
/// intentionally absent: only the fully-qualified `⚠️` marks "warn".
pub const RESERVED_EMOJIS: &[&str] = &[
    "💼", // config severity header
    "⚠️", // set to warn
    "🚫", // set to off
    "🔧", // fixable
    "💡", // has suggestions
    "💭", // requires type checking
    "❌", // deprecated
    "⚙️", // has options
    "❗", // rule type: problem
    "📖", // rule type: suggestion
    "📏", // rule type: layout
];

/// Well-known config names and the badge conventionally used for them
pub const DEFAULT_CONFIG_EMOJIS: &[(&str, &str)] = &[
    ("a11y", "♿"),
    ("accessibility", "♿"),
    ("all", "🌐"),
    ("errors", "🛑"),
    ("jsx-runtime", "🏃"),
    ("legacy", "🏛️"),
    ("performance", "⚡"),
    ("react", "⚛️"),
    ("recommended", "✅"),
    ("security", "🛡️"),
    ("strict", "🔒"),
    ("style", "🎨"),
    ("stylistic", "🎨"),
    ("typescript", "⌨️"),
    ("warnings", "🚸"),
];

/// Single-word keywords that commonly appear inside config names
pub const KEYWORD_EMOJIS: &[(&str, &str)] = &[
    ("a11y", "♿"),
    ("accessibility", "♿"),
    ("all", "🌐"),
    ("angular", "🅰️"),
    ("async", "⏳"),
    ("base", "🏠"),
    ("browser", "🌍"),
    ("core", "🧩"),
    ("css", "🖌️"),
    ("doc", "📝"),
    ("docs", "📝"),
    ("documentation", "📝"),
    ("error", "🛑"),
    ("errors", "🛑"),
    ("experimental", "🧫"),
    ("graphql", "🕸️"),
    ("html", "🧱"),
    ("import", "📦"),
    ("imports", "📦"),
    ("jest", "🃏"),
    ("json", "🗂️"),
    ("jsx", "⚛️"),
    ("legacy", "🏛️"),
    ("markdown", "📝"),
    ("mobile", "📱"),
    ("modern", "✨"),
    ("module", "📦"),
    ("modules", "📦"),
    ("node", "🖥️"),
    ("off", "💤"),
    ("perf", "⚡"),
    ("performance", "⚡"),
    ("promise", "🤞"),
    ("promises", "🤞"),
    ("react", "⚛️"),
    ("recommended", "✅"),
    ("regex", "🔣"),
    ("regexp", "🔣"),
    ("security", "🛡️"),
    ("server", "🗄️"),
    ("spec", "🧪"),
    ("strict", "🔒"),
    ("style", "🎨"),
    ("stylistic", "🎨"),
    ("svelte", "🧡"),
    ("test", "🧪"),
    ("testing", "🧪"),
    ("tests", "🧪"),
    ("ts", "⌨️"),
    ("typescript", "⌨️"),
    ("unicode", "🔡"),
    ("vitest", "🧪"),
    ("vue", "💚"),
    ("warn", "🚸"),
    ("warning", "🚸"),
    ("warnings", "🚸"),
];

/// Ordered fallback glyphs: colored circles, then colored squares
pub const FALLBACK_PALETTE: &[&str] = &[
    "🔴", "🟠", "🟡", "🟢", "🔵", "🟣", "🟤", "⚫", "⚪", "🟥", "🟧", "🟨", "🟩", "🟦", "🟪",
    "🟫", "⬛", "⬜",
];

/// Shortest term handed to the dictionary search
pub const MIN_SEARCH_TERM_LEN: usize = 3;

/// Whether `emoji` is one of the reserved badge emojis
pub fn is_reserved(emoji: &str) -> bool {
    RESERVED_EMOJIS.contains(&emoji)
}

/// Exact lookup of an already lowercased config name
pub fn default_config_emoji(name: &str) -> Option<&'static str> {
    lookup(DEFAULT_CONFIG_EMOJIS, name)
}

/// Lookup of a single lowercased token
pub fn keyword_emoji(token: &str) -> Option<&'static str> {
    lookup(KEYWORD_EMOJIS, token)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, emoji)| *emoji)
}

/// Fuzzy search of the emoji dictionary
///
/// Hits are ranked from most to least specific:
/// 1. exact shortcode (`rocket`)
/// 2. shortcode prefix (`rock` -> `rocket`)
/// 3. shortcode substring
/// 4. substring of the emoji's English name
///
/// Within a rank, dictionary order decides. Terms shorter than
/// [`MIN_SEARCH_TERM_LEN`] or made only of digits return nothing, since they
/// match far too broadly (`1` would hit `1st_place_medal`).
pub fn search(term: &str) -> Vec<&'static str> {
    let needle = search_key(term);
    if needle.chars().count() < MIN_SEARCH_TERM_LEN
        || !needle.chars().any(|c| c.is_alphanumeric())
        || needle.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return Vec::new();
    }

    let mut hits = Vec::new();
    if let Some(emoji) = emojis::get_by_shortcode(&needle) {
        push_unique(&mut hits, emoji.as_str());
    }
    for emoji in emojis::iter() {
        if emoji.shortcodes().any(|code| code.starts_with(needle.as_str())) {
            push_unique(&mut hits, emoji.as_str());
        }
    }
    for emoji in emojis::iter() {
        if emoji.shortcodes().any(|code| code.contains(needle.as_str())) {
            push_unique(&mut hits, emoji.as_str());
        }
    }
    let spaced = needle.replace('_', " ");
    for emoji in emojis::iter() {
        if emoji.name().to_lowercase().contains(&spaced) {
            push_unique(&mut hits, emoji.as_str());
        }
    }
    hits
}

/// Shortcode-style key: lowercase, spaces and hyphens become underscores
fn search_key(term: &str) -> String {
    term.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn push_unique(hits: &mut Vec<&'static str>, emoji: &'static str) {
    if !hits.contains(&emoji) {
        hits.push(emoji);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_eighteen_distinct_entries() {
        let unique: HashSet<_> = FALLBACK_PALETTE.iter().collect();
        assert_eq!(FALLBACK_PALETTE.len(), 18);
        assert_eq!(unique.len(), 18);
    }

    #[test]
    fn test_tables_never_suggest_reserved() {
        for (_, emoji) in DEFAULT_CONFIG_EMOJIS.iter().chain(KEYWORD_EMOJIS) {
            assert!(!is_reserved(emoji), "{emoji} is reserved");
        }
        for emoji in FALLBACK_PALETTE {
            assert!(!is_reserved(emoji), "{emoji} is reserved");
        }
    }

    #[test]
    fn test_bare_warning_sign_is_not_reserved() {
        assert!(is_reserved("⚠️"));
        assert!(!is_reserved("⚠"));
    }

    #[test]
    fn test_default_config_lookup() {
        assert_eq!(default_config_emoji("recommended"), Some("✅"));
        assert_eq!(default_config_emoji("Recommended"), None);
        assert_eq!(default_config_emoji("unknown"), None);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_emoji("react"), Some("⚛️"));
        assert_eq!(keyword_emoji("testing"), Some("🧪"));
        assert_eq!(keyword_emoji("typescript"), Some("⌨️"));
        assert_eq!(keyword_emoji("zzz-nothing"), None);
    }

    #[test]
    fn test_search_exact_shortcode_ranks_first() {
        let hits = search("rocket");
        assert_eq!(hits.first(), Some(&"🚀"));
    }

    #[test]
    fn test_search_skips_short_and_numeric_terms() {
        assert!(search("1").is_empty());
        assert!(search("ab").is_empty());
        assert!(search("2015").is_empty());
        assert!(search("---").is_empty());
    }

    #[test]
    fn test_search_unknown_term() {
        assert!(search("qzxqzx").is_empty());
    }

    #[test]
    fn test_search_has_no_duplicates() {
        let hits = search("heart");
        let unique: HashSet<_> = hits.iter().collect();
        assert_eq!(unique.len(), hits.len());
    }
}
