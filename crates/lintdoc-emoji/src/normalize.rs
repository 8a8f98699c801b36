//! Normalization of free-form emoji candidates from model replies

const QUOTES: &[char] = &['"', '\'', '`', '“', '”', '‘', '’'];

/// Turn a model-provided value into an emoji, if possible
///
/// Accepted shapes, tried in order:
/// - `:alias:` shortcodes (`:rocket:`)
/// - bare shortcodes or English names (`rocket`, `Brain`)
/// - any whitespace-separated part containing a pictographic code point
///   (`"🧠 for thinking"`)
/// - symbol-only strings with no letters or digits, kept verbatim
///
/// Literal emojis are returned exactly as written, never re-qualified.
pub fn normalize_emoji_candidate(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches(QUOTES).trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(alias) = trimmed.strip_prefix(':').and_then(|s| s.strip_suffix(':')) {
        if let Some(emoji) = emojis::get_by_shortcode(&alias.to_lowercase()) {
            return Some(emoji.as_str().to_string());
        }
    }

    if let Some(emoji) = lookup_by_name(trimmed) {
        return Some(emoji.to_string());
    }

    for part in trimmed.split_whitespace() {
        if part.chars().any(is_pictographic) {
            let part = trim_wrapping(part);
            if !part.is_empty() {
                return Some(part.to_string());
            }
        }
    }

    if !trimmed.chars().any(char::is_alphanumeric) {
        return Some(trimmed.to_string());
    }

    None
}

/// Strip punctuation and quotes around an emoji, keeping keycap bases (`#️⃣`, `*️⃣`)
fn trim_wrapping(part: &str) -> &str {
    let is_noise = |c: char| c.is_ascii_punctuation() || QUOTES.contains(&c);
    let mut rest = part.trim_end_matches(is_noise);
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        let tail = chars.as_str();
        if !is_noise(c) || tail.starts_with(|next: char| next == '\u{FE0F}' || next == '\u{20E3}') {
            break;
        }
        rest = tail;
    }
    rest
}

fn lookup_by_name(value: &str) -> Option<&'static str> {
    let key: String = value
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    if let Some(emoji) = emojis::get_by_shortcode(&key) {
        return Some(emoji.as_str());
    }
    emojis::iter()
        .find(|emoji| emoji.name().eq_ignore_ascii_case(value))
        .map(|emoji| emoji.as_str())
}

/// Whether `c` is an emoji-ish code point
///
/// Covers the pictographic blocks plus the scattered symbols with emoji
/// presentation, and the variation selector / joiner that only appear inside
/// emoji sequences.
pub fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF
            | 0x2600..=0x27BF
            | 0x2300..=0x23FF
            | 0x2B00..=0x2BFF
            | 0x2190..=0x21FF
            | 0x25A0..=0x25FF
            | 0xFE0F
            | 0x200D
            | 0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x24C2
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_emoji() {
        assert_eq!(normalize_emoji_candidate("🧠").as_deref(), Some("🧠"));
        assert_eq!(normalize_emoji_candidate(" \"🧠\" ").as_deref(), Some("🧠"));
    }

    #[test]
    fn test_alias() {
        assert_eq!(normalize_emoji_candidate(":rocket:").as_deref(), Some("🚀"));
        assert_eq!(normalize_emoji_candidate("':ROCKET:'").as_deref(), Some("🚀"));
    }

    #[test]
    fn test_bare_shortcode() {
        assert_eq!(normalize_emoji_candidate("rocket").as_deref(), Some("🚀"));
    }

    #[test]
    fn test_emoji_inside_sentence() {
        assert_eq!(
            normalize_emoji_candidate("I suggest 🧠, because it thinks").as_deref(),
            Some("🧠")
        );
    }

    #[test]
    fn test_keycap_base_survives_trimming() {
        assert_eq!(normalize_emoji_candidate("#️⃣").as_deref(), Some("#️⃣"));
        assert_eq!(normalize_emoji_candidate("*️⃣,").as_deref(), Some("*️⃣"));
        assert_eq!(normalize_emoji_candidate("(#️⃣)").as_deref(), Some("#️⃣"));
        assert_eq!(normalize_emoji_candidate("**🧠**").as_deref(), Some("🧠"));
    }

    #[test]
    fn test_unreserved_symbol_kept_verbatim() {
        assert_eq!(normalize_emoji_candidate("⚠").as_deref(), Some("⚠"));
        assert_eq!(normalize_emoji_candidate("→").as_deref(), Some("→"));
    }

    #[test]
    fn test_unnormalizable_text() {
        assert_eq!(normalize_emoji_candidate("definitely not an emoji"), None);
        assert_eq!(normalize_emoji_candidate(":not_a_real_alias:"), None);
        assert_eq!(normalize_emoji_candidate(""), None);
        assert_eq!(normalize_emoji_candidate("\"\""), None);
    }

    #[test]
    fn test_is_pictographic() {
        assert!(is_pictographic('🧠'));
        assert!(is_pictographic('⚠'));
        assert!(!is_pictographic('a'));
        assert!(!is_pictographic('1'));
    }
}
