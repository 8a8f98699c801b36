//! Config name tokenization

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel-case boundary pattern is valid"));

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("separator pattern is valid"));

/// Split a config name into lowercase word tokens
///
/// `reactHooks` and `react-hooks` both yield `["react", "hooks"]`.
/// Punctuation-only input yields no tokens.
pub fn tokenize(name: &str) -> Vec<String> {
    let split = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    let spaced = NON_ALPHANUMERIC.replace_all(&split, " ");
    spaced
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
