//! Environment access for provider credentials

use std::collections::HashMap;

/// Value some templating setups inject for unset variables
const UNDEFINED_SENTINEL: &str = "undefined";

/// Read-only source of environment variables
///
/// Resolution goes through this trait so callers (and tests) can supply a
/// fixed environment instead of the process one.
pub trait EnvSource {
    /// Raw value of `key`, if set
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<String> {
        self.as_slice().var(key)
    }
}

/// Usable credential stored in `key`
///
/// Empty values and the literal string `"undefined"` count as unset.
pub fn read_credential(env: &dyn EnvSource, key: &str) -> Option<String> {
    env.var(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != UNDEFINED_SENTINEL)
}
