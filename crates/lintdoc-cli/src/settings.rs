//! Input settings file.
//!
//! ```toml
//! configs = ["recommended", "strict"]
//!
//! [emoji]
//! recommended = "✅"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Config names of the plugin
    #[serde(default)]
    pub configs: Vec<String>,

    /// Pinned emojis by config name
    #[serde(default)]
    pub emoji: BTreeMap<String, String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
