//! Error types for lintdoc-emoji

use thiserror::Error;

/// Result type alias for lintdoc-emoji operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing emoji assignments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Nothing to assign
    #[error("No config names given: at least one config is required to suggest emojis")]
    NoConfigNames,

    /// A pinned assignment has no emoji
    #[error("Pinned emoji for config '{name}' is empty")]
    EmptyPinnedEmoji {
        /// Config name with the empty pin
        name: String,
    },
}
