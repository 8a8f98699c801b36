//! Emoji badge suggestions for lint plugin configs
//!
//! Given the config names of a plugin (`recommended`, `strict`, ...) and any
//! emojis the caller already pinned, this crate assigns one emoji per config:
//!
//! - [`allocate`]: deterministic local assignment, unique until the fallback
//!   palette runs out, never a reserved badge emoji
//! - [`apply_ai_suggestions`]: folds a model's JSON reply into the assignment
//!   without breaking those guarantees
//! - [`build_emoji_prompt`]: the prompt the AI pass sends
//!
//! # Example
//!
//! ```
//! use lintdoc_emoji::allocate;
//! use std::collections::BTreeMap;
//!
//! let names = vec!["recommended".to_string(), "strict".to_string()];
//! let assignments = allocate(&names, &BTreeMap::new())?;
//!
//! assert_eq!(assignments.get("recommended"), Some("✅"));
//! assert_eq!(assignments.get("strict"), Some("🔒"));
//! # Ok::<(), lintdoc_emoji::Error>(())
//! ```

pub mod allocator;
pub mod assignments;
pub mod catalog;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod prompt;
pub mod suggest;
pub mod tokenize;

pub use allocator::allocate;
pub use assignments::{display_order, EmojiAssignments, UsedEmojis};
pub use catalog::{is_reserved, FALLBACK_PALETTE, RESERVED_EMOJIS};
pub use error::{Error, Result};
pub use merge::{apply_ai_suggestions, MergeReport};
pub use normalize::normalize_emoji_candidate;
pub use prompt::{build_emoji_prompt, EmojiPrompt};
pub use suggest::{suggest_emoji, Suggestion, SuggestionSource};
pub use tokenize::tokenize;
