//! lintdoc CLI library components.
//!
//! The binary lives in `main.rs`; argument definitions, settings loading and
//! output rendering are here so they can be tested.

pub mod commands;
pub mod formatters;
pub mod logging;
pub mod settings;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lintdoc", version)]
#[command(about = "Pick config emojis and improve rule docs for ESLint plugins", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest one emoji per config
    ///
    /// Examples:
    ///   lintdoc emoji recommended strict react-hooks
    ///   lintdoc emoji --settings lintdoc.toml --ai --format json
    Emoji(commands::EmojiArgs),

    /// Rewrite a rule documentation page with an AI provider
    EnhanceDoc(commands::EnhanceDocArgs),

    /// List supported AI providers
    Providers,
}
