//! lintdoc - config emoji and rule documentation assistant for ESLint plugins.

use anyhow::Result;
use clap::Parser;
use lintdoc_cli::{commands, logging, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Emoji(args) => commands::handle_emoji_command(args),
        Command::EnhanceDoc(args) => commands::handle_enhance_doc_command(args),
        Command::Providers => commands::handle_providers_command(),
    }
}
