use anyhow::Result;
use colored::*;
use lintdoc_ai::{read_credential, ProcessEnv, PROVIDERS};

pub fn handle_providers_command() -> Result<()> {
    println!(
        "{}",
        format!("{:<12} {:<20} {}", "PROVIDER", "API KEY", "DEFAULT MODEL").bold()
    );
    for spec in PROVIDERS {
        let configured = read_credential(&ProcessEnv, spec.env_var).is_some();
        let marker = if configured { "✓".green() } else { "✗".bright_black() };
        println!(
            "{:<12} {:<20} {} {}",
            spec.id.cyan(),
            spec.env_var,
            spec.default_model,
            marker
        );
    }
    Ok(())
}
