//! Command-line parsing and local runs

use clap::Parser;
use lintdoc_cli::commands::{emoji::run_emoji, enhance_doc::run_enhance_doc, OutputFormat};
use lintdoc_cli::{Cli, Command};
use std::io::Write;
use std::time::Duration;

fn emoji_args(argv: &[&str]) -> lintdoc_cli::commands::EmojiArgs {
    let cli = Cli::try_parse_from(argv).unwrap();
    match cli.command {
        Command::Emoji(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_emoji_command() {
    let args = emoji_args(&[
        "lintdoc", "-vv", "emoji", "recommended", "strict", "--pin", "strict=🔒", "--ai",
        "--provider", "groq", "--ai-timeout", "5", "--strict-ai", "--format", "json",
    ]);

    assert_eq!(args.names, vec!["recommended", "strict"]);
    assert_eq!(args.pins, vec![("strict".to_string(), "🔒".to_string())]);
    assert!(args.ai && args.strict_ai);
    assert_eq!(args.provider.provider.as_deref(), Some("groq"));
    assert_eq!(args.provider.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_verbose_is_counted() {
    let cli = Cli::try_parse_from(["lintdoc", "emoji", "a", "-vvv"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn test_invalid_arguments() {
    assert!(Cli::try_parse_from(["lintdoc", "emoji", "--pin", "strict"]).is_err());
    assert!(Cli::try_parse_from(["lintdoc", "emoji", "a", "--strict-ai"]).is_err());
    assert!(Cli::try_parse_from(["lintdoc", "emoji", "a", "--ai", "--ai-timeout", "0"]).is_err());
    assert!(Cli::try_parse_from(["lintdoc", "emoji", "a", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["lintdoc", "enhance-doc", "no-foo"]).is_err());
}

#[test]
fn test_request_merges_settings_and_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "configs = [\"recommended\", \"strict\"]\n\n[emoji]\nstrict = \"🛡️\"\nrecommended = \"👍\"\n"
    )
    .unwrap();
    let settings = file.path().to_str().unwrap();

    let args = emoji_args(&["lintdoc", "emoji", "react", "--settings", settings, "--pin", "strict=🔒"]);
    let request = args.to_request().unwrap();

    assert_eq!(request.names, vec!["recommended", "strict", "react"]);
    assert_eq!(request.pinned.get("strict").map(String::as_str), Some("🔒"));
    assert_eq!(request.pinned.get("recommended").map(String::as_str), Some("👍"));
    assert!(request.ai.is_none());
}

#[test]
fn test_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let args = emoji_args(&["lintdoc", "emoji", "--settings", path.to_str().unwrap()]);

    let err = args.to_request().unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read settings file"));
}

#[tokio::test]
async fn test_local_run() {
    let args = emoji_args(&["lintdoc", "emoji", "recommended", "strict", "zzqqxx"]);
    let env: [(&str, &str); 0] = [];

    let outcome = run_emoji(&args, &env).await.unwrap();

    assert_eq!(outcome.get("recommended"), Some("✅"));
    assert_eq!(outcome.get("strict"), Some("🔒"));
    assert_eq!(outcome.assignments.len(), 3);
    assert!(outcome.diagnostics.is_empty());
}

#[tokio::test]
async fn test_no_names_is_an_error() {
    let args = emoji_args(&["lintdoc", "emoji"]);
    let env: [(&str, &str); 0] = [];
    assert!(run_emoji(&args, &env).await.is_err());
}

#[tokio::test]
async fn test_ai_without_keys_is_an_error() {
    let args = emoji_args(&["lintdoc", "emoji", "zzqqxx", "--ai"]);
    let env: [(&str, &str); 0] = [];

    let err = run_emoji(&args, &env).await.unwrap_err();
    assert!(format!("{err:#}").contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_enhance_doc_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-foo.md");
    let cli = Cli::try_parse_from(["lintdoc", "enhance-doc", "no-foo", "--file", path.to_str().unwrap()]).unwrap();
    let Command::EnhanceDoc(args) = cli.command else {
        panic!("expected enhance-doc");
    };

    let env = [("OPENAI_API_KEY", "k")];
    let err = run_enhance_doc(&args, &env).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read"));
}
