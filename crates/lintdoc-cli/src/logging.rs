//! Logging setup for the lintdoc CLI.
//!
//! Logs go to stderr so they never mix with rendered output. `RUST_LOG`
//! overrides the `-v` count when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: &[&str] = &["lintdoc_cli", "lintdoc_ai", "lintdoc_emoji"];

/// Filter directive for a `-v` count
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace for lintdoc crates; other
/// crates stay at warn.
pub fn filter_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    std::iter::once("warn".to_string())
        .chain(CRATES.iter().map(|krate| format!("{krate}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
