//! Structured logging for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise `-v` flags raise the level above the
//! configured `logging.level`. Events go to stderr so stdout stays clean for
//! markup and reports.

use inline_icons_config::LogLevel;
use tracing_subscriber::{fmt, EnvFilter};

const CRATES: &[&str] = &["inline_icons_core", "inline_icons_cli"];

pub fn init(verbosity: u8, configured: LogLevel) {
    let level = match verbosity {
        0 => configured.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES
            .iter()
            .map(|krate| format!("{krate}={level}"))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    // A subscriber may already be installed when embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
