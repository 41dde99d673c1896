//! Structured logging setup.
//!
//! Events go to stderr so command output on stdout stays clean. The
//! `RUST_LOG` environment variable overrides the configured level.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Output format: "text" or "json".
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl LogConfig {
    /// Returns the level directive to use, normalised to a value
    /// `EnvFilter` understands. Unknown values fall back to `info`.
    pub fn level_directive(&self) -> &'static str {
        match self.level.to_ascii_lowercase().as_str() {
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" => "error",
            _ => "info",
        }
    }

    pub fn format(&self) -> Format {
        if self.format.eq_ignore_ascii_case("json") {
            Format::Json
        } else {
            Format::Text
        }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// `verbose` forces the `debug` level unless `RUST_LOG` is set.
pub fn init(config: &LogConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.level_directive()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format() {
        Format::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init(),
        Format::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: logging already initialised: {e}");
    }
}
