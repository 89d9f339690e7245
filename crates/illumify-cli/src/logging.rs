//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The libraries only emit events; this module installs the subscriber for
//! the `illumify` binary.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: ignored URL templates, unsupported correction methods
//! - `info`: command progress
//! - `debug`: settings loading, template compilation
//! - `trace`: individual parsed and modified colors

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level. Everything else stays
/// at `warn`.
const WORKSPACE_CRATES: [&str; 4] = [
    "illumify_cli",
    "illumify_color",
    "illumify_model",
    "illumify_sites",
];

/// How the `illumify` binary reports what it is doing.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the illumify crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the computed directives.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Print the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber for `config`. Call once, before any
/// command runs.
///
/// # Errors
///
/// Fails when the log file cannot be opened for appending.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, Mutex::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Same as [`init_logging`], writing events to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(output_layer(config, writer))
        .init();
}

/// Formatting layer for the chosen format, filtered by the config's
/// directives.
fn output_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi);
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => base.json().with_filter(filter).boxed(),
        (LogFormat::Compact, true) => base.compact().with_filter(filter).boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().with_filter(filter).boxed(),
        (LogFormat::Pretty, true) => base.with_filter(filter).boxed(),
        (LogFormat::Pretty, false) => base.without_time().with_filter(filter).boxed(),
    }
}

/// Filter directives for `level`: workspace crates at `level`, the rest at
/// `warn` (or lower when `level` is lower).
pub fn default_directives(level: LevelFilter) -> String {
    let level_str = match level.into_level() {
        Some(level) => level.as_str().to_lowercase(),
        None => "off".to_string(),
    };
    let base = if level < LevelFilter::WARN {
        level_str.as_str()
    } else {
        "warn"
    };
    let mut directives = vec![base.to_string()];
    directives.extend(
        WORKSPACE_CRATES
            .iter()
            .map(|krate| format!("{krate}={level_str}")),
    );
    directives.join(",")
}

/// Build an `EnvFilter` from the config, letting `RUST_LOG` override it when
/// no explicit level was requested.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let directives = default_directives(config.level_filter);
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    } else {
        EnvFilter::new(directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_keep_dependencies_quiet() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,illumify_cli=debug,illumify_color=debug,illumify_model=debug,illumify_sites=debug"
        );
    }

    #[test]
    fn directives_follow_levels_below_warn() {
        assert_eq!(
            default_directives(LevelFilter::ERROR),
            "error,illumify_cli=error,illumify_color=error,illumify_model=error,illumify_sites=error"
        );
        assert!(default_directives(LevelFilter::OFF).starts_with("off,"));
    }
}
