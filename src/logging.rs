//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The previewer owns the terminal, so logs are only written when a log file
//! is given. In `--html` mode they go to stderr.
//!
//! The `MBVIEW_LOG` environment variable (`EnvFilter` syntax) overrides the
//! level derived from `-v`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "MBVIEW_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Discard everything
    #[default]
    Disabled,
    Stderr,
    /// Append to a file
    File(PathBuf),
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub target: LogTarget,
    /// Whether to use ANSI colors (never for files)
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            target: LogTarget::default(),
            with_ansi: false,
        }
    }
}

impl LogConfig {
    /// Level from `-v` count: 0 info, 1 debug, 2+ trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.with_ansi = target == LogTarget::Stderr;
        self.target = target;
        self
    }
}

/// Install the global subscriber; call once at startup
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.target {
        LogTarget::Disabled => init_with_writer(config, io::sink),
        LogTarget::Stderr => init_with_writer(config, io::stderr),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_with_writer(config, Mutex::new(file));
        }
    }
    Ok(())
}

fn init_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .init();
}

/// Filter for this crate at `level`; other crates stay at warn
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,mbview={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
