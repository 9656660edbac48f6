//! # Logging Utilities
//!
//! Diagnostics logging for retrolog using `tracing`.
//!
//! This module provides:
//! - Three output formats (pretty for development, JSON for machines, tagged
//!   to match the level printer)
//! - Environment variable configuration
//! - Log level filtering
//! - Console (stderr) and optional file output
//!
//! Diagnostics never go to stdout: stdout belongs to the tagged lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retrolog_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Frontend started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=retrolog_core=debug`)
//! - `RETROLOG_LOG_FORMAT`: Set output format (`pretty`, `json` or `tagged`, default: `pretty`)
//! - `RETROLOG_LOG_FILE`: Optional path to log file (if not set, logs only to stderr)

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::format::TaggedFormat;

/// Environment variable selecting the output format
pub const FORMAT_VAR: &str = "RETROLOG_LOG_FORMAT";
/// Environment variable naming an extra log file
pub const FILE_VAR: &str = "RETROLOG_LOG_FILE";
/// Environment variable holding the level filter
pub const FILTER_VAR: &str = "RUST_LOG";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    #[default]
    Pretty,
    /// JSON format (default for production)
    Json,
    /// `[INF]: message` lines, like the level printer
    Tagged,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            "tagged" | "retro" => Ok(LogFormat::Tagged),
            _ => Err(LoggingError::InvalidFormat(format!(
                "{s}. Use 'pretty', 'json', or 'tagged'"
            ))),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" | "wrn" => Ok(LogLevel::Warn),
            "info" | "inf" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(format!(
                "{s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            ))),
        }
    }
}

/// Settings for the diagnostics subscriber
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig
{
    /// Output format for both console and file
    pub format: LogFormat,
    /// Level used when `RUST_LOG` holds no usable filter
    pub default_level: LogLevel,
    /// Extra file to log into, rolled daily
    pub file: Option<PathBuf>,
}

impl LoggingConfig
{
    /// Read the configuration from the process environment
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps variable names to values
    ///
    /// ```rust
    /// use retrolog_utils::{LogFormat, LogLevel, LoggingConfig};
    ///
    /// let config = LoggingConfig::from_lookup(|key| match key {
    ///     "RETROLOG_LOG_FORMAT" => Some("tagged".to_string()),
    ///     "RUST_LOG" => Some("debug".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.format, LogFormat::Tagged);
    /// assert_eq!(config.default_level, LogLevel::Debug);
    /// assert_eq!(config.file, None);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self
    {
        let format = lookup(FORMAT_VAR)
            .and_then(|s| LogFormat::from_str(&s).ok())
            .unwrap_or_default();
        let default_level = lookup(FILTER_VAR)
            .and_then(|s| LogLevel::from_str(&s).ok())
            .unwrap_or_default();
        let file = lookup(FILE_VAR).filter(|s| !s.is_empty()).map(PathBuf::from);

        LoggingConfig {
            format,
            default_level,
            file,
        }
    }
}

/// Keeps the file writer's background worker alive
///
/// Dropping the guard flushes and stops file logging. Hold it for the life
/// of the program.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard
{
    _file: Option<WorkerGuard>,
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (e.g., `debug`, `retrolog_core=debug`)
/// - `RETROLOG_LOG_FORMAT`: Output format (`pretty`, `json` or `tagged`, default: `pretty`)
/// - `RETROLOG_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - File logging fails (if `RETROLOG_LOG_FILE` is set)
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    init_logging_with_config(&LoggingConfig::from_env())
}

/// Initialize logging with explicit level and format
///
/// `RETROLOG_LOG_FILE` is still honoured.
///
/// ## Example
///
/// ```rust,no_run
/// use retrolog_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Tagged)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized or file logging fails.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    let config = LoggingConfig {
        format,
        default_level: level,
        ..LoggingConfig::from_env()
    };
    init_logging_with_config(&config)
}

/// Initialize logging from an explicit configuration
///
/// `RUST_LOG` filters, when present and valid, still take precedence over
/// `config.default_level`.
///
/// ## Errors
///
/// Returns an error if logging is already initialized or the log file's
/// directory cannot be created.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError>
{
    let default_level = Level::from(config.default_level);
    let mut layers: Vec<BoxedLayer> = vec![format_layer(config.format, io::stderr, true, default_level)];

    let file_guard = match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            // No ANSI in files
            layers.push(format_layer(config.format, writer, false, default_level));
            Some(guard)
        }
        None => None,
    };

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;

    Ok(LoggingGuard { _file: file_guard })
}

/// Build the level filter: `RUST_LOG` if it parses, otherwise `default_level`
fn build_filter(default_level: Level) -> EnvFilter
{
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

fn format_layer<W>(format: LogFormat, writer: W, ansi: bool, default_level: Level) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(default_level);
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Tagged => fmt::layer()
            .with_ansi(false)
            .event_format(TaggedFormat)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    }
}

/// Daily-rolling, non-blocking writer for `path`
fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingError>
{
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidFile(path.display().to_string()))?;

    std::fs::create_dir_all(&directory).map_err(LoggingError::FileError)?;
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Log file path has no file name
    #[error("Invalid log file path: {0}")]
    InvalidFile(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("TAGGED").unwrap(), LogFormat::Tagged);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("prod").unwrap(), LogFormat::Json);
        assert!(matches!(LogFormat::from_str("invalid"), Err(LoggingError::InvalidFormat(_))));
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("inf").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(matches!(LogLevel::from_str("invalid"), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_config_defaults()
    {
        let config = LoggingConfig::from_lookup(|_| None);
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.default_level, LogLevel::Info);
    }

    #[test]
    fn test_config_ignores_bad_values()
    {
        let config = LoggingConfig::from_lookup(|key| match key {
            FORMAT_VAR => Some("xml".to_string()),
            FILTER_VAR => Some("retrolog_core=debug".to_string()),
            FILE_VAR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_config_reads_file()
    {
        let config = LoggingConfig::from_lookup(|key| (key == FILE_VAR).then(|| "/tmp/retrolog.log".to_string()));
        assert_eq!(config.file, Some(PathBuf::from("/tmp/retrolog.log")));
    }
}
