//! Tracing setup for Marquee
//!
//! Provides dual output: console logs (user-controlled level) and full debug
//! logs to disk, keeping the console clean while a complete record of every
//! probe and playback command stays available for debugging.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initialize tracing with dual output: console (user level) + file (full debug)
///
/// # Arguments
/// * `console_level` - Log level for console output (what user sees)
/// * `logs_dir` - Directory to write debug logs (defaults to "./logs")
///
/// # File Output
/// Writes complete debug logs to `logs/marquee-last-run.log`, overwriting the
/// previous run.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If the logs directory cannot be created or the log file cannot be opened for writing
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let logs_path = logs_dir.unwrap_or_else(|| Path::new("logs"));

    create_dir_all(logs_path)?;

    let log_file_path = logs_path.join("marquee-last-run.log");
    let log_file = File::create(&log_file_path)?;

    // Console layer - respects user's chosen log level
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    // File layer - always captures everything at TRACE level for debugging
    let file_filter = EnvFilter::new("trace");

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false) // No color codes in files
        .with_writer(log_file)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Tracing initialized: console={}, debug_file={}",
        console_level,
        log_file_path.display()
    );

    Ok(())
}

/// User-facing log levels for console output
#[derive(Debug, Clone, Copy)]
pub enum ConsoleLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl ConsoleLogLevel {
    /// Converts the console log level to the tracing Level enum.
    pub fn as_tracing_level(self) -> Level {
        match self {
            ConsoleLogLevel::Error => Level::ERROR,
            ConsoleLogLevel::Warn => Level::WARN,
            ConsoleLogLevel::Info => Level::INFO,
            ConsoleLogLevel::Debug => Level::DEBUG,
            ConsoleLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::str::FromStr for ConsoleLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(ConsoleLogLevel::Error),
            "warn" => Ok(ConsoleLogLevel::Warn),
            "info" => Ok(ConsoleLogLevel::Info),
            "debug" => Ok(ConsoleLogLevel::Debug),
            "trace" => Ok(ConsoleLogLevel::Trace),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

impl std::fmt::Display for ConsoleLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleLogLevel::Error => write!(f, "error"),
            ConsoleLogLevel::Warn => write!(f, "warn"),
            ConsoleLogLevel::Info => write!(f, "info"),
            ConsoleLogLevel::Debug => write!(f, "debug"),
            ConsoleLogLevel::Trace => write!(f, "trace"),
        }
    }
}
