//! Logging infrastructure for the gopaths library.
//!
//! This module provides a simple stderr-based logger with configurable log
//! levels. A [`Logger`] is passed by reference into every operation that
//! reports diagnostics; there is no process-wide logging state.

use std::env;
use std::fmt;

/// Width that line prefixes are right-aligned to.
const PREFIX_WIDTH: usize = 30;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use gopaths::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use gopaths::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages at
/// or above that level. Each line may carry a prefix naming the directory or
/// marker file being processed; see [`Logger::scoped`].
///
/// # Examples
///
/// ```
/// use gopaths::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.debug("This will not be printed (requires Verbose)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
    prefix: String,
}

impl Logger {
    /// Creates a new logger with the specified log level and no prefix.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level,
            prefix: String::new(),
        }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the line prefix, already padded for output.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns a logger at the same level whose lines are prefixed with
    /// `label` (typically a directory or marker path).
    ///
    /// Labels longer than 30 characters keep only their tail, behind a
    /// leading `…`. Shorter labels are right-aligned so that consecutive
    /// lines line up.
    ///
    /// # Examples
    ///
    /// ```
    /// use gopaths::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose).scoped("/src");
    /// assert_eq!(logger.prefix().trim_start(), "/src: ");
    /// assert_eq!(logger.prefix().chars().count(), 30);
    /// ```
    #[must_use]
    pub fn scoped(&self, label: &str) -> Self {
        Self {
            level: self.level,
            prefix: pad_prefix(&truncate_prefix(&format!("{label}: "))),
        }
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("{}ERROR: {message}", self.prefix);
        }
    }

    /// Logs a warning message.
    ///
    /// Warning messages are displayed at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("{}WARN: {message}", self.prefix);
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{}INFO: {message}", self.prefix);
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{}DEBUG: {message}", self.prefix);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Keep the last `PREFIX_WIDTH - 1` characters of long prefixes.
fn truncate_prefix(prefix: &str) -> String {
    let count = prefix.chars().count();
    if count <= PREFIX_WIDTH {
        return prefix.to_string();
    }
    let tail: String = prefix.chars().skip(count - (PREFIX_WIDTH - 1)).collect();
    format!("…{tail}")
}

fn pad_prefix(prefix: &str) -> String {
    format!("{prefix:>PREFIX_WIDTH$}")
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `GOPATHS_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use gopaths::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var("GOPATHS_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
