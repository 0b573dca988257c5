//! Logging backend for the `log` facade.
//!
//! The library only emits records through `log::debug!` and `log::warn!`.
//! Binaries call [`init_logger`] once to route those records to stderr at
//! the verbosity the user asked for.

use std::env;
use std::fmt;
use std::sync::OnceLock;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`] when no flag is given.
pub const LOG_MODE_ENV: &str = "SEGPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use segpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing is printed.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records.
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
    /// use segpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr `log` backend filtered by [`LogLevel`].
///
/// Records print as `LEVEL: message`.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static INSTALLED: OnceLock<Logger> = OnceLock::new();

fn select_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Picks a level from CLI flags and the environment and installs a
/// [`Logger`] as the `log` backend.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `SEGPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// Only the first call in a process installs a backend; later calls still
/// return the logger they would have installed.
///
/// # Examples
///
/// ```
/// use segpath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let logger = Logger::new(select_level(verbose, quiet));

    let mut first = false;
    let installed = INSTALLED.get_or_init(|| {
        first = true;
        logger
    });
    if first && log::set_logger(installed).is_ok() {
        log::set_max_level(installed.level.filter());
    }

    logger
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};
    use serial_test::serial;

    fn with_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        let out = f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        out
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let meta = |level| Metadata::builder().level(level).build();

        let normal = Logger::default();
        assert!(normal.enabled(&meta(Level::Error)));
        assert!(normal.enabled(&meta(Level::Warn)));
        assert!(!normal.enabled(&meta(Level::Debug)));

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&meta(Level::Error)));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&meta(Level::Debug)));
        assert!(!verbose.enabled(&meta(Level::Trace)));
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        let logger = with_env(None, || init_logger(false, false));
        assert_eq!(logger.level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        let logger = with_env(Some("verbose"), || init_logger(false, false));
        assert_eq!(logger.level(), LogLevel::Verbose);

        let logger = with_env(Some("quiet"), || init_logger(false, false));
        assert_eq!(logger.level(), LogLevel::Quiet);
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_fallback() {
        let logger = with_env(Some("invalid"), || init_logger(false, false));
        assert_eq!(logger.level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_cli_overrides_env() {
        let logger = with_env(Some("quiet"), || init_logger(true, false));
        assert_eq!(logger.level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_repeated_calls_are_harmless() {
        let _ = init_logger(false, false);
        let again = init_logger(true, false);
        assert_eq!(again.level(), LogLevel::Verbose);
        log::debug!("emitted after repeated init");
    }
}
