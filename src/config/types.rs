//! Configuration types.
//!
//! `Config` is the library-facing configuration. It carries no CLI
//! dependencies and can be built programmatically; the binary builds it from
//! [`Cli`](super::Cli).

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_LOG_PATH, DEFAULT_MAP_PATH};

/// Logging level for the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: human-readable, colored (default)
/// - `Json`: one JSON object per line for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```no_run
/// use banmap::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("fail2ban.log"),
///     access_key: "secret".to_string(),
///     headless: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// fail2ban log file to scan
    pub file: PathBuf,

    /// CSV output path; no export when `None`
    pub output: Option<PathBuf>,

    /// Render the map without opening it in a viewer
    pub headless: bool,

    /// ipstack access key
    pub access_key: String,

    /// Geolocation service base URL
    pub endpoint: String,

    /// Path of the rendered map image
    pub map_path: PathBuf,

    /// Per-lookup timeout in seconds; lookups wait indefinitely when `None`
    pub timeout_seconds: Option<u64>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Per-lookup timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_PATH),
            output: None,
            headless: false,
            access_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            timeout_seconds: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("/var/log/fail2ban.log"));
        assert_eq!(config.endpoint, "http://api.ipstack.com");
        assert_eq!(config.map_path, PathBuf::from("fail2ban_map.png"));
        assert!(config.output.is_none());
        assert!(!config.headless);
        assert!(config.timeout_seconds.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_timeout_conversion() {
        let mut config = Config::default();
        assert_eq!(config.timeout(), None);

        config.timeout_seconds = Some(7);
        assert_eq!(config.timeout(), Some(Duration::from_secs(7)));
    }
}
