// Shared test helpers for log fixtures and pipeline configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::Path;

use banmap::{Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;

/// A fail2ban.actions line banning `ip` in the given jail.
#[allow(dead_code)] // Used by other test files
pub fn ban_line(jail: &str, ip: &str) -> String {
    format!("2024-01-07 10:14:02,123 fail2ban.actions        [812]: NOTICE  [{jail}] Ban {ip}")
}

/// A fail2ban.filter line that mentions `ip` without banning it.
#[allow(dead_code)] // Used by other test files
pub fn found_line(jail: &str, ip: &str) -> String {
    format!("2024-01-07 10:14:01,998 fail2ban.filter         [812]: INFO    [{jail}] Found {ip} - 2024-01-07 10:14:01")
}

/// Writes `lines` to a temporary log file.
#[allow(dead_code)] // Used by other test files
pub fn write_log(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write log line");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Pipeline configuration pointing at a mock endpoint, headless, quiet.
#[allow(dead_code)] // Used by other test files
pub fn test_config(log: &Path, endpoint: &str, artifacts: &Path) -> Config {
    Config {
        file: log.to_path_buf(),
        output: Some(artifacts.join("locations.csv")),
        headless: true,
        access_key: "test-key".to_string(),
        endpoint: endpoint.to_string(),
        map_path: artifacts.join("map.png"),
        timeout_seconds: Some(5),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}
