//! Tests for command-line parsing.

use banmap::{Cli, Config, LogFormat, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["banmap", "--api-key", "KEY"]).expect("Should parse");

    assert_eq!(cli.file, PathBuf::from("/var/log/fail2ban.log"));
    assert!(cli.output_file.is_none());
    assert!(!cli.headless);
    assert_eq!(cli.api_key, "KEY");
    assert_eq!(cli.endpoint, "http://api.ipstack.com");
    assert_eq!(cli.map_path, PathBuf::from("fail2ban_map.png"));
    assert!(cli.timeout_seconds.is_none());
    assert_eq!(cli.log_level, LogLevel::Info);
    assert_eq!(cli.log_format, LogFormat::Plain);
}

#[test]
fn test_cli_short_flags() {
    let args = [
        "banmap",
        "-f",
        "/tmp/fail2ban.log.1",
        "-o",
        "bans.csv",
        "-a",
        "KEY",
        "--headless",
    ];
    let config = Config::from(Cli::try_parse_from(args).expect("Should parse"));

    assert_eq!(config.file, PathBuf::from("/tmp/fail2ban.log.1"));
    assert_eq!(config.output, Some(PathBuf::from("bans.csv")));
    assert_eq!(config.access_key, "KEY");
    assert!(config.headless);
}

#[test]
fn test_cli_long_options() {
    let args = [
        "banmap",
        "--file",
        "ban.log",
        "--output-file",
        "out.csv",
        "--api-key",
        "KEY",
        "--endpoint",
        "http://127.0.0.1:9000",
        "--map-path",
        "bans.png",
        "--timeout-seconds",
        "15",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let cli = Cli::try_parse_from(args).expect("Should parse");

    assert_eq!(cli.endpoint, "http://127.0.0.1:9000");
    assert_eq!(cli.map_path, PathBuf::from("bans.png"));
    assert_eq!(cli.timeout_seconds, Some(15));
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Debug
    );
    assert_eq!(cli.log_format, LogFormat::Json);
}

#[test]
fn test_cli_requires_api_key() {
    std::env::remove_var("IPSTACK_ACCESS_KEY");
    let result = Cli::try_parse_from(["banmap", "--headless"]);
    assert!(result.is_err(), "Missing --api-key should be rejected");
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result = Cli::try_parse_from(["banmap", "-a", "KEY", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let result = Cli::try_parse_from(["banmap", "-a", "KEY", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_empty_output_file_means_no_export() {
    let cli = Cli::try_parse_from(["banmap", "-a", "KEY", "--output-file", ""])
        .expect("empty output path should parse");
    assert_eq!(cli.output_file.as_deref(), Some(""));

    let config = Config::from(cli);
    assert!(config.output.is_none());
}
