//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `banmap` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use banmap::initialization::init_logger_with;
use banmap::{run_pipeline, Cli, Config, HaltReason};

#[tokio::main]
async fn main() -> Result<()> {
    // Allows IPSTACK_ACCESS_KEY to live in a .env file instead of the shell
    // or the command line. Next to the executable is tried second.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Cli::parse());

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_pipeline(config).await {
        Ok(report) => {
            println!(
                "Located {} of {} banned address{} ({} lookup{}, {} skipped) in {:.1}s",
                report.resolved,
                report.tokens_extracted,
                if report.tokens_extracted == 1 { "" } else { "es" },
                report.lookups_issued,
                if report.lookups_issued == 1 { "" } else { "s" },
                report.skipped,
                report.elapsed_seconds
            );
            match report.halted {
                Some(HaltReason::QuotaExhausted) => {
                    println!("Stopped early: geolocation quota reached or service down")
                }
                Some(HaltReason::LookupFailed(reason)) => {
                    println!("Stopped early: {}", reason)
                }
                None => {}
            }
            if let Some(path) = report.csv_path {
                println!("Location data written to {}", path.display());
            }
            if let Some(path) = report.map_path {
                println!("Map saved to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("banmap error: {:#}", e);
            process::exit(1);
        }
    }
}
