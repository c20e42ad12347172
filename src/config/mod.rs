//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default paths, endpoint, pattern, limits)
//! - The library `Config` struct and logging option enums
//! - CLI option parsing that converts into `Config`

mod cli;
mod constants;
mod types;

pub use cli::Cli;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
