//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_LOG_PATH, DEFAULT_MAP_PATH};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options.
///
/// Parsed by `clap` and converted into a library [`Config`].
///
/// # Examples
///
/// ```bash
/// # Scan the default log and plot the result without opening a viewer
/// banmap --api-key KEY --headless
///
/// # Scan a rotated log and export the coordinates
/// banmap -f /var/log/fail2ban.log.1 -o bans.csv -a KEY
///
/// # Access key from the environment (or a .env file)
/// IPSTACK_ACCESS_KEY=KEY banmap --headless
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "banmap",
    version,
    about = "Parses fail2ban log file and plots banned IP Addresses"
)]
pub struct Cli {
    /// Fail2Ban log file to parse
    #[arg(short = 'f', long = "file", default_value = DEFAULT_LOG_PATH)]
    pub file: PathBuf,

    /// Where to store output csv of location information
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<String>,

    /// Run without displaying the map, ideal for servers without a desktop environment
    #[arg(long)]
    pub headless: bool,

    /// IP Stack API key
    #[arg(short = 'a', long = "api-key", env = "IPSTACK_ACCESS_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Geolocation service base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Path of the rendered map image
    #[arg(long, default_value = DEFAULT_MAP_PATH)]
    pub map_path: PathBuf,

    /// Per-lookup timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        // An empty output path means "no export"
        let output = cli
            .output_file
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Config {
            file: cli.file,
            output,
            headless: cli.headless,
            access_key: cli.api_key,
            endpoint: cli.endpoint,
            map_path: cli.map_path,
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}
