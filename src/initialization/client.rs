//! HTTP client initialization.

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// User-Agent sent with every geolocation lookup.
const USER_AGENT: &str = concat!("banmap/", env!("CARGO_PKG_VERSION"));

/// Initializes the HTTP client used for geolocation lookups.
///
/// The client has no request timeout unless `config.timeout_seconds` is set;
/// an unresponsive endpoint otherwise blocks the lookup indefinitely.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
