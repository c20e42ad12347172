//! Ban event extraction.
//!
//! Each log line is searched for a fail2ban ban directive followed by a
//! dotted-quad address. Only the first match on a line counts, and repeated
//! bans of the same address are all kept, in file order.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use log::{debug, info};
use regex::Regex;

use crate::app::log_progress;
use crate::config::{BAN_PATTERN, LINE_PROGRESS_INTERVAL};
use crate::error_handling::SourceError;
use crate::scan::LineScanner;

static BAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BAN_PATTERN).expect("ban pattern is a valid regex"));

/// An IPv4 address as it appeared in a ban event.
///
/// Kept textual: the geolocation service receives exactly what the log said.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BanToken(String);

impl BanToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BanToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BanToken {
    fn from(s: &str) -> Self {
        BanToken(s.to_string())
    }
}

/// Result of the extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Banned addresses in order of appearance, duplicates included
    pub tokens: Vec<BanToken>,
    /// Total lines read from the source
    pub lines_scanned: usize,
}

/// Returns the banned address on `line`, if it records a ban.
pub fn extract_ban_token(line: &str) -> Option<BanToken> {
    BAN_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| BanToken(m.as_str().to_string()))
}

/// Scans the whole log at `path` and collects every ban token.
///
/// # Errors
///
/// Returns [`SourceError::Unreadable`] if the file cannot be opened or read.
/// No partial result is returned in that case.
pub async fn collect_ban_tokens(path: &Path) -> Result<Extraction, SourceError> {
    let mut scanner = LineScanner::open(path).await?;
    let start_time = Instant::now();
    let mut tokens = Vec::new();

    while let Some(line) = scanner.next_line().await? {
        if let Some(token) = extract_ban_token(&line) {
            debug!("Ban event for {}", token);
            tokens.push(token);
        }
        if scanner.lines_read() % LINE_PROGRESS_INTERVAL == 0 {
            log_progress("lines", start_time, scanner.lines_read(), None);
        }
    }

    info!(
        "Found {} ban event{} in {} lines",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" },
        scanner.lines_read()
    );

    Ok(Extraction {
        tokens,
        lines_scanned: scanner.lines_read(),
    })
}
