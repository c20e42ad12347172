//! Error type definitions.
//!
//! This module defines the error enums and outcome categories used throughout
//! the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The log source could not be opened or read.
///
/// Always fatal: the pipeline aborts without attempting any lookups.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read log file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Transport-level failure of a single geolocation lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be sent or the body could not be read.
    #[error("Geolocation request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The response body was not valid JSON.
    #[error("Geolocation response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error types for the export and visualization collaborators.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Drawing backend failure while rendering the map.
    #[error("Map rendering error: {0}")]
    Render(String),
}

/// Per-token lookup outcome categories tracked in [`ProcessingStats`](super::ProcessingStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// A coordinate was produced
    Resolved,
    /// The payload was present but not numeric
    Skipped,
    /// The payload lacked coordinate fields
    QuotaExhausted,
    /// Network or decoding failure
    LookupFailed,
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Resolved => "Resolved",
            OutcomeType::Skipped => "Skipped (non-numeric coordinates)",
            OutcomeType::QuotaExhausted => "Quota exhausted or service down",
            OutcomeType::LookupFailed => "Lookup failed",
        }
    }

    /// Whether this outcome ends the enrichment phase.
    pub fn halts_enrichment(&self) -> bool {
        matches!(self, OutcomeType::QuotaExhausted | OutcomeType::LookupFailed)
    }
}
