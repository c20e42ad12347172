//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, the log source, lookups and export
//! - Outcome categories and counters for the enrichment phase

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ExportError, InitializationError, LookupError, OutcomeType, SourceError};
