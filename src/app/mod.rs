//! Progress and statistics reporting used by the pipeline.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_outcome_statistics;
