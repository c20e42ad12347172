//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress for a pipeline phase.
///
/// # Arguments
///
/// * `phase` - What is being counted ("lines", "lookups", ...)
/// * `start_time` - When the phase started
/// * `done` - Units processed so far
/// * `total` - Total units, when known up front
pub fn log_progress(phase: &str, start_time: Instant, done: usize, total: Option<usize>) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    match total {
        Some(total) => info!(
            "Processed {}/{} {} in {:.2} seconds (~{:.2} {}/sec)",
            done, total, phase, elapsed_secs, rate, phase
        ),
        None => info!(
            "Processed {} {} in {:.2} seconds (~{:.2} {}/sec)",
            done, phase, elapsed_secs, rate, phase
        ),
    }
}
