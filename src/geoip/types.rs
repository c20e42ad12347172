//! Geolocation data structures.

use serde::{Deserialize, Serialize};

/// A resolved location in signed decimal degrees.
///
/// Only ever built from a response carrying both fields as numbers; there is
/// no partially populated coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Classification of one geolocation response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionOutcome {
    /// Both coordinate fields were present and numeric.
    Resolved(Coordinate),
    /// A coordinate field was missing: the service is down or the daily quota
    /// is used up. No further lookups may be issued.
    QuotaExhausted,
    /// Fields were present but not numeric. The token is dropped and the next
    /// one is looked up.
    Skipped,
}
