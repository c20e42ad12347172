//! IP geolocation.
//!
//! This module turns ban tokens into coordinates through an external HTTP
//! geolocation service (ipstack). Response bodies are classified into three
//! outcomes: a coordinate, a skipped token, or quota exhaustion, which ends
//! the enrichment phase.

mod classify;
mod resolver;
mod types;

// Re-export public API
pub use classify::{FieldShapeClassifier, ResponseClassifier};
pub use resolver::{GeoLookup, GeoResolver, LookupConfig};
pub use types::{Coordinate, ResolutionOutcome};
