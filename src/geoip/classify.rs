//! Response classification.
//!
//! The geolocation service does not report quota exhaustion with a status
//! code; it is inferred from the shape of the body. That inference lives
//! behind [`ResponseClassifier`] so it can be replaced without touching the
//! resolver or the pipeline.

use serde_json::Value;

use super::types::{Coordinate, ResolutionOutcome};
use crate::config::{FIELD_LATITUDE, FIELD_LONGITUDE};

/// Maps a decoded response body to a [`ResolutionOutcome`].
pub trait ResponseClassifier {
    fn classify(&self, body: &Value) -> ResolutionOutcome;
}

/// Classifies by the presence and type of the `latitude`/`longitude` fields.
///
/// | body                                      | outcome          |
/// |-------------------------------------------|------------------|
/// | both fields numeric (number or numeric string) | `Resolved`  |
/// | an object missing either field            | `QuotaExhausted` |
/// | both present, either not numeric          | `Skipped`        |
/// | not an object                             | `Skipped`        |
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldShapeClassifier;

impl ResponseClassifier for FieldShapeClassifier {
    fn classify(&self, body: &Value) -> ResolutionOutcome {
        let Some(object) = body.as_object() else {
            return ResolutionOutcome::Skipped;
        };
        let (Some(latitude), Some(longitude)) =
            (object.get(FIELD_LATITUDE), object.get(FIELD_LONGITUDE))
        else {
            return ResolutionOutcome::QuotaExhausted;
        };
        match (as_degrees(latitude), as_degrees(longitude)) {
            (Some(latitude), Some(longitude)) => {
                ResolutionOutcome::Resolved(Coordinate::new(latitude, longitude))
            }
            _ => ResolutionOutcome::Skipped,
        }
    }
}

/// Reads a JSON number or a numeric string as `f64`.
fn as_degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
