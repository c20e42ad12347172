//! Consumers of the finished result aggregate.
//!
//! The pipeline hands its [`ResultAggregate`] to each sink once enrichment is
//! over. Sinks only read it.

mod csv;
mod map;

use crate::aggregate::ResultAggregate;
use crate::error_handling::ExportError;

pub use self::csv::{read_csv, CsvExporter};
pub use map::MapRenderer;

/// A consumer of the final coordinate set.
pub trait CoordinateSink {
    fn accept(&self, aggregate: &ResultAggregate) -> Result<(), ExportError>;
}
