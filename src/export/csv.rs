//! CSV export of resolved coordinates.
//!
//! One row per coordinate, `latitude,longitude`, no header row.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use log::info;

use super::CoordinateSink;
use crate::aggregate::ResultAggregate;
use crate::error_handling::ExportError;
use crate::geoip::Coordinate;

/// Writes an aggregate to a CSV file, replacing any existing file.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CoordinateSink for CsvExporter {
    /// An empty aggregate still produces an (empty) file.
    fn accept(&self, aggregate: &ResultAggregate) -> Result<(), ExportError> {
        info!("Writing location data to {}", self.path.display());

        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        for coordinate in aggregate {
            writer.serialize(coordinate)?;
        }
        writer.flush()?;

        info!(
            "Wrote {} row{} to {}",
            aggregate.len(),
            if aggregate.len() == 1 { "" } else { "s" },
            self.path.display()
        );
        Ok(())
    }
}

/// Reads a file written by [`CsvExporter`] back into an aggregate.
///
/// # Errors
///
/// Returns [`ExportError`] if the file cannot be opened or a row is not a
/// pair of numbers.
pub fn read_csv(path: &Path) -> Result<ResultAggregate, ExportError> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(path)?;
    let coordinates = reader
        .deserialize::<Coordinate>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ResultAggregate::from(coordinates))
}
