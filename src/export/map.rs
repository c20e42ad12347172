//! Map image of resolved coordinates.
//!
//! Draws every coordinate as a point on a longitude/latitude grid framed by
//! the data extent plus [`ZOOM_SCALE`] degrees, and writes a PNG. Unless
//! running headless, the image is then handed to the desktop's default viewer.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};
use plotters::prelude::*;

use super::CoordinateSink;
use crate::aggregate::{Bounds, ResultAggregate};
use crate::config::{MAP_DIMENSIONS, MAP_TITLE, ZOOM_SCALE};
use crate::error_handling::ExportError;

const WATER: RGBColor = RGBColor(173, 216, 230);
const MARKER: RGBColor = RGBColor(178, 24, 43);

/// Renders an aggregate to a PNG map.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    path: PathBuf,
    headless: bool,
}

impl MapRenderer {
    pub fn new(path: impl Into<PathBuf>, headless: bool) -> Self {
        Self {
            path: path.into(),
            headless,
        }
    }

    fn render(&self, aggregate: &ResultAggregate, frame: Bounds) -> Result<(), ExportError> {
        let root = BitMapBackend::new(&self.path, MAP_DIMENSIONS).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(MAP_TITLE, ("sans-serif", 40).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                frame.min_longitude..frame.max_longitude,
                frame.min_latitude..frame.max_latitude,
            )
            .map_err(render_error)?;

        chart.plotting_area().fill(&WATER).map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .x_labels(6)
            .y_labels(6)
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(
                aggregate
                    .iter()
                    .map(|c| Circle::new((c.longitude, c.latitude), 5, MARKER.filled())),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

impl CoordinateSink for MapRenderer {
    /// Does nothing for an empty aggregate: there is no extent to frame.
    fn accept(&self, aggregate: &ResultAggregate) -> Result<(), ExportError> {
        let Some(bounds) = aggregate.bounds() else {
            warn!("No coordinates to plot, skipping map");
            return Ok(());
        };

        info!("Plotting chart of {} locations", aggregate.len());
        self.render(aggregate, bounds.padded(ZOOM_SCALE))?;
        info!("Map saved to {}", self.path.display());

        if !self.headless {
            open_in_viewer(&self.path);
        }
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Render(e.to_string())
}

/// Opens `path` with the platform's default image viewer.
///
/// Failure to launch a viewer is reported but not an error; the image is
/// already on disk.
fn open_in_viewer(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };

    if let Err(e) = command.arg(path).spawn() {
        warn!(
            "Could not open {} in a viewer ({}); use --headless to skip this step",
            path.display(),
            e
        );
    }
}
