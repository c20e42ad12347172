//! The ordered set of coordinates produced by one pipeline run.

use std::slice;

use crate::geoip::Coordinate;

/// Insertion-ordered, append-only collection of resolved coordinates.
///
/// Only the pipeline appends; once enrichment ends the aggregate is handed to
/// the export and visualization sinks by shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultAggregate {
    coordinates: Vec<Coordinate>,
}

/// Latitude/longitude extent of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Bounds {
    /// Grows the box by `degrees` on every side, clamped to valid ranges.
    pub fn padded(&self, degrees: f64) -> Bounds {
        Bounds {
            min_latitude: (self.min_latitude - degrees).max(-90.0),
            max_latitude: (self.max_latitude + degrees).min(90.0),
            min_longitude: (self.min_longitude - degrees).max(-180.0),
            max_longitude: (self.max_longitude + degrees).min(180.0),
        }
    }
}

impl ResultAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Smallest box containing every coordinate, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.coordinates.first()?;
        let init = Bounds {
            min_latitude: first.latitude,
            max_latitude: first.latitude,
            min_longitude: first.longitude,
            max_longitude: first.longitude,
        };
        Some(self.coordinates.iter().fold(init, |b, c| Bounds {
            min_latitude: b.min_latitude.min(c.latitude),
            max_latitude: b.max_latitude.max(c.latitude),
            min_longitude: b.min_longitude.min(c.longitude),
            max_longitude: b.max_longitude.max(c.longitude),
        }))
    }
}

impl From<Vec<Coordinate>> for ResultAggregate {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

impl<'a> IntoIterator for &'a ResultAggregate {
    type Item = &'a Coordinate;
    type IntoIter = slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut aggregate = ResultAggregate::new();
        aggregate.push(Coordinate::new(1.0, 2.0));
        aggregate.push(Coordinate::new(-3.0, 4.0));
        aggregate.push(Coordinate::new(1.0, 2.0));

        assert_eq!(aggregate.len(), 3);
        assert_eq!(
            aggregate.as_slice(),
            &[
                Coordinate::new(1.0, 2.0),
                Coordinate::new(-3.0, 4.0),
                Coordinate::new(1.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_bounds_empty() {
        assert!(ResultAggregate::new().bounds().is_none());
    }

    #[test]
    fn test_bounds_and_padding() {
        let aggregate = ResultAggregate::from(vec![
            Coordinate::new(51.5, -0.1),
            Coordinate::new(40.7, -74.0),
            Coordinate::new(88.0, 178.0),
        ]);
        let bounds = aggregate.bounds().expect("non-empty");
        assert_eq!(bounds.min_latitude, 40.7);
        assert_eq!(bounds.max_latitude, 88.0);
        assert_eq!(bounds.min_longitude, -74.0);
        assert_eq!(bounds.max_longitude, 178.0);

        let padded = bounds.padded(5.0);
        assert_eq!(padded.min_latitude, 35.7);
        assert_eq!(padded.max_latitude, 90.0);
        assert_eq!(padded.min_longitude, -79.0);
        assert_eq!(padded.max_longitude, 180.0);
    }
}
