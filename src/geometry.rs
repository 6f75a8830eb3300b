//! Outlook zone geometry: tagged polygon shapes, ring extraction and
//! boundary-inclusive containment.

use geo::{Coord, Intersects, LineString, Point, Polygon as GeoPolygon};
use serde_json::Value;

use crate::error::DataError;

/// A single linear ring, closed (first coordinate equals the last).
pub type Ring = LineString<f64>;

/// Ring list for one polygon: the first entry is the outer boundary,
/// any following entries are holes.
pub type RingSet = Vec<Ring>;

/// One outlook zone geometry as published upstream.
///
/// No validation (winding, self-intersection, closure) is performed;
/// containment runs standard point-in-polygon semantics on whatever
/// rings are given.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(RingSet),
    MultiPolygon(Vec<RingSet>),
}

impl Geometry {
    /// Flatten to a single ordered ring sequence.
    ///
    /// A Polygon yields its own ring list unchanged; a MultiPolygon
    /// concatenates the ring lists of its component polygons in order.
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            Geometry::Polygon(rings) => rings.iter().collect(),
            Geometry::MultiPolygon(sets) => sets.iter().flatten().collect(),
        }
    }

    /// Boundary-inclusive containment test.
    ///
    /// The point is contained if it lies inside or exactly on the
    /// boundary of ANY ring, each ring treated as a standalone filled
    /// region. Hole rings are unioned in rather than subtracted; this
    /// reproduces the behavior of the upstream classifier and is a
    /// known simplification.
    pub fn contains(&self, point: Point<f64>) -> bool {
        self.rings()
            .into_iter()
            .any(|ring| GeoPolygon::new(ring.clone(), vec![]).intersects(&point))
    }

    /// Parse a GeoJSON-shaped geometry object: a `type` tag plus the
    /// matching `coordinates` nesting.
    pub fn from_geojson(value: &Value) -> Result<Self, DataError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DataError::MissingGeometry)?;
        let coords = value
            .get("coordinates")
            .ok_or(DataError::MissingGeometry)?;

        match kind {
            "Polygon" => Ok(Geometry::Polygon(parse_ring_set(coords)?)),
            "MultiPolygon" => {
                let sets = coords
                    .as_array()
                    .ok_or(DataError::MalformedCoordinates)?
                    .iter()
                    .map(parse_ring_set)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Geometry::MultiPolygon(sets))
            }
            other => Err(DataError::UnsupportedGeometry(other.to_string())),
        }
    }
}

fn parse_ring_set(value: &Value) -> Result<RingSet, DataError> {
    value
        .as_array()
        .ok_or(DataError::MalformedCoordinates)?
        .iter()
        .map(parse_ring)
        .collect()
}

fn parse_ring(value: &Value) -> Result<Ring, DataError> {
    let coords = value
        .as_array()
        .ok_or(DataError::MalformedCoordinates)?
        .iter()
        .map(|position| {
            let pair = position
                .as_array()
                .ok_or(DataError::MalformedCoordinates)?;
            let x = pair
                .first()
                .and_then(Value::as_f64)
                .ok_or(DataError::MalformedCoordinates)?;
            let y = pair
                .get(1)
                .and_then(Value::as_f64)
                .ok_or(DataError::MalformedCoordinates)?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>, DataError>>()?;
    Ok(LineString::new(coords))
}
