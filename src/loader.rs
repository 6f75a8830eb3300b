//! Shapefile collaborator: reads an extracted outlook download into an
//! [`OutlookSet`].
//!
//! The day-1 archive unzips to one shapefile per layer
//! (`day1otlk_*_cat.shp`, `*_wind.shp`, `*_hail.shp`, `*_torn.shp`)
//! plus `*_sig*` variants. The significant polygons are also present as
//! `SIGN`-labeled records in the main hazard files, so the `sig` files
//! are skipped.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString};
use shapefile::dbase::FieldValue;
use shapefile::{PolygonRing, Reader, Shape};
use tracing::{debug, info};

use crate::error::DataError;
use crate::geometry::{Geometry, RingSet};
use crate::models::HazardKind;
use crate::outlook::{CategoricalLayer, Feature, HazardLayer, OutlookSet};

/// dbase attribute carrying the risk label on every outlook record.
const LABEL_FIELD: &str = "LABEL";

/// Classify an outlook shapefile by its file name.
///
/// Returns `None` for the `sig` variants and anything unrecognized.
pub fn kind_from_filename(name: &str) -> Option<HazardKind> {
    if name.contains("sig") {
        return None;
    }
    if name.contains("cat") {
        Some(HazardKind::Categorical)
    } else if name.contains("wind") {
        Some(HazardKind::Wind)
    } else if name.contains("hail") {
        Some(HazardKind::Hail)
    } else if name.contains("torn") {
        Some(HazardKind::Tornado)
    } else {
        None
    }
}

/// Load all four outlook layers from a directory of extracted
/// shapefiles. Missing any of the four kinds is an error.
pub fn load_outlook_dir(dir: &Path) -> Result<OutlookSet> {
    info!("Loading outlook shapefiles from {}", dir.display());

    let mut set = OutlookSet::default();
    let mut seen: Vec<HazardKind> = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read outlook directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "shp") {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let kind = match kind_from_filename(name) {
            Some(kind) => kind,
            None => {
                debug!("Skipping {}", name);
                continue;
            }
        };

        let features = read_features(&path)
            .with_context(|| format!("Failed to read outlook shapefile: {}", path.display()))?;
        info!("{}: {} features ({})", name, features.len(), kind);

        match kind {
            HazardKind::Categorical => set.categorical = CategoricalLayer::parse(features)?,
            HazardKind::Wind => set.wind = HazardLayer::parse(features)?,
            HazardKind::Hail => set.hail = HazardLayer::parse(features)?,
            HazardKind::Tornado => set.tornado = HazardLayer::parse(features)?,
        }
        seen.push(kind);
    }

    for kind in HazardKind::all() {
        if !seen.contains(kind) {
            bail!("outlook directory {} has no {} layer", dir.display(), kind);
        }
    }

    Ok(set)
}

/// Read all shapes + label attributes from one `.shp` file.
fn read_features(path: &Path) -> Result<Vec<Feature>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open shapefile: {}", path.display()))?;

    let mut features = Vec::new();
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.context("Error reading shape+record")?;
        let geometry = shape_to_geometry(shape)?;
        // a missing label is kept as None and rejected by the parser
        let label = match record.get(LABEL_FIELD) {
            Some(FieldValue::Character(Some(s))) => Some(s.trim().to_string()),
            _ => None,
        };
        features.push(Feature {
            label,
            geometry: Some(geometry),
        });
    }
    Ok(features)
}

/// Regroup shapefile rings (each outer ring followed by its holes) into
/// the polygon nesting the layer parsers expect.
pub fn shape_to_geometry(shape: Shape) -> Result<Geometry, DataError> {
    let polygon = match shape {
        Shape::Polygon(polygon) => polygon,
        other => {
            return Err(DataError::UnsupportedGeometry(format!(
                "{:?}",
                other.shapetype()
            )))
        }
    };

    let mut ring_sets: Vec<RingSet> = Vec::new();
    for ring in polygon.rings() {
        let coords: Vec<Coord<f64>> = ring
            .points()
            .iter()
            .map(|point| Coord {
                x: point.x,
                y: point.y,
            })
            .collect();
        let line = LineString::new(coords);

        match ring {
            PolygonRing::Outer(_) => ring_sets.push(vec![line]),
            PolygonRing::Inner(_) => match ring_sets.last_mut() {
                Some(set) => set.push(line),
                // hole with no preceding outer ring: keep it as its own set
                None => ring_sets.push(vec![line]),
            },
        }
    }

    if ring_sets.len() == 1 {
        Ok(Geometry::Polygon(ring_sets.remove(0)))
    } else {
        Ok(Geometry::MultiPolygon(ring_sets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefile::Point as ShpPoint;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(
            kind_from_filename("day1otlk_20230518_1300_cat.shp"),
            Some(HazardKind::Categorical)
        );
        assert_eq!(
            kind_from_filename("day1otlk_20230518_1300_wind.shp"),
            Some(HazardKind::Wind)
        );
        assert_eq!(
            kind_from_filename("day1otlk_20230518_1300_hail.shp"),
            Some(HazardKind::Hail)
        );
        assert_eq!(
            kind_from_filename("day1otlk_20230518_1300_torn.shp"),
            Some(HazardKind::Tornado)
        );
        assert_eq!(kind_from_filename("day1otlk_20230518_1300_sigtorn.shp"), None);
        assert_eq!(kind_from_filename("day1otlk_20230518_1300_sighail.shp"), None);
        assert_eq!(kind_from_filename("readme.txt"), None);
    }

    fn shp_ring(points: &[(f64, f64)]) -> Vec<ShpPoint> {
        let mut ring: Vec<ShpPoint> =
            points.iter().map(|&(x, y)| ShpPoint { x, y }).collect();
        ring.push(ring[0]);
        ring
    }

    #[test]
    fn test_shape_to_geometry_single_polygon_with_hole() {
        let polygon = shapefile::Polygon::with_rings(vec![
            PolygonRing::Outer(shp_ring(&[
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
            ])),
            PolygonRing::Inner(shp_ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)])),
        ]);

        let geometry = shape_to_geometry(Shape::Polygon(polygon)).unwrap();
        match &geometry {
            Geometry::Polygon(rings) => assert_eq!(rings.len(), 2),
            other => panic!("expected Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_to_geometry_two_outers_become_multipolygon() {
        let polygon = shapefile::Polygon::with_rings(vec![
            PolygonRing::Outer(shp_ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])),
            PolygonRing::Outer(shp_ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)])),
        ]);

        let geometry = shape_to_geometry(Shape::Polygon(polygon)).unwrap();
        match &geometry {
            Geometry::MultiPolygon(sets) => assert_eq!(sets.len(), 2),
            other => panic!("expected MultiPolygon, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_to_geometry_rejects_non_polygon() {
        let err = shape_to_geometry(Shape::Point(ShpPoint { x: 0.0, y: 0.0 })).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedGeometry(_)));
    }
}
