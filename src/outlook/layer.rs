//! Parsing labeled outlook features into ranked risk layers.

use crate::error::DataError;
use crate::geometry::Geometry;
use crate::models::RiskLevel;

/// Label marking a significant-severity polygon in hazard layers.
pub const SIGNIFICANT_LABEL: &str = "SIGN";

/// One raw outlook feature: a label attribute plus its geometry.
///
/// This is the iteration shape the parsers require from any source
/// (shapefile reader, GeoJSON, test fixtures). Either part may be
/// missing in malformed input; parsing rejects such features.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub label: Option<String>,
    pub geometry: Option<Geometry>,
}

impl Feature {
    pub fn new(label: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            label: Some(label.into()),
            geometry: Some(geometry),
        }
    }

    fn into_parts(self) -> Result<(String, Geometry), DataError> {
        let label = self.label.ok_or(DataError::MissingLabel)?;
        let geometry = self.geometry.ok_or(DataError::MissingGeometry)?;
        Ok((label, geometry))
    }
}

/// Categorical outlook layer: one optional zone per risk level.
///
/// All five levels are always representable; a level with no zone
/// issued this cycle stays `None` (absent, never an empty geometry).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalLayer {
    pub marginal: Option<Geometry>,
    pub slight: Option<Geometry>,
    pub enhanced: Option<Geometry>,
    pub moderate: Option<Geometry>,
    pub high: Option<Geometry>,
}

impl CategoricalLayer {
    /// Build the layer from raw features.
    ///
    /// Features labeled with one of the five categorical codes fill the
    /// matching slot; any other label is ignored. A feature missing its
    /// label or geometry fails the whole parse.
    pub fn parse<I>(features: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut layer = Self::default();
        for feature in features {
            let (label, geometry) = feature.into_parts()?;
            if let Some(level) = RiskLevel::from_code(&label) {
                layer.set(level, geometry);
            }
        }
        Ok(layer)
    }

    /// Set the zone for a given level
    pub fn set(&mut self, level: RiskLevel, geometry: Geometry) {
        match level {
            RiskLevel::Marginal => self.marginal = Some(geometry),
            RiskLevel::Slight => self.slight = Some(geometry),
            RiskLevel::Enhanced => self.enhanced = Some(geometry),
            RiskLevel::Moderate => self.moderate = Some(geometry),
            RiskLevel::High => self.high = Some(geometry),
        }
    }

    /// Get the zone for a given level
    pub fn get(&self, level: RiskLevel) -> Option<&Geometry> {
        match level {
            RiskLevel::Marginal => self.marginal.as_ref(),
            RiskLevel::Slight => self.slight.as_ref(),
            RiskLevel::Enhanced => self.enhanced.as_ref(),
            RiskLevel::Moderate => self.moderate.as_ref(),
            RiskLevel::High => self.high.as_ref(),
        }
    }

    /// True when no level has a zone this cycle
    pub fn is_empty(&self) -> bool {
        RiskLevel::all().iter().all(|level| self.get(*level).is_none())
    }
}

/// Probabilistic hazard layer: probability bands in upstream feature
/// order, plus significant-severity overlays kept as a separate list.
///
/// The overlays are never ranked against the bands; they only feed the
/// significant flag during classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HazardLayer {
    bands: Vec<(String, Geometry)>,
    significant: Vec<Geometry>,
}

impl HazardLayer {
    /// Build the layer from raw features.
    ///
    /// A feature labeled `SIGN` appends to the overlay list in input
    /// order. Any other feature is stored as a probability band under
    /// its literal label; a repeated label replaces the earlier
    /// geometry in place, keeping its original position.
    pub fn parse<I>(features: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut layer = Self::default();
        for feature in features {
            let (label, geometry) = feature.into_parts()?;
            if label == SIGNIFICANT_LABEL {
                layer.significant.push(geometry);
            } else if let Some(index) = layer
                .bands
                .iter()
                .position(|(existing, _)| *existing == label)
            {
                layer.bands[index].1 = geometry;
            } else {
                layer.bands.push((label, geometry));
            }
        }
        Ok(layer)
    }

    /// Probability bands in stored (upstream feature) order
    pub fn bands(&self) -> &[(String, Geometry)] {
        &self.bands
    }

    /// Significant-severity overlay geometries in input order
    pub fn significant(&self) -> &[Geometry] {
        &self.significant
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty() && self.significant.is_empty()
    }
}
