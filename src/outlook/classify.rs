//! Point classification against parsed risk layers.

use geo::Point;

use super::layer::{CategoricalLayer, HazardLayer};
use crate::models::{HazardHit, RiskLevel};

/// Find the highest-severity categorical level whose zone contains the
/// point.
///
/// Levels are scanned from `High` down to `Marginal` and the first
/// containment match wins, so a point inside overlapping zones always
/// classifies at the highest overlapping severity.
pub fn classify_categorical(point: Point<f64>, layer: &CategoricalLayer) -> Option<RiskLevel> {
    for level in RiskLevel::all().iter().rev() {
        if let Some(zone) = layer.get(*level) {
            if zone.contains(point) {
                return Some(*level);
            }
        }
    }
    None
}

/// Classify the point against one probabilistic hazard layer.
///
/// Every significant overlay is checked and only sets the flag; it
/// never assigns a label. Probability bands are scanned in the layer's
/// stored order (upstream feature order) and the first containment
/// match assigns the label and stops the scan.
pub fn classify_hazard(point: Point<f64>, layer: &HazardLayer) -> HazardHit {
    let significant = layer
        .significant()
        .iter()
        .any(|overlay| overlay.contains(point));

    let probability = layer
        .bands()
        .iter()
        .find(|(_, geometry)| geometry.contains(point))
        .map(|(label, _)| label.clone());

    HazardHit {
        probability,
        significant,
    }
}
