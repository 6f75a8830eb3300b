//! Outlook evaluation: fans one location out across all four layers.

use geo::Point;
use tracing::debug;

use super::classify::{classify_categorical, classify_hazard};
use super::layer::{CategoricalLayer, HazardLayer};
use crate::models::RiskSummary;

/// The parsed layers of one outlook cycle.
///
/// Immutable once built, so a single set can serve any number of
/// concurrent per-location evaluations.
#[derive(Debug, Clone, Default)]
pub struct OutlookSet {
    pub categorical: CategoricalLayer,
    pub wind: HazardLayer,
    pub hail: HazardLayer,
    pub tornado: HazardLayer,
}

impl OutlookSet {
    /// Classify one location against all four layers and collect the
    /// results into a risk summary.
    pub fn evaluate(&self, point: Point<f64>) -> RiskSummary {
        let summary = RiskSummary {
            categorical: classify_categorical(point, &self.categorical),
            wind: classify_hazard(point, &self.wind),
            hail: classify_hazard(point, &self.hail),
            tornado: classify_hazard(point, &self.tornado),
        };

        debug!(
            "evaluated ({}, {}): categorical {:?}, wind {:?}, hail {:?}, tornado {:?}",
            point.x(),
            point.y(),
            summary.categorical.map(|l| l.code()),
            summary.wind.probability,
            summary.hail.probability,
            summary.tornado.probability,
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::models::RiskLevel;
    use crate::outlook::layer::Feature;
    use geo::{Coord, LineString};

    fn square(offset: f64, size: f64) -> Geometry {
        let coords = vec![
            Coord { x: offset, y: offset },
            Coord { x: offset + size, y: offset },
            Coord { x: offset + size, y: offset + size },
            Coord { x: offset, y: offset + size },
            Coord { x: offset, y: offset },
        ];
        Geometry::Polygon(vec![LineString::new(coords)])
    }

    #[test]
    fn test_evaluate_collects_all_kinds() {
        let outlook = OutlookSet {
            categorical: CategoricalLayer::parse(vec![
                Feature::new("MRGL", square(0.0, 10.0)),
                Feature::new("SLGT", square(2.0, 4.0)),
            ])
            .unwrap(),
            wind: HazardLayer::parse(vec![
                Feature::new("0.15", square(0.0, 10.0)),
                Feature::new("SIGN", square(2.0, 4.0)),
            ])
            .unwrap(),
            hail: HazardLayer::parse(vec![Feature::new("0.05", square(0.0, 10.0))])
                .unwrap(),
            tornado: HazardLayer::parse(vec![Feature::new("0.02", square(50.0, 1.0))])
                .unwrap(),
        };

        let summary = outlook.evaluate(Point::new(3.0, 3.0));
        assert_eq!(summary.categorical, Some(RiskLevel::Slight));
        assert_eq!(summary.wind.probability.as_deref(), Some("0.15"));
        assert!(summary.wind.significant);
        assert_eq!(summary.hail.probability.as_deref(), Some("0.05"));
        assert!(!summary.hail.significant);
        assert_eq!(summary.tornado.probability, None);
    }

    #[test]
    fn test_evaluate_clear_location() {
        let outlook = OutlookSet::default();
        let summary = outlook.evaluate(Point::new(0.0, 0.0));
        assert!(summary.is_clear());
    }
}
