//! Per-location risk summary assembled by the outlook evaluation.

use serde::Serialize;

use super::RiskLevel;

/// Result of classifying one point against one probabilistic hazard
/// layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardHit {
    /// Probability label of the first band containing the point,
    /// e.g. "0.15". `None` when no band matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<String>,

    /// Whether the point also fell inside a significant-severity
    /// overlay polygon.
    pub significant: bool,
}

/// Risk summary for one location and one outlook cycle.
///
/// Built fresh per evaluation and handed to the notification step;
/// nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Highest categorical level containing the location, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical: Option<RiskLevel>,

    pub wind: HazardHit,

    pub hail: HazardHit,

    pub tornado: HazardHit,
}

impl RiskSummary {
    /// True when no layer produced a match for this location
    pub fn is_clear(&self) -> bool {
        self.categorical.is_none()
            && self.wind == HazardHit::default()
            && self.hail == HazardHit::default()
            && self.tornado == HazardHit::default()
    }
}
