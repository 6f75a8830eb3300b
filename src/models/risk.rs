//! Risk level and hazard kind enumerations.

use serde::{Deserialize, Serialize};

/// SPC categorical risk levels for the day-1 convective outlook.
/// See: https://www.spc.noaa.gov/misc/about.html
///
/// Declaration order is ascending severity, so the derived `Ord` makes
/// `Marginal < Slight < Enhanced < Moderate < High` and "highest
/// severity wins" comparisons can lean on plain `max`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Marginal risk (MRGL)
    #[serde(rename = "MRGL")]
    Marginal,
    /// Slight risk (SLGT)
    #[serde(rename = "SLGT")]
    Slight,
    /// Enhanced risk (ENH)
    #[serde(rename = "ENH")]
    Enhanced,
    /// Moderate risk (MDT)
    #[serde(rename = "MDT")]
    Moderate,
    /// High risk (HIGH)
    #[serde(rename = "HIGH")]
    High,
}

impl RiskLevel {
    /// Convert an outlook LABEL code to a RiskLevel
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MRGL" => Some(RiskLevel::Marginal),
            "SLGT" => Some(RiskLevel::Slight),
            "ENH" => Some(RiskLevel::Enhanced),
            "MDT" => Some(RiskLevel::Moderate),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Get the outlook LABEL code for this level
    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::Marginal => "MRGL",
            RiskLevel::Slight => "SLGT",
            RiskLevel::Enhanced => "ENH",
            RiskLevel::Moderate => "MDT",
            RiskLevel::High => "HIGH",
        }
    }

    /// Get all risk levels in ascending severity order
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::Marginal,
            RiskLevel::Slight,
            RiskLevel::Enhanced,
            RiskLevel::Moderate,
            RiskLevel::High,
        ]
    }

    /// Lowercase prose name for this level ("marginal", "slight", ...)
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Marginal => "marginal",
            RiskLevel::Slight => "slight",
            RiskLevel::Enhanced => "enhanced",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// The four day-1 outlook layers a location is classified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    /// Overall categorical risk (MRGL..HIGH)
    Categorical,
    /// Damaging wind gust probability
    Wind,
    /// Severe hail probability
    Hail,
    /// Tornado probability
    Tornado,
}

impl HazardKind {
    /// Get all hazard kinds, categorical first
    pub fn all() -> &'static [HazardKind] {
        &[
            HazardKind::Categorical,
            HazardKind::Wind,
            HazardKind::Hail,
            HazardKind::Tornado,
        ]
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardKind::Categorical => write!(f, "categorical"),
            HazardKind::Wind => write!(f, "wind"),
            HazardKind::Hail => write!(f, "hail"),
            HazardKind::Tornado => write!(f, "tornado"),
        }
    }
}
