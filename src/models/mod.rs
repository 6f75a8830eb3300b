//! Core data models for outlook classification.

pub mod risk;
pub mod summary;

pub use risk::{HazardKind, RiskLevel};
pub use summary::{HazardHit, RiskSummary};
