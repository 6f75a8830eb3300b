//! spc-outlook - SPC convective outlook classification
//!
//! Parses the Storm Prediction Center day-1 outlook layers and resolves
//! the severe-weather risk at given points.

pub mod config;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod models;
pub mod outlook;
pub mod report;

pub use error::DataError;
pub use geometry::Geometry;
pub use models::{HazardHit, HazardKind, RiskLevel, RiskSummary};
pub use outlook::{CategoricalLayer, Feature, HazardLayer, OutlookSet};
