//! Convective outlook parsing and point classification.
//!
//! Turns the labeled polygon features of one outlook cycle into ranked
//! risk layers and resolves which risk band (if any) contains a point.

mod classify;
mod layer;
mod service;

pub use classify::{classify_categorical, classify_hazard};
pub use layer::{CategoricalLayer, Feature, HazardLayer, SIGNIFICANT_LABEL};
pub use service::OutlookSet;
