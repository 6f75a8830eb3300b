//! Error taxonomy for outlook ingestion.

use thiserror::Error;

/// Malformed or unexpected input shape.
///
/// Never retried internally; a `DataError` aborts the evaluation unit
/// that hit it (one layer, one location) rather than producing a
/// partially wrong classification.
#[derive(Debug, Error)]
pub enum DataError {
    /// Feature record has no label attribute
    #[error("outlook feature is missing its label attribute")]
    MissingLabel,

    /// Feature record has no geometry, or the geometry object is
    /// missing its type tag or coordinates
    #[error("outlook feature is missing its geometry")]
    MissingGeometry,

    /// Geometry declared a type other than Polygon/MultiPolygon
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    /// Coordinate nesting did not match the declared geometry type
    #[error("malformed geometry coordinates")]
    MalformedCoordinates,
}
