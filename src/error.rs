use thiserror::Error;

/// Top-level error type for the map clustering geometry helpers.
#[derive(Debug, Error)]
pub enum MapClusterError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Zoom(#[from] ZoomError),
}

/// Errors related to coordinates and map geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },
}

/// Errors related to zoom scales and clustering cell sizes.
#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("zoom scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("invalid cell size table: {0}")]
    InvalidCellSizeTable(String),
}

/// Convenience type alias for results using [`MapClusterError`].
pub type Result<T> = std::result::Result<T, MapClusterError>;
