//! Geometry, projection and collection helpers for map annotation clustering.
//!
//! Coordinates project into a square Web Mercator map space where
//! [`MapRect`]s live; zoom scales map to zoom levels and clustering cell
//! sizes; annotation lists support coordinate-keyed set operations.

pub mod annotation;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod math;
pub mod zoom;

pub use annotation::{Annotation, AnnotationVecExt, PointAnnotation};
pub use error::{GeometryError, MapClusterError, Result, ZoomError};
pub use geo::{destination_coordinate, Coordinate, COORDINATE_MAX, MAP_POINT_MAX, MAP_SIZE_WORLD};
pub use geometry::{MapRect, MapSize};
pub use math::{clamped, MapPoint};
pub use zoom::{cell_size, zoom_level, CellSizeStep, CellSizeTable, ZoomScale};
