//! Zoom scale, zoom level and clustering cell size.
//!
//! A zoom scale is the number of screen pixels per map point. It maps to an
//! integer zoom level, and the zoom level maps to the side length of the grid
//! cells that nearby annotations are bucketed into.

mod cell_size;
mod scale;

pub use cell_size::{cell_size, CellSizeStep, CellSizeTable};
pub use scale::{zoom_level, ZoomScale, TILE_SIZE};
