use crate::error::{Result, ZoomError};
use crate::geo::MAP_SIZE_WORLD;

use super::{cell_size, CellSizeTable};

/// Side length of a map tile in screen pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Converts a zoom scale (screen pixels per map point) to a zoom level.
///
/// Computes `max(0, log2(world_width / 256) + floor(log2(scale) + 0.5))`,
/// i.e. the nearest integer level, never below 0. A scale at which one
/// 256-pixel tile spans the whole world gives level 0.
///
/// `scale` should be finite and positive; zero and NaN yield 0.
#[must_use]
pub fn zoom_level(scale: f64) -> f64 {
    let total_tiles_at_max_zoom = MAP_SIZE_WORLD.width / TILE_SIZE;
    let zoom_level_at_max_zoom = total_tiles_at_max_zoom.log2();
    (zoom_level_at_max_zoom + (scale.log2() + 0.5).floor()).max(0.0)
}

/// A validated zoom scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f64);

impl ZoomScale {
    /// Creates a zoom scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not finite or not positive.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ZoomError::InvalidScale(scale).into());
        }
        Ok(Self(scale))
    }

    /// Creates the scale at which a viewport `viewport_width` pixels wide
    /// shows `visible_map_width` map points.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting ratio is not finite and positive.
    pub fn from_viewport(viewport_width: f64, visible_map_width: f64) -> Result<Self> {
        Self::new(viewport_width / visible_map_width)
    }

    /// Returns the raw scale.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// See [`zoom_level`].
    #[must_use]
    pub fn zoom_level(self) -> f64 {
        zoom_level(self.0)
    }

    /// Cell size for this scale's zoom level using the default table.
    #[must_use]
    pub fn cell_size(self) -> f64 {
        cell_size(self.zoom_level())
    }

    /// Cell size for this scale's zoom level using `table`.
    #[must_use]
    pub fn cell_size_in(self, table: &CellSizeTable) -> f64 {
        table.cell_size(self.zoom_level())
    }
}

impl TryFrom<f64> for ZoomScale {
    type Error = crate::error::MapClusterError;

    fn try_from(scale: f64) -> Result<Self> {
        Self::new(scale)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geo::projection::MAP_WORLD_WIDTH;

    #[test]
    fn single_tile_world_is_level_zero() {
        let scale = TILE_SIZE / MAP_WORLD_WIDTH;
        assert!(zoom_level(scale).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_scale_is_max_zoom() {
        assert!((zoom_level(1.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn each_doubling_adds_a_level() {
        assert!((zoom_level(0.5) - 19.0).abs() < f64::EPSILON);
        assert!((zoom_level(2.0) - 21.0).abs() < f64::EPSILON);
        assert!((zoom_level(1.0 / 256.0) - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_nearest_level() {
        // log2(0.7) = -0.51, rounds to -1.
        assert!((zoom_level(0.7) - 19.0).abs() < f64::EPSILON);
        // log2(0.75) = -0.42, rounds to 0.
        assert!((zoom_level(0.75) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiny_scales_floor_at_zero() {
        assert!(zoom_level(1e-12).abs() < f64::EPSILON);
        assert!(zoom_level(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_scale_rejects_invalid_values() {
        assert!(ZoomScale::new(0.0).is_err());
        assert!(ZoomScale::new(-1.0).is_err());
        assert!(ZoomScale::new(f64::NAN).is_err());
        assert!(ZoomScale::new(f64::INFINITY).is_err());
        assert!(ZoomScale::try_from(0.25).is_ok());
    }

    #[test]
    fn zoom_scale_from_viewport() {
        // 1024 px showing 2^20 map points: 2^-10 px per point, level 10.
        let scale = ZoomScale::from_viewport(1024.0, 1_048_576.0).unwrap();
        assert!((scale.zoom_level() - 10.0).abs() < f64::EPSILON);
        assert!((scale.cell_size() - 88.0).abs() < f64::EPSILON);
        assert!(ZoomScale::from_viewport(1024.0, 0.0).is_err());
    }

    #[test]
    fn zoom_scale_cell_size_follows_level() {
        let scale = ZoomScale::new(0.25).unwrap();
        assert!((scale.zoom_level() - 18.0).abs() < f64::EPSILON);
        assert!((scale.cell_size() - 32.0).abs() < f64::EPSILON);
        let table = CellSizeTable::uniform(50.0).unwrap();
        assert!((scale.cell_size_in(&table) - 50.0).abs() < f64::EPSILON);
        assert!((scale.value() - 0.25).abs() < f64::EPSILON);
    }
}
