//! Spherical Web Mercator projection between coordinates and map points.
//!
//! The projected world is a square of [`MAP_SIZE_WORLD`] map points with the
//! origin at the north-west corner, `x` growing east and `y` growing south.

use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::geometry::MapSize;
use crate::math::{clamped, MapPoint};

use super::{Coordinate, COORDINATE_MAX};

/// Side length of the projected world in map points (2^28).
pub const MAP_WORLD_WIDTH: f64 = 268_435_456.0;

/// Size of the projected world.
pub const MAP_SIZE_WORLD: MapSize = MapSize::new(MAP_WORLD_WIDTH, MAP_WORLD_WIDTH);

/// Latitude at which the Mercator world becomes square; poles clamp to it.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// [`COORDINATE_MAX`] projected into map space.
pub static MAP_POINT_MAX: LazyLock<MapPoint> =
    LazyLock::new(|| map_point_for_coordinate(COORDINATE_MAX));

/// Projects a geographic coordinate into map space.
///
/// Latitudes beyond [`MAX_MERCATOR_LATITUDE`] land on the world's top or
/// bottom edge. Longitudes are not wrapped.
#[must_use]
pub fn map_point_for_coordinate(coordinate: Coordinate) -> MapPoint {
    let latitude = clamped(
        coordinate.latitude,
        -MAX_MERCATOR_LATITUDE,
        MAX_MERCATOR_LATITUDE,
    );
    if latitude.to_bits() != coordinate.latitude.to_bits() {
        tracing::trace!(
            latitude = coordinate.latitude,
            clamped = latitude,
            "latitude clamped to mercator range"
        );
    }

    let x = (coordinate.longitude + 180.0) / 360.0 * MAP_SIZE_WORLD.width;
    let sin_lat = latitude.to_radians().sin();
    let psi = ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);
    // Rounding at the clamped latitude can overshoot the edge by a fraction of a point.
    let y = clamped(
        (0.5 - psi) * MAP_SIZE_WORLD.height,
        0.0,
        MAP_SIZE_WORLD.height,
    );
    MapPoint::new(x, y)
}

/// Inverse of [`map_point_for_coordinate`].
#[must_use]
pub fn coordinate_for_map_point(point: MapPoint) -> Coordinate {
    let longitude = point.x / MAP_SIZE_WORLD.width * 360.0 - 180.0;
    let psi = PI * (1.0 - 2.0 * point.y / MAP_SIZE_WORLD.height);
    let latitude = psi.sinh().atan().to_degrees();
    Coordinate::new(latitude, longitude)
}

impl Coordinate {
    /// Projects this coordinate into map space.
    #[must_use]
    pub fn to_map_point(&self) -> MapPoint {
        map_point_for_coordinate(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MapRect;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_world_center() {
        let p = map_point_for_coordinate(Coordinate::new(0.0, 0.0));
        assert_relative_eq!(p.x, MAP_WORLD_WIDTH / 2.0);
        assert_relative_eq!(p.y, MAP_WORLD_WIDTH / 2.0);
    }

    #[test]
    fn antimeridian_maps_to_world_edges() {
        let west = map_point_for_coordinate(Coordinate::new(0.0, -180.0));
        let east = map_point_for_coordinate(Coordinate::new(0.0, 180.0));
        assert!(west.x.abs() < 1e-6);
        assert_relative_eq!(east.x, MAP_WORLD_WIDTH);
    }

    #[test]
    fn north_is_up() {
        let north = map_point_for_coordinate(Coordinate::new(45.0, 0.0));
        let south = map_point_for_coordinate(Coordinate::new(-45.0, 0.0));
        assert!(north.y < south.y);
        assert_relative_eq!(north.y + south.y, MAP_WORLD_WIDTH, max_relative = 1e-12);
    }

    #[test]
    fn max_point_is_north_east_corner() {
        let p = *MAP_POINT_MAX;
        assert_relative_eq!(p.x, MAP_WORLD_WIDTH);
        assert!(p.y >= 0.0, "y = {}", p.y);
        assert!(p.y.abs() < 1e-6, "y = {}", p.y);
        assert!(MapRect::world().contains_point(&p));
    }

    #[test]
    fn poles_clamp_to_world_edges() {
        let north = map_point_for_coordinate(Coordinate::new(90.0, 0.0));
        let south = map_point_for_coordinate(Coordinate::new(-90.0, 0.0));
        assert!(north.y >= 0.0 && north.y.abs() < 1e-6, "north y = {}", north.y);
        assert!(south.y <= MAP_WORLD_WIDTH, "south y = {}", south.y);
        assert_relative_eq!(south.y, MAP_WORLD_WIDTH, max_relative = 1e-9);
    }

    #[test]
    fn latitudes_past_mercator_limit_stay_inside_world() {
        let world = MapRect::world();
        for &lat in &[85.06, 89.9, 90.0, -85.06, -89.9, -90.0] {
            for &lon in &[-180.0, -179.9, 0.0, 179.9, 180.0] {
                let c = Coordinate::new(lat, lon);
                assert!(world.contains(c), "({lat}, {lon}) -> {:?}", c.to_map_point());
            }
        }
    }

    #[test]
    fn inverse_recovers_coordinate() {
        for &(lat, lon) in &[(0.0, 0.0), (51.5, -0.12), (-33.86, 151.21), (85.0, 179.9)] {
            let c = Coordinate::new(lat, lon);
            let back = coordinate_for_map_point(c.to_map_point());
            assert_relative_eq!(back.latitude, lat, epsilon = 1e-9);
            assert_relative_eq!(back.longitude, lon, epsilon = 1e-9);
        }
    }
}
