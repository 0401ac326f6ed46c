//! Great-circle navigation on a spherical Earth.
//!
//! All formulas use [`EARTH_RADIUS_METERS`]; results carry the usual
//! spherical-model error of up to about 0.5% against a geodesic.

use std::f64::consts::TAU;

use crate::math::EARTH_RADIUS_METERS;

use super::Coordinate;

/// Returns the coordinate reached by travelling `distance_meters` from
/// `origin` along the initial bearing `bearing_radians`.
///
/// The bearing is measured clockwise from true north.
#[must_use]
pub fn destination_coordinate(
    origin: Coordinate,
    bearing_radians: f64,
    distance_meters: f64,
) -> Coordinate {
    let angular = distance_meters / EARTH_RADIUS_METERS;
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * angular.cos()
        + lat1.cos() * angular.sin() * bearing_radians.cos())
    .asin();
    let lon2 = lon1
        + (bearing_radians.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
}

impl Coordinate {
    /// Returns the coordinate `distance_meters` away along `bearing_radians`.
    ///
    /// See [`destination_coordinate`].
    #[must_use]
    pub fn destination(&self, bearing_radians: f64, distance_meters: f64) -> Coordinate {
        destination_coordinate(*self, bearing_radians, distance_meters)
    }

    /// Great-circle distance to `other` in meters (haversine).
    #[must_use]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
    }

    /// Initial bearing towards `other`, in radians clockwise from north,
    /// normalized to `[0, 2π)`.
    #[must_use]
    pub fn initial_bearing_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        y.atan2(x).rem_euclid(TAU)
    }
}
