mod clamp;

pub use clamp::clamped;

/// Planar point in projected map space.
pub type MapPoint = nalgebra::Point2<f64>;

/// Mean Earth radius in meters used by the spherical great-circle formulas.
pub const EARTH_RADIUS_METERS: f64 = 6_372_797.6;
