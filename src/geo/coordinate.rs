use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, Result};

/// A geographic coordinate in degrees.
///
/// Equality is exact on both fields, with no tolerance. A coordinate with a
/// NaN field is never equal to anything, itself included, so it never matches
/// in the annotation set operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

/// The maximal coordinate, used by callers as an out-of-range marker.
pub const COORDINATE_MAX: Coordinate = Coordinate::new(90.0, 180.0);

impl Coordinate {
    /// Creates a coordinate without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting values no map can show.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is not finite or the latitude lies
    /// outside `[-90, 90]`.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let reason = if !latitude.is_finite() || !longitude.is_finite() {
            Some("fields must be finite")
        } else if !(-90.0..=90.0).contains(&latitude) {
            Some("latitude must lie within [-90, 90]")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(GeometryError::InvalidCoordinate {
                latitude,
                longitude,
                reason,
            }
            .into()),
            None => Ok(Self::new(latitude, longitude)),
        }
    }

    /// Returns `true` if both fields are finite and the latitude is in range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
    }
}

#[allow(clippy::float_cmp)]
impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

// NaN coordinates break reflexivity; they are not valid map keys.
impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(field_hash(self.latitude) ^ field_hash(self.longitude));
    }
}

/// Bit pattern of `value`, with `-0.0` folded onto `0.0` since they compare equal.
#[allow(clippy::float_cmp)]
fn field_hash(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
