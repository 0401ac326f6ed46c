use crate::geo::{map_point_for_coordinate, Coordinate, MAP_SIZE_WORLD};
use crate::math::MapPoint;

/// Width and height in map points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl MapSize {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in projected map space.
///
/// The stored size is never negative: constructors standardize their input
/// so that `origin` is the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    origin: MapPoint,
    size: MapSize,
}

impl MapRect {
    /// Creates a rectangle from an origin and a size.
    ///
    /// A negative width or height extends the rectangle towards smaller
    /// coordinates, and the origin moves to the minimum corner.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width < 0.0 {
            (x + width, -width)
        } else {
            (x, width)
        };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        Self {
            origin: MapPoint::new(x, y),
            size: MapSize::new(width, height),
        }
    }

    /// Creates a rectangle from an origin point and a size.
    #[must_use]
    pub fn from_origin_size(origin: MapPoint, size: MapSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Creates a rectangle spanning two corners given in any order.
    #[must_use]
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(
            min_x.min(max_x),
            min_y.min(max_y),
            (max_x - min_x).abs(),
            (max_y - min_y).abs(),
        )
    }

    /// The whole projected world.
    #[must_use]
    pub fn world() -> Self {
        Self::from_origin_size(MapPoint::origin(), MAP_SIZE_WORLD)
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn origin(&self) -> &MapPoint {
        &self.origin
    }

    /// Returns the size.
    #[must_use]
    pub fn size(&self) -> MapSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> MapPoint {
        MapPoint::new(self.mid_x(), self.mid_y())
    }

    /// Returns `true` if the rectangles overlap. Touching edges count.
    #[must_use]
    pub fn intersects(&self, other: &MapRect) -> bool {
        !(other.min_x() > self.max_x()
            || other.max_x() < self.min_x()
            || other.min_y() > self.max_y()
            || other.max_y() < self.min_y())
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &MapPoint) -> bool {
        (self.min_x()..=self.max_x()).contains(&point.x)
            && (self.min_y()..=self.max_y()).contains(&point.y)
    }

    /// Returns `true` if the projected `coordinate` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.contains_point(&map_point_for_coordinate(coordinate))
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &MapRect) -> MapRect {
        MapRect::from_corners(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Overlapping region, or `None` if the rectangles are disjoint.
    ///
    /// Rectangles that only touch yield a zero-width or zero-height result.
    #[must_use]
    pub fn intersection(&self, other: &MapRect) -> Option<MapRect> {
        if !self.intersects(other) {
            return None;
        }
        Some(MapRect::from_corners(
            self.min_x().max(other.min_x()),
            self.min_y().max(other.min_y()),
            self.max_x().min(other.max_x()),
            self.max_y().min(other.max_y()),
        ))
    }
}
