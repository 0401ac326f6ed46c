mod coordinate;
pub mod great_circle;
pub mod projection;

pub use coordinate::{Coordinate, COORDINATE_MAX};
pub use great_circle::destination_coordinate;
pub use projection::{
    coordinate_for_map_point, map_point_for_coordinate, MAP_POINT_MAX, MAP_SIZE_WORLD,
};
