mod map_rect;

pub use map_rect::{MapRect, MapSize};
