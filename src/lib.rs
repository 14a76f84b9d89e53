pub use rootpath_core::*;
pub use rootpath_geometry::*;

pub mod prelude {
    pub use crate::math::{
        degrees, point, radians, rect, size, vector, Angle, Box2D, Point, Rect, Size, Transform, Vector,
    };
    pub use crate::{line, BubbleSide, BubbleTail, Justification, Line, Path, Segment};
}
