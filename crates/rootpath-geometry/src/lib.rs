mod codec;
mod flatten;
mod path;
mod rounded;
mod segment;
mod shapes;
mod transform;

pub mod error;

pub use error::{DecodeError, ParseError};
pub use hit_test::DEFAULT_TOLERANCE_FOR_TESTING;
pub use path::Path;
pub use rounded::MIN_CORNER_RADIUS;
pub use segment::Segment;
pub use shapes::{BubbleSide, BubbleTail, ELLIPSE_ANGULAR_INCREMENT};

pub use lyon::geom as lyon_geom;

/// A straight line segment between two points.
///
/// Alias for ```lyon::geom::LineSegment<f32>```.
pub type Line = lyon::geom::LineSegment<f32>;

/// Shorthand for `Line { from, to }`.
#[inline]
pub fn line(from: rootpath_core::math::Point, to: rootpath_core::math::Point) -> Line {
    Line { from, to }
}
