use rootpath_core::math::{Point, Transform};

/// A single element of a [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Starts a new sub-path at the given point.
    MoveTo(Point),
    /// A straight line from the current position.
    LineTo(Point),
    /// A quadratic bezier from the current position.
    QuadTo { ctrl: Point, pos: Point },
    /// A cubic bezier from the current position.
    CubicTo {
        h1_pos: Point,
        h2_pos: Point,
        pos: Point,
    },
    /// Closes the current sub-path with a straight line back to the point of
    /// its [`Segment::MoveTo`].
    Close,
}

impl Segment {
    /// The point this segment finishes at, or `None` for [`Segment::Close`].
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Segment::MoveTo(pos) | Segment::LineTo(pos) => Some(*pos),
            Segment::QuadTo { pos, .. } | Segment::CubicTo { pos, .. } => Some(*pos),
            Segment::Close => None,
        }
    }

    /// Calls `f` with every control and end point of this segment, in storage
    /// order.
    pub fn for_each_point(&self, mut f: impl FnMut(Point)) {
        match *self {
            Segment::MoveTo(pos) | Segment::LineTo(pos) => f(pos),
            Segment::QuadTo { ctrl, pos } => {
                f(ctrl);
                f(pos);
            }
            Segment::CubicTo {
                h1_pos,
                h2_pos,
                pos,
            } => {
                f(h1_pos);
                f(h2_pos);
                f(pos);
            }
            Segment::Close => {}
        }
    }

    /// Returns `true` for segments that draw something.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Segment::LineTo(_) | Segment::QuadTo { .. } | Segment::CubicTo { .. }
        )
    }

    /// Applies `f` to every point of this segment.
    pub(crate) fn for_each_point_mut(&mut self, mut f: impl FnMut(&mut Point)) {
        match self {
            Segment::MoveTo(pos) | Segment::LineTo(pos) => f(pos),
            Segment::QuadTo { ctrl, pos } => {
                f(ctrl);
                f(pos);
            }
            Segment::CubicTo {
                h1_pos,
                h2_pos,
                pos,
            } => {
                f(h1_pos);
                f(h2_pos);
                f(pos);
            }
            Segment::Close => {}
        }
    }

    /// Returns a copy of this segment with every point mapped through `t`.
    pub fn transformed(mut self, t: &Transform) -> Self {
        self.for_each_point_mut(|p| *p = t.transform_point(*p));
        self
    }
}
