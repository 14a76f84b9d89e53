use rootpath_core::math::{Box2D, Point, Rect};

use crate::Segment;

/// A resolution-independent 2D outline made of lines and bezier curves.
///
/// A [`Path`] only ever grows by appending segments, and it keeps track of
/// the bounding box of every point that was appended to it. Cloning a path
/// performs a deep copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    segments: Vec<Segment>,
    bounds: Box2D,
    use_non_zero_winding: bool,
}

impl Path {
    /// Creates an empty path which uses the non-zero winding rule.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            bounds: Box2D::zero(),
            use_non_zero_winding: true,
        }
    }

    /// Creates an empty path with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Removes all segments. The winding rule is left untouched.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.bounds = Box2D::zero();
    }

    /// Exchanges the contents of two paths without copying.
    pub fn swap_with(&mut self, other: &mut Path) {
        std::mem::swap(self, other);
    }

    /// Returns `true` if the path doesn't contain any lines or curves.
    ///
    /// A path made only of [`Segment::MoveTo`] elements is empty.
    pub fn is_empty(&self) -> bool {
        !self.segments.iter().any(Segment::is_drawing)
    }

    /// The number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The smallest rectangle containing every point of the path, including
    /// bezier control points.
    pub fn bounds(&self) -> Rect {
        self.bounds.to_rect()
    }

    pub fn bounds_box(&self) -> Box2D {
        self.bounds
    }

    /// Selects the non-zero (`true`) or even-odd (`false`) fill rule.
    pub fn set_using_non_zero_winding(&mut self, non_zero: bool) {
        self.use_non_zero_winding = non_zero;
    }

    pub fn is_using_non_zero_winding(&self) -> bool {
        self.use_non_zero_winding
    }

    /// The point the next segment will start from.
    ///
    /// Right after a [`Segment::Close`] this is the point of the most recent
    /// [`Segment::MoveTo`]. An empty path reports the origin.
    pub fn current_position(&self) -> Point {
        match self.segments.last() {
            None => Point::zero(),
            Some(Segment::Close) => self
                .segments
                .iter()
                .rev()
                .find_map(|s| match s {
                    Segment::MoveTo(pos) => Some(*pos),
                    _ => None,
                })
                .unwrap_or_else(Point::zero),
            Some(last) => last.end_point().unwrap_or_else(Point::zero),
        }
    }

    /// Begins a new sub-path at `pos`.
    pub fn start_new_sub_path(&mut self, pos: impl Into<Point>) {
        self.push(Segment::MoveTo(pos.into()));
    }

    /// Adds a straight line from the current position to `pos`.
    ///
    /// If the path is empty, a sub-path is first started at the origin.
    pub fn line_to(&mut self, pos: impl Into<Point>) {
        self.ensure_sub_path();
        self.push(Segment::LineTo(pos.into()));
    }

    /// Adds a quadratic bezier from the current position to `pos`.
    pub fn quadratic_to(&mut self, ctrl: impl Into<Point>, pos: impl Into<Point>) {
        self.ensure_sub_path();
        self.push(Segment::QuadTo {
            ctrl: ctrl.into(),
            pos: pos.into(),
        });
    }

    /// Adds a cubic bezier from the current position to `pos`.
    pub fn cubic_to(
        &mut self,
        h1_pos: impl Into<Point>,
        h2_pos: impl Into<Point>,
        pos: impl Into<Point>,
    ) {
        self.ensure_sub_path();
        self.push(Segment::CubicTo {
            h1_pos: h1_pos.into(),
            h2_pos: h2_pos.into(),
            pos: pos.into(),
        });
    }

    /// Closes the current sub-path with a line back to its starting point.
    ///
    /// Does nothing on an empty path or if the sub-path is already closed.
    pub fn close_sub_path(&mut self) {
        if !matches!(self.segments.last(), None | Some(Segment::Close)) {
            self.segments.push(Segment::Close);
        }
    }

    /// Appends every segment of `other` to this path.
    pub fn add_path(&mut self, other: &Path) {
        self.segments.reserve(other.segments.len());

        for segment in other.iter() {
            self.push_segment(*segment);
        }
    }

    /// Appends a segment through the same entry points the builder methods
    /// use, so all of the path invariants hold.
    pub(crate) fn push_segment(&mut self, segment: Segment) {
        match segment {
            Segment::MoveTo(pos) => self.start_new_sub_path(pos),
            Segment::LineTo(pos) => self.line_to(pos),
            Segment::QuadTo { ctrl, pos } => self.quadratic_to(ctrl, pos),
            Segment::CubicTo {
                h1_pos,
                h2_pos,
                pos,
            } => self.cubic_to(h1_pos, h2_pos, pos),
            Segment::Close => self.close_sub_path(),
        }
    }

    /// Overwrites the segment at `index` in place. The bounds are left as
    /// they are.
    pub(crate) fn replace_segment(&mut self, index: usize, segment: Segment) {
        self.segments[index] = segment;
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub(crate) fn set_bounds(&mut self, bounds: Box2D) {
        self.bounds = bounds;
    }

    fn ensure_sub_path(&mut self) {
        if self.segments.is_empty() {
            self.start_new_sub_path(Point::zero());
        }
    }

    fn push(&mut self, segment: Segment) {
        let mut seeded = !self.segments.is_empty();
        let bounds = &mut self.bounds;

        segment.for_each_point(|p| {
            debug_assert!(
                p.x.is_finite() && p.y.is_finite(),
                "non-finite coordinate added to path: {p:?}"
            );

            if seeded {
                bounds.min = bounds.min.min(p);
                bounds.max = bounds.max.max(p);
            } else {
                *bounds = Box2D::new(p, p);
                seeded = true;
            }
        });

        self.segments.push(segment);
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Extend<Segment> for Path {
    fn extend<T: IntoIterator<Item = Segment>>(&mut self, iter: T) {
        for segment in iter {
            self.push_segment(segment);
        }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        let mut path = Path::new();
        path.extend(iter);
        path
    }
}
