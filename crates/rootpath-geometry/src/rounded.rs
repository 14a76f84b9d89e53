use rootpath_core::math::{point, Point};

use crate::{Path, Segment};

/// Corner radii at or below this leave the path untouched.
pub const MIN_CORNER_RADIUS: f32 = 0.01;

/// The fraction of the way from `join` to `other` at which a fillet of
/// `radius` starts or ends, or `None` for a zero-length edge.
fn fillet_point(join: Point, other: Point, radius: f32) -> Option<Point> {
    // Computed in f64 and rounded to f32 at the end.
    let dx = f64::from(other.x) - f64::from(join.x);
    let dy = f64::from(other.y) - f64::from(join.y);
    let len = dx.hypot(dy);

    if len > 0.0 {
        let prop = (f64::from(radius) / len).min(0.5);
        Some(point(
            (f64::from(join.x) + dx * prop) as f32,
            (f64::from(join.y) + dy * prop) as f32,
        ))
    } else {
        None
    }
}

/// Moves the end point of a straight segment.
fn with_end_point(segment: Segment, pos: Point) -> Segment {
    match segment {
        Segment::MoveTo(_) => Segment::MoveTo(pos),
        Segment::LineTo(_) => Segment::LineTo(pos),
        other => other,
    }
}

impl Path {
    /// Returns a copy of this path where every corner between two straight
    /// edges is replaced by a quadratic curve.
    ///
    /// The curve starts and ends `radius` away from the corner, but never
    /// further than half way along either edge. Corners next to curves are
    /// left sharp.
    pub fn with_rounded_corners(&self, radius: f32) -> Path {
        if radius <= MIN_CORNER_RADIUS {
            return self.clone();
        }

        let mut p = Path::with_capacity(self.len() * 2);
        p.set_using_non_zero_winding(self.is_using_non_zero_winding());

        let source = self.segments();

        // Index of the current sub-path's `MoveTo` in `p`.
        let mut sub_path_start_index = 0;
        let mut sub_path_start = Point::zero();
        // The first edge of the current sub-path, if it is a line.
        let mut first_line_end: Option<Point> = None;

        let mut last_was_line = false;
        // End points of the previous two source segments.
        let mut prev = Point::zero();
        let mut prev_prev = Point::zero();

        for (i, segment) in source.iter().enumerate() {
            match *segment {
                Segment::MoveTo(pos) => {
                    sub_path_start_index = p.len();
                    sub_path_start = pos;
                    p.start_new_sub_path(pos);

                    last_was_line = false;
                    first_line_end = match source.get(i + 1) {
                        Some(Segment::LineTo(end)) => Some(*end),
                        _ => None,
                    };

                    prev_prev = prev;
                    prev = pos;
                }
                Segment::LineTo(_) | Segment::Close => {
                    let is_close = *segment == Segment::Close;
                    let end = match *segment {
                        Segment::LineTo(end) => end,
                        _ => sub_path_start,
                    };

                    if last_was_line {
                        let (start, join) = (prev_prev, prev);
                        p.round_last_corner(start, join, end, radius);
                        p.line_to(end);
                    } else if !is_close {
                        p.line_to(end);
                        last_was_line = true;
                    } else if first_line_end.is_some() && prev != sub_path_start {
                        // The implicit closing edge needs to be explicit so
                        // its end can be pulled back from the corner.
                        p.line_to(end);
                    }

                    if is_close {
                        if let Some(first_end) = first_line_end {
                            let (start, join) = (prev, sub_path_start);
                            let round_end = p.round_last_corner(start, join, first_end, radius);

                            if let Some(round_end) = round_end {
                                p.replace_segment(sub_path_start_index, Segment::MoveTo(round_end));
                            }
                        }

                        p.close_sub_path();

                        last_was_line = false;
                        prev_prev = prev;
                        prev = sub_path_start;
                    } else {
                        prev_prev = prev;
                        prev = end;
                    }
                }
                Segment::QuadTo { ctrl, pos } => {
                    last_was_line = false;
                    p.quadratic_to(ctrl, pos);

                    prev_prev = prev;
                    prev = pos;
                }
                Segment::CubicTo {
                    h1_pos,
                    h2_pos,
                    pos,
                } => {
                    last_was_line = false;
                    p.cubic_to(h1_pos, h2_pos, pos);

                    prev_prev = prev;
                    prev = pos;
                }
            }
        }

        p
    }

    /// Replaces the corner at `join` between the edges `start -> join` and
    /// `join -> end` with a quadratic curve.
    ///
    /// The last segment of the path must be the straight edge ending at
    /// `join`; its end is pulled back towards `start`. Returns the point
    /// where the curve ends on the `join -> end` edge, if one was added.
    fn round_last_corner(
        &mut self,
        start: Point,
        join: Point,
        end: Point,
        radius: f32,
    ) -> Option<Point> {
        if let Some(pulled_back) = fillet_point(join, start, radius) {
            let last = self.len() - 1;
            let segment = with_end_point(self.segments()[last], pulled_back);
            self.replace_segment(last, segment);
        }

        let curve_end = fillet_point(join, end, radius)?;
        self.quadratic_to(join, curve_end);
        Some(curve_end)
    }
}
