use std::f32::consts::PI;

use rootpath_core::math::{
    perpendicular_offset, point, point_on_ellipse, radians, rotation_about, size, Point, Rect,
};

use crate::{Line, Path};

/// The angle step, in radians, used to approximate arcs with straight lines.
pub const ELLIPSE_ANGULAR_INCREMENT: f32 = 0.05;

/// Length proportional to the radius of the cubic handles used for rounded
/// rectangle corners.
const ROUNDED_CORNER_KAPPA: f32 = 0.45;
/// Length proportional to the half-axis of the cubic handles used for
/// ellipse quadrants.
const ELLIPSE_KAPPA: f32 = 0.55;

/// Sweeps larger than this are treated as complete rings by
/// [`Path::add_pie_segment`].
const FULL_CIRCLE_SWEEP: f32 = PI * 1.999;

/// The edge of a speech bubble that its tail sticks out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BubbleSide {
    Top,
    Left,
    Bottom,
    Right,
}

/// The triangular tail of a speech bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleTail {
    /// The point the tail reaches out to.
    pub tip: Point,
    /// The edge the tail is attached to.
    pub side: BubbleSide,
    /// Where along the straight part of the edge the tail sits, from `0.0`
    /// (top or left) to `1.0` (bottom or right).
    pub position: f32,
    /// The width of the tail where it meets the edge.
    pub width: f32,
}

impl Path {
    /// Adds a closed rectangle.
    ///
    /// Negative widths or heights are normalized, so the result is always the
    /// same as for the equivalent rectangle with a positive size.
    pub fn add_rectangle(&mut self, rect: impl Into<Rect>) {
        let rect: Rect = rect.into();

        let (mut x1, mut x2) = (rect.origin.x, rect.origin.x + rect.size.width);
        let (mut y1, mut y2) = (rect.origin.y, rect.origin.y + rect.size.height);

        if rect.size.width < 0.0 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if rect.size.height < 0.0 {
            std::mem::swap(&mut y1, &mut y2);
        }

        self.start_new_sub_path(point(x1, y2));
        self.line_to(point(x1, y1));
        self.line_to(point(x2, y1));
        self.line_to(point(x2, y2));
        self.close_sub_path();
    }

    /// Adds a rectangle with rounded corners.
    ///
    /// The corner sizes are clamped to half the width and height. Each corner
    /// is approximated with a cubic bezier.
    pub fn add_rounded_rectangle(&mut self, rect: impl Into<Rect>, corner_x: f32, corner_y: f32) {
        let rect: Rect = rect.into();

        let (x, y) = (rect.origin.x, rect.origin.y);
        let (x2, y2) = (rect.max_x(), rect.max_y());

        let csx = corner_x.min(rect.size.width * 0.5);
        let csy = corner_y.min(rect.size.height * 0.5);
        let cs45x = csx * ROUNDED_CORNER_KAPPA;
        let cs45y = csy * ROUNDED_CORNER_KAPPA;

        self.start_new_sub_path(point(x + csx, y));
        self.line_to(point(x2 - csx, y));
        self.cubic_to(
            point(x2 - cs45x, y),
            point(x2, y + cs45y),
            point(x2, y + csy),
        );
        self.line_to(point(x2, y2 - csy));
        self.cubic_to(
            point(x2, y2 - cs45y),
            point(x2 - cs45x, y2),
            point(x2 - csx, y2),
        );
        self.line_to(point(x + csx, y2));
        self.cubic_to(
            point(x + cs45x, y2),
            point(x, y2 - cs45y),
            point(x, y2 - csy),
        );
        self.line_to(point(x, y + csy));
        self.cubic_to(point(x, y + cs45y), point(x + cs45x, y), point(x + csx, y));
        self.close_sub_path();
    }

    /// Adds a rectangle with equally sized rounded corners.
    pub fn add_rounded_rectangle_uniform(&mut self, rect: impl Into<Rect>, corner_size: f32) {
        self.add_rounded_rectangle(rect, corner_size, corner_size);
    }

    /// Adds a closed triangle.
    pub fn add_triangle(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) {
        self.start_new_sub_path(p1);
        self.line_to(p2);
        self.line_to(p3);
        self.close_sub_path();
    }

    /// Adds a closed four-sided polygon.
    pub fn add_quadrilateral(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        p3: impl Into<Point>,
        p4: impl Into<Point>,
    ) {
        self.start_new_sub_path(p1);
        self.line_to(p2);
        self.line_to(p3);
        self.line_to(p4);
        self.close_sub_path();
    }

    /// Adds an ellipse filling the given rectangle, made of four cubic
    /// beziers starting from the top centre and going clockwise.
    pub fn add_ellipse(&mut self, rect: impl Into<Rect>) {
        let rect: Rect = rect.into();

        let hw = rect.size.width * 0.5;
        let hh = rect.size.height * 0.5;
        let hw55 = hw * ELLIPSE_KAPPA;
        let hh55 = hh * ELLIPSE_KAPPA;
        let cx = rect.origin.x + hw;
        let cy = rect.origin.y + hh;

        self.start_new_sub_path(point(cx, cy - hh));
        self.cubic_to(
            point(cx + hw55, cy - hh),
            point(cx + hw, cy - hh55),
            point(cx + hw, cy),
        );
        self.cubic_to(
            point(cx + hw, cy + hh55),
            point(cx + hw55, cy + hh),
            point(cx, cy + hh),
        );
        self.cubic_to(
            point(cx - hw55, cy + hh),
            point(cx - hw, cy + hh55),
            point(cx - hw, cy),
        );
        self.cubic_to(
            point(cx - hw, cy - hh55),
            point(cx - hw55, cy - hh),
            point(cx, cy - hh),
        );
        self.close_sub_path();
    }

    /// Adds an arc of the ellipse that fills `rect`.
    ///
    /// See [`Path::add_centred_arc`] for how the angles are measured.
    pub fn add_arc(
        &mut self,
        rect: impl Into<Rect>,
        from_radians: f32,
        to_radians: f32,
        start_as_new_sub_path: bool,
    ) {
        let rect: Rect = rect.into();
        let radius_x = rect.size.width / 2.0;
        let radius_y = rect.size.height / 2.0;

        self.add_centred_arc(
            point(rect.origin.x + radius_x, rect.origin.y + radius_y),
            radius_x,
            radius_y,
            0.0,
            from_radians,
            to_radians,
            start_as_new_sub_path,
        );
    }

    /// Adds an elliptical arc approximated by straight lines.
    ///
    /// An angle of zero is at the top of the ellipse and angles increase
    /// clockwise. The arc runs backwards when `from_radians > to_radians`.
    /// `rotation` turns the ellipse about its centre. If
    /// `start_as_new_sub_path` is `false`, the arc is joined to the current
    /// position with a line.
    #[allow(clippy::too_many_arguments)]
    pub fn add_centred_arc(
        &mut self,
        centre: impl Into<Point>,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        from_radians: f32,
        to_radians: f32,
        start_as_new_sub_path: bool,
    ) {
        if !(radius_x > 0.0 && radius_y > 0.0) {
            return;
        }

        let centre: Point = centre.into();
        let rotation = (rotation != 0.0).then(|| rotation_about(radians(rotation), centre));
        let point_at = |angle: f32| {
            let p = point_on_ellipse(centre, radius_x, radius_y, angle);
            match &rotation {
                Some(t) => t.transform_point(p),
                None => p,
            }
        };

        if start_as_new_sub_path {
            self.start_new_sub_path(point_at(from_radians));
        }

        // Intermediate points sit at whole steps from `from_radians`, up to
        // but not including `to_radians`.
        let from = f64::from(from_radians);
        let sweep = f64::from(to_radians) - from;
        let step = f64::from(ELLIPSE_ANGULAR_INCREMENT).copysign(sweep);
        let num_steps = (sweep.abs() / f64::from(ELLIPSE_ANGULAR_INCREMENT)).ceil() as u64;
        let first_step = u64::from(start_as_new_sub_path);

        for i in first_step..num_steps {
            self.line_to(point_at((from + step * i as f64) as f32));
        }

        self.line_to(point_at(to_radians));
    }

    /// Adds a pie-chart wedge of the ellipse filling `rect`.
    ///
    /// With an `inner_proportion` greater than zero, the wedge becomes a
    /// section of a ring whose inner radii are that proportion of the outer
    /// ones.
    pub fn add_pie_segment(
        &mut self,
        rect: impl Into<Rect>,
        from_radians: f32,
        to_radians: f32,
        inner_proportion: f32,
    ) {
        let rect: Rect = rect.into();

        let mut hw = rect.size.width * 0.5;
        let mut hh = rect.size.height * 0.5;
        let centre = point(rect.origin.x + hw, rect.origin.y + hh);

        self.start_new_sub_path(point_on_ellipse(centre, hw, hh, from_radians));
        self.add_arc(rect, from_radians, to_radians, false);

        if (from_radians - to_radians).abs() > FULL_CIRCLE_SWEEP {
            self.close_sub_path();

            if inner_proportion > 0.0 {
                hw *= inner_proportion;
                hh *= inner_proportion;

                self.start_new_sub_path(point_on_ellipse(centre, hw, hh, to_radians));
                self.add_centred_arc(centre, hw, hh, 0.0, to_radians, from_radians, false);
            }
        } else if inner_proportion > 0.0 {
            hw *= inner_proportion;
            hh *= inner_proportion;

            self.add_centred_arc(centre, hw, hh, 0.0, to_radians, from_radians, false);
        } else {
            self.line_to(centre);
        }

        self.close_sub_path();
    }

    /// Adds a rectangle covering `line` stroked with the given thickness.
    pub fn add_line_segment(&mut self, line: Line, thickness: f32) {
        let t = thickness * 0.5;

        self.start_new_sub_path(perpendicular_offset(line.from, line.to, 0.0, t));
        self.line_to(perpendicular_offset(line.from, line.to, 0.0, -t));
        self.line_to(perpendicular_offset(line.to, line.from, 0.0, t));
        self.line_to(perpendicular_offset(line.to, line.from, 0.0, -t));
        self.close_sub_path();
    }

    /// Adds an arrow along `line`, with its head at `line.to`.
    ///
    /// The head length is limited to 80% of the length of the line.
    pub fn add_arrow(&mut self, line: Line, thickness: f32, head_width: f32, head_length: f32) {
        let t = thickness * 0.5;
        let hw = head_width * 0.5;
        let hl = head_length.min(0.8 * line.length());
        let (start, end) = (line.from, line.to);

        self.start_new_sub_path(perpendicular_offset(start, end, 0.0, t));
        self.line_to(perpendicular_offset(start, end, 0.0, -t));
        self.line_to(perpendicular_offset(end, start, hl, t));
        self.line_to(perpendicular_offset(end, start, hl, hw));
        self.line_to(perpendicular_offset(end, start, 0.0, 0.0));
        self.line_to(perpendicular_offset(end, start, hl, -hw));
        self.line_to(perpendicular_offset(end, start, hl, -t));
        self.close_sub_path();
    }

    /// Adds a star with `num_points` points, alternating between the outer
    /// and inner radius.
    ///
    /// `start_angle` is the angle of the first outer point, measured
    /// clockwise from the top. Fewer than two points is a usage error and
    /// adds nothing.
    pub fn add_star(
        &mut self,
        centre: impl Into<Point>,
        num_points: usize,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
    ) {
        debug_assert!(num_points > 1, "a star needs at least two points");

        if num_points < 2 {
            log::warn!("ignoring star with {num_points} points");
            return;
        }

        let centre: Point = centre.into();
        let angle_between_points = PI * 2.0 / num_points as f32;

        for i in 0..num_points {
            let angle = start_angle + i as f32 * angle_between_points;
            let outer = point_on_ellipse(centre, outer_radius, outer_radius, angle);

            if i == 0 {
                self.start_new_sub_path(outer);
            } else {
                self.line_to(outer);
            }

            let angle = angle + angle_between_points * 0.5;
            self.line_to(point_on_ellipse(centre, inner_radius, inner_radius, angle));
        }

        self.close_sub_path();
    }

    /// Adds a speech bubble: a rounded rectangle with an optional triangular
    /// tail.
    ///
    /// The tail is never wider than the straight part of its edge. Bodies
    /// that aren't larger than one unit in both directions add nothing.
    pub fn add_bubble(&mut self, body: impl Into<Rect>, corner_size: f32, tail: Option<BubbleTail>) {
        let body: Rect = body.into();
        let (x, y) = (body.origin.x, body.origin.y);
        let (w, h) = (body.size.width, body.size.height);

        if !(w > 1.0 && h > 1.0) {
            return;
        }

        let cs = corner_size.min(w * 0.5).min(h * 0.5);
        let cs2 = 2.0 * cs;

        let tail_on = |side: BubbleSide| tail.filter(|t| t.side == side);
        // Start and end of the tail's base along an edge of length `len`.
        let tail_span = |t: &BubbleTail, len: f32, start: f32| {
            let half = t.width.min(len - cs2) * 0.5;
            let a = start + cs + ((len - cs2) * t.position - half).max(0.0);
            (a, a + half * 2.0)
        };

        self.start_new_sub_path(point(x + cs, y));

        if let Some(t) = tail_on(BubbleSide::Top) {
            let (x1, x2) = tail_span(&t, w, x);
            self.line_to(point(x1, y));
            self.line_to(t.tip);
            self.line_to(point(x2, y));
        }

        self.line_to(point(x + w - cs, y));

        if cs > 0.0 {
            self.add_arc(
                Rect::new(point(x + w - cs2, y), size(cs2, cs2)),
                0.0,
                PI * 0.5,
                false,
            );
        }

        if let Some(t) = tail_on(BubbleSide::Right) {
            let (y1, y2) = tail_span(&t, h, y);
            self.line_to(point(x + w, y1));
            self.line_to(t.tip);
            self.line_to(point(x + w, y2));
        }

        self.line_to(point(x + w, y + h - cs));

        if cs > 0.0 {
            self.add_arc(
                Rect::new(point(x + w - cs2, y + h - cs2), size(cs2, cs2)),
                PI * 0.5,
                PI,
                false,
            );
        }

        if let Some(t) = tail_on(BubbleSide::Bottom) {
            let (x1, x2) = tail_span(&t, w, x);
            self.line_to(point(x2, y + h));
            self.line_to(t.tip);
            self.line_to(point(x1, y + h));
        }

        self.line_to(point(x + cs, y + h));

        if cs > 0.0 {
            self.add_arc(
                Rect::new(point(x, y + h - cs2), size(cs2, cs2)),
                PI,
                PI * 1.5,
                false,
            );
        }

        if let Some(t) = tail_on(BubbleSide::Left) {
            let (y1, y2) = tail_span(&t, h, y);
            self.line_to(point(x, y2));
            self.line_to(t.tip);
            self.line_to(point(x, y1));
        }

        self.line_to(point(x, y + cs));

        if cs > 0.0 {
            self.add_arc(
                Rect::new(point(x, y), size(cs2, cs2)),
                PI * 1.5,
                PI * 2.0 - ELLIPSE_ANGULAR_INCREMENT,
                false,
            );
        }

        self.close_sub_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{line, Segment};
    use rootpath_core::math::rect;

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn rectangle_layout() {
        let mut path = Path::new();
        path.add_rectangle(rect(0.0, 0.0, 10.0, 5.0));

        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(point(0.0, 5.0)),
                Segment::LineTo(point(0.0, 0.0)),
                Segment::LineTo(point(10.0, 0.0)),
                Segment::LineTo(point(10.0, 5.0)),
                Segment::Close,
            ]
        );
    }

    #[test]
    fn negative_rectangle_is_normalized() {
        let mut a = Path::new();
        a.add_rectangle(rect(10.0, 10.0, -5.0, -5.0));
        let mut b = Path::new();
        b.add_rectangle(rect(5.0, 5.0, 5.0, 5.0));

        assert_eq!(a.bounds(), b.bounds());
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn rounded_rectangle_clamps_corners() {
        let mut path = Path::new();
        path.add_rounded_rectangle(rect(0.0, 0.0, 10.0, 4.0), 20.0, 20.0);

        assert_eq!(path.bounds(), rect(0.0, 0.0, 10.0, 4.0));
        // The corners meet in the middle of each side.
        assert_eq!(path.segments()[0], Segment::MoveTo(point(5.0, 0.0)));
        assert_eq!(path.segments()[1], Segment::LineTo(point(5.0, 0.0)));
        assert_eq!(path.segments()[2].end_point(), Some(point(10.0, 2.0)));
        assert_eq!(path.len(), 10);
    }

    #[test]
    fn ellipse_uses_four_cubics() {
        let mut path = Path::new();
        path.add_ellipse(rect(0.0, 0.0, 20.0, 10.0));

        let cubics = path
            .iter()
            .filter(|s| matches!(s, Segment::CubicTo { .. }))
            .count();
        assert_eq!(cubics, 4);
        assert_eq!(path.bounds(), rect(0.0, 0.0, 20.0, 10.0));
        assert_eq!(path.segments()[0], Segment::MoveTo(point(10.0, 0.0)));
        assert_eq!(path.current_position(), point(10.0, 0.0));
    }

    #[test]
    fn arc_runs_clockwise_from_the_top() {
        let mut path = Path::new();
        path.add_centred_arc(point(0.0, 0.0), 10.0, 10.0, 0.0, 0.0, PI * 0.5, true);

        assert_eq!(path.segments()[0], Segment::MoveTo(point(0.0, -10.0)));
        assert_near(path.current_position(), point(10.0, 0.0));

        // Roughly one line per angular step.
        let expected = (PI * 0.5 / ELLIPSE_ANGULAR_INCREMENT).ceil() as usize;
        assert!((path.len() as isize - 1 - expected as isize).abs() <= 1);
    }

    #[test]
    fn arc_runs_backwards() {
        let mut path = Path::new();
        path.add_centred_arc(point(0.0, 0.0), 10.0, 10.0, 0.0, PI, PI * 0.5, true);

        assert_near(path.segments()[0].end_point().unwrap(), point(0.0, 10.0));
        assert_near(path.current_position(), point(10.0, 0.0));
        assert!(path.bounds().max_x() <= 10.0 + 1e-4);
        assert!(path.bounds().min_x() >= -1e-4);
    }

    #[test]
    fn rotated_arc() {
        let mut path = Path::new();
        path.add_centred_arc(point(0.0, 0.0), 10.0, 5.0, PI * 0.5, 0.0, 0.1, true);

        // The top of the ellipse is rotated to its right.
        assert_near(path.segments()[0].end_point().unwrap(), point(5.0, 0.0));
    }

    #[test]
    fn arc_at_large_angles_has_a_bounded_number_of_steps() {
        // Above 2^21 an `f32` angle can't move by a single increment.
        let mut path = Path::new();
        path.add_centred_arc(point(0.0, 0.0), 10.0, 10.0, 0.0, 2.0e6, 2.0e6 + 1.0, true);

        // The move, 19 intermediate steps and the end point.
        assert_eq!(path.len(), 21);
        assert_near(
            path.current_position(),
            point_on_ellipse(point(0.0, 0.0), 10.0, 10.0, 2.0e6 + 1.0),
        );
    }

    #[test]
    fn arc_with_zero_radius_adds_nothing() {
        let mut path = Path::new();
        path.add_centred_arc(point(0.0, 0.0), 0.0, 10.0, 0.0, 0.0, PI, true);
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn pie_segment_wedge() {
        let mut path = Path::new();
        path.add_pie_segment(rect(0.0, 0.0, 20.0, 20.0), 0.0, PI * 0.5, 0.0);

        let segments = path.segments();
        assert_eq!(segments[0], Segment::MoveTo(point(10.0, 0.0)));
        assert_eq!(segments[segments.len() - 2], Segment::LineTo(point(10.0, 10.0)));
        assert_eq!(segments.last(), Some(&Segment::Close));
    }

    #[test]
    fn full_circle_ring_has_two_sub_paths() {
        let mut path = Path::new();
        path.add_pie_segment(rect(0.0, 0.0, 20.0, 20.0), 0.0, PI * 2.0, 0.5);

        let moves = path
            .iter()
            .filter(|s| matches!(s, Segment::MoveTo(_)))
            .count();
        let closes = path.iter().filter(|s| **s == Segment::Close).count();
        assert_eq!(moves, 2);
        assert_eq!(closes, 2);
    }

    #[test]
    fn line_segment_is_a_thick_rectangle() {
        let mut path = Path::new();
        path.add_line_segment(line(point(0.0, 0.0), point(10.0, 0.0)), 4.0);

        assert_eq!(path.bounds(), rect(0.0, -2.0, 10.0, 4.0));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn arrow_head_points_at_the_end() {
        let mut path = Path::new();
        path.add_arrow(line(point(0.0, 0.0), point(0.0, 10.0)), 2.0, 6.0, 20.0);

        // The head is limited to 80% of the line's length.
        assert_near(path.segments()[2].end_point().unwrap(), point(1.0, 2.0));
        assert_eq!(path.segments()[4], Segment::LineTo(point(0.0, 10.0)));
        assert_eq!(path.bounds(), rect(-3.0, 0.0, 6.0, 10.0));
    }

    #[test]
    fn star_has_two_vertices_per_point() {
        let mut path = Path::new();
        path.add_star(point(0.0, 0.0), 5, 4.0, 10.0, 0.0);

        let vertices = path
            .iter()
            .filter(|s| matches!(s, Segment::MoveTo(_) | Segment::LineTo(_)))
            .count();
        assert_eq!(vertices, 10);
        assert_eq!(path.len(), 11);
        assert_eq!(path.segments().last(), Some(&Segment::Close));
        assert_eq!(path.segments()[0], Segment::MoveTo(point(0.0, -10.0)));
    }

    #[test]
    fn bubble_with_tail() {
        let mut path = Path::new();
        path.add_bubble(
            rect(0.0, 0.0, 100.0, 50.0),
            10.0,
            Some(BubbleTail {
                tip: point(50.0, 80.0),
                side: BubbleSide::Bottom,
                position: 0.5,
                width: 500.0,
            }),
        );

        assert_eq!(path.bounds(), rect(0.0, 0.0, 100.0, 80.0));
        // The tail is clamped to the 80 units between the corners.
        assert!(path.iter().any(|s| *s == Segment::LineTo(point(90.0, 50.0))));
        assert!(path.iter().any(|s| *s == Segment::LineTo(point(10.0, 50.0))));
        assert!(path.iter().any(|s| *s == Segment::LineTo(point(50.0, 80.0))));
    }

    #[test]
    fn tiny_bubble_adds_nothing() {
        let mut path = Path::new();
        path.add_bubble(rect(0.0, 0.0, 1.0, 20.0), 2.0, None);
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn triangle_and_quadrilateral() {
        let mut path = Path::new();
        path.add_triangle(point(0.0, 0.0), point(4.0, 0.0), point(0.0, 3.0));
        path.add_quadrilateral(
            point(10.0, 10.0),
            point(12.0, 10.0),
            point(12.0, 12.0),
            point(10.0, 12.0),
        );

        assert_eq!(path.len(), 4 + 5);
        assert_eq!(path.bounds(), rect(0.0, 0.0, 12.0, 12.0));
    }
}
