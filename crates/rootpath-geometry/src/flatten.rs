use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use rootpath_core::math::Point;

use crate::{Line, Path, Segment};

/// Flattening tolerances below this are raised to it, so curves always
/// flatten into a bounded number of lines.
const MIN_TOLERANCE: f32 = 1.0e-3;

impl Path {
    /// Approximates the path with straight edges and calls `f` with each of
    /// them in order.
    ///
    /// Curves are split into lines that stay within `tolerance` of the true
    /// curve. Closed sub-paths get their closing edge. If
    /// `close_open_sub_paths` is `true`, the sub-paths that were never closed
    /// get one as well, the way a fill would treat them.
    pub fn for_each_flattened_edge(
        &self,
        tolerance: f32,
        close_open_sub_paths: bool,
        mut f: impl FnMut(&Line),
    ) {
        let tolerance = tolerance.max(MIN_TOLERANCE);

        let mut start = Point::zero();
        let mut current = Point::zero();
        let mut open = false;

        for segment in self.iter() {
            match *segment {
                Segment::MoveTo(pos) => {
                    if close_open_sub_paths && open && current != start {
                        f(&Line {
                            from: current,
                            to: start,
                        });
                    }

                    start = pos;
                    current = pos;
                    open = false;
                }
                Segment::LineTo(pos) => {
                    f(&Line {
                        from: current,
                        to: pos,
                    });
                    current = pos;
                    open = true;
                }
                Segment::QuadTo { ctrl, pos } => {
                    QuadraticBezierSegment {
                        from: current,
                        ctrl,
                        to: pos,
                    }
                    .for_each_flattened(tolerance, &mut f);
                    current = pos;
                    open = true;
                }
                Segment::CubicTo {
                    h1_pos,
                    h2_pos,
                    pos,
                } => {
                    CubicBezierSegment {
                        from: current,
                        ctrl1: h1_pos,
                        ctrl2: h2_pos,
                        to: pos,
                    }
                    .for_each_flattened(tolerance, &mut f);
                    current = pos;
                    open = true;
                }
                Segment::Close => {
                    if current != start {
                        f(&Line {
                            from: current,
                            to: start,
                        });
                    }

                    current = start;
                    open = false;
                }
            }
        }

        if close_open_sub_paths && open && current != start {
            f(&Line {
                from: current,
                to: start,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootpath_core::math::{point, rect};

    fn edges(path: &Path, close_open: bool) -> Vec<Line> {
        let mut out = Vec::new();
        path.for_each_flattened_edge(0.1, close_open, |l| out.push(*l));
        out
    }

    #[test]
    fn closed_rectangle_has_four_edges() {
        let mut path = Path::new();
        path.add_rectangle(rect(0.0, 0.0, 4.0, 2.0));

        let edges = edges(&path, false);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].to, point(0.0, 2.0));
    }

    #[test]
    fn open_sub_paths_are_closed_on_request() {
        let mut path = Path::new();
        path.start_new_sub_path(point(0.0, 0.0));
        path.line_to(point(4.0, 0.0));
        path.line_to(point(4.0, 4.0));
        path.start_new_sub_path(point(10.0, 10.0));
        path.line_to(point(12.0, 10.0));

        assert_eq!(edges(&path, false).len(), 3);

        let closed = edges(&path, true);
        assert_eq!(closed.len(), 5);
        assert_eq!(closed[2].to, point(0.0, 0.0));
        assert_eq!(closed[4].to, point(10.0, 10.0));
    }

    #[test]
    fn curves_stay_connected() {
        let mut path = Path::new();
        path.start_new_sub_path(point(0.0, 0.0));
        path.cubic_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0));
        path.quadratic_to(point(5.0, -5.0), point(0.0, 0.0));
        path.close_sub_path();

        let edges = edges(&path, true);
        assert!(edges.len() > 4);
        assert_eq!(edges.first().unwrap().from, point(0.0, 0.0));
        assert_eq!(edges.last().unwrap().to, point(0.0, 0.0));

        for pair in edges.windows(2) {
            assert!((pair[0].to - pair[1].from).length() < 1e-4);
        }
    }
}
