use rootpath_core::math::{vector, Box2D, Rect, Transform};
use rootpath_core::Justification;

use crate::Path;

impl Path {
    /// Maps every point of the path through `t` in place.
    ///
    /// The bounding box is recomputed from the transformed points.
    pub fn apply_transform(&mut self, t: &Transform) {
        let mut bounds: Option<Box2D> = None;

        for segment in self.segments_mut() {
            segment.for_each_point_mut(|p| {
                *p = t.transform_point(*p);

                bounds = Some(match bounds {
                    Some(b) => Box2D::new(b.min.min(*p), b.max.max(*p)),
                    None => Box2D::new(*p, *p),
                });
            });
        }

        self.set_bounds(bounds.unwrap_or_else(Box2D::zero));
    }

    /// Returns a copy of this path with `t` applied to it.
    pub fn transformed(&self, t: &Transform) -> Path {
        let mut path = self.clone();
        path.apply_transform(t);
        path
    }

    /// The smallest rectangle containing the path's bounds after they are
    /// mapped through `t`.
    pub fn bounds_transformed(&self, t: &Transform) -> Rect {
        t.outer_transformed_rect(&self.bounds())
    }

    /// Appends every segment of `other` to this path, mapping each control
    /// and end point through `t`.
    pub fn add_path_transformed(&mut self, other: &Path, t: &Transform) {
        for segment in other.iter() {
            self.push_segment(segment.transformed(t));
        }
    }

    /// Returns a transform that maps the bounds of this path into `area`.
    ///
    /// With `preserve_proportions`, the path is scaled uniformly until it
    /// touches either pair of sides of `area`, then placed according to
    /// `justification`. Otherwise the bounds are stretched to exactly cover
    /// `area`. Returns the identity if `area` or the bounds have no size.
    pub fn transform_to_scale_to_fit(
        &self,
        area: impl Into<Rect>,
        preserve_proportions: bool,
        justification: Justification,
    ) -> Transform {
        let area: Rect = area.into();
        let (x, y) = (area.origin.x, area.origin.y);
        let (w, h) = (area.size.width, area.size.height);

        let bounds = self.bounds();
        let (bx, by) = (bounds.origin.x, bounds.origin.y);
        let (bw, bh) = (bounds.size.width, bounds.size.height);

        if w <= 0.0 || h <= 0.0 || bw <= 0.0 || bh <= 0.0 {
            return Transform::identity();
        }

        if preserve_proportions {
            let src_ratio = bh / bw;

            let (new_w, new_h) = if src_ratio > h / w {
                (h / src_ratio, h)
            } else {
                (w, w * src_ratio)
            };

            let centre_x = justification.centre_x(x, w, new_w);
            let centre_y = justification.centre_y(y, h, new_h);

            Transform::translation(bw * -0.5 - bx, bh * -0.5 - by)
                .then_scale(new_w / bw, new_h / bh)
                .then_translate(vector(centre_x, centre_y))
        } else {
            Transform::translation(-bx, -by)
                .then_scale(w / bw, h / bh)
                .then_translate(vector(x, y))
        }
    }

    /// Rescales the path in place so that it fits centred within `area`.
    pub fn scale_to_fit(&mut self, area: impl Into<Rect>, preserve_proportions: bool) {
        let t = self.transform_to_scale_to_fit(area, preserve_proportions, Justification::CENTRED);
        self.apply_transform(&t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootpath_core::math::{point, radians, rect, Point};

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{a:?} != {b:?}"
        );
    }

    fn rect_path(r: Rect) -> Path {
        let mut path = Path::new();
        path.add_rectangle(r);
        path
    }

    #[test]
    fn applying_a_transform_recomputes_bounds() {
        let mut path = rect_path(rect(0.0, 0.0, 10.0, 20.0));
        path.apply_transform(&Transform::rotation(radians(std::f32::consts::FRAC_PI_2)));

        let bounds = path.bounds();
        assert_near(bounds.origin, point(-20.0, 0.0));
        assert!((bounds.size.width - 20.0).abs() < 1e-4);
        assert!((bounds.size.height - 10.0).abs() < 1e-4);
    }

    #[test]
    fn transforming_an_empty_path() {
        let mut path = Path::new();
        path.apply_transform(&Transform::translation(5.0, 5.0));
        assert_eq!(path.bounds(), rect(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn proportional_fit_is_limited_by_height() {
        let path = rect_path(rect(0.0, 0.0, 10.0, 20.0));
        let t = path.transform_to_scale_to_fit(
            rect(0.0, 0.0, 100.0, 100.0),
            true,
            Justification::CENTRED,
        );

        assert!((t.m11 - 5.0).abs() < 1e-5);
        assert!((t.m22 - 5.0).abs() < 1e-5);
        assert_near(t.transform_point(point(0.0, 0.0)), point(25.0, 0.0));
        assert_near(t.transform_point(point(10.0, 20.0)), point(75.0, 100.0));
    }

    #[test]
    fn proportional_fit_justification() {
        let path = rect_path(rect(0.0, 0.0, 10.0, 20.0));

        let t = path.transform_to_scale_to_fit(
            rect(0.0, 0.0, 100.0, 100.0),
            true,
            Justification::LEFT,
        );
        assert_near(t.transform_point(point(0.0, 0.0)), point(0.0, 0.0));

        let t = path.transform_to_scale_to_fit(
            rect(0.0, 0.0, 100.0, 100.0),
            true,
            Justification::RIGHT,
        );
        assert_near(t.transform_point(point(10.0, 20.0)), point(100.0, 100.0));

        // Limited by width; the spare height goes below.
        let wide = rect_path(rect(0.0, 0.0, 20.0, 10.0));
        let t = wide.transform_to_scale_to_fit(
            rect(0.0, 0.0, 100.0, 100.0),
            true,
            Justification::TOP,
        );
        assert_near(t.transform_point(point(20.0, 10.0)), point(100.0, 50.0));
    }

    #[test]
    fn stretched_fit() {
        let path = rect_path(rect(5.0, 5.0, 10.0, 20.0));
        let t = path.transform_to_scale_to_fit(rect(100.0, 0.0, 30.0, 10.0), false, Justification::CENTRED);

        assert_near(t.transform_point(point(5.0, 5.0)), point(100.0, 0.0));
        assert_near(t.transform_point(point(15.0, 25.0)), point(130.0, 10.0));
    }

    #[test]
    fn degenerate_fits_are_identity() {
        let path = rect_path(rect(0.0, 0.0, 10.0, 20.0));
        assert_eq!(
            path.transform_to_scale_to_fit(rect(0.0, 0.0, 0.0, 100.0), true, Justification::CENTRED),
            Transform::identity()
        );

        let mut flat = Path::new();
        flat.start_new_sub_path(point(0.0, 0.0));
        flat.line_to(point(10.0, 0.0));
        assert_eq!(
            flat.transform_to_scale_to_fit(rect(0.0, 0.0, 50.0, 50.0), false, Justification::CENTRED),
            Transform::identity()
        );
    }

    #[test]
    fn scale_to_fit_in_place() {
        let mut path = rect_path(rect(-1.0, -1.0, 2.0, 4.0));
        path.scale_to_fit(rect(0.0, 0.0, 40.0, 40.0), true);

        let bounds = path.bounds();
        assert_near(bounds.origin, point(10.0, 0.0));
        assert!((bounds.size.width - 20.0).abs() < 1e-4);
        assert!((bounds.size.height - 40.0).abs() < 1e-4);
    }

    #[test]
    fn adding_a_transformed_path() {
        let source = rect_path(rect(0.0, 0.0, 3.0, 4.0));
        let t = Transform::scale(2.0, 3.0).then_translate(vector(1.0, 1.0));

        let mut a = Path::new();
        a.add_path_transformed(&source, &t);

        let mut b = Path::new();
        b.add_path(&source);
        b.apply_transform(&t);

        assert_eq!(a, b);
        assert_eq!(source.bounds_transformed(&t), b.bounds());
    }
}
