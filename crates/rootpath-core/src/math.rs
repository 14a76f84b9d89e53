pub use euclid;

/// A point in units of logical points.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in units of logical points.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A size in units of logical points.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// Alias for ```euclid::default::Box2D<f32>```
pub type Box2D = euclid::default::Box2D<f32>;

/// Alias for ```euclid::default::Transform2D<f32>```
pub type Transform = euclid::default::Transform2D<f32>;

/// A rectangle in units of logical points.
///
/// Alias for ```euclid::default::Rect<f32>```
pub type Rect = euclid::default::Rect<f32>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub const fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f32) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f32) -> Angle {
    Angle {
        radians: degrees * (std::f32::consts::PI / 180.0),
    }
}

/// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
#[inline]
pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// A rotation of `angle` radians about `center`.
///
/// Positive angles rotate clockwise in a y-down coordinate space.
pub fn rotation_about(angle: Angle, center: Point) -> Transform {
    Transform::translation(-center.x, -center.y)
        .then_rotate(angle)
        .then_translate(center.to_vector())
}

/// Returns the point at `angle` on the ellipse around `center` with the given
/// radii, where an angle of zero points straight up and angles increase
/// clockwise.
#[inline]
pub fn point_on_ellipse(center: Point, radius_x: f32, radius_y: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius_x * angle.sin(),
        center.y - radius_y * angle.cos(),
    )
}

/// Offsets `from` along the direction towards `to` by `along`, and
/// perpendicular to it by `across`.
///
/// Returns `from` unchanged if the two points coincide.
pub fn perpendicular_offset(from: Point, to: Point, along: f32, across: f32) -> Point {
    let d = to - from;
    let len = d.length();

    if len == 0.0 {
        from
    } else {
        Point::new(
            from.x + (d.x * along - d.y * across) / len,
            from.y + (d.y * along + d.x * across) / len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_angle_zero_is_top() {
        let p = point_on_ellipse(point(10.0, 10.0), 5.0, 3.0, 0.0);
        assert_eq!(p, point(10.0, 7.0));

        let p = point_on_ellipse(point(10.0, 10.0), 5.0, 3.0, std::f32::consts::FRAC_PI_2);
        assert!((p.x - 15.0).abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn perpendicular_offset_of_horizontal_line() {
        let p = perpendicular_offset(point(0.0, 0.0), point(10.0, 0.0), 2.0, 3.0);
        assert_eq!(p, point(2.0, 3.0));

        let same = perpendicular_offset(point(1.0, 1.0), point(1.0, 1.0), 2.0, 3.0);
        assert_eq!(same, point(1.0, 1.0));
    }

    #[test]
    fn rotation_about_keeps_center_fixed() {
        let t = rotation_about(radians(1.3), point(4.0, -2.0));
        let c = t.transform_point(point(4.0, -2.0));
        assert!((c.x - 4.0).abs() < 1e-5);
        assert!((c.y + 2.0).abs() < 1e-5);
    }
}
