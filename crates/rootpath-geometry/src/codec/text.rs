use std::fmt;
use std::str::FromStr;

use rootpath_core::math::{point, Point};
use smallvec::SmallVec;

use crate::{ParseError, Path, Segment};

fn marker_of(segment: &Segment) -> char {
    match segment {
        Segment::MoveTo(_) => 'm',
        Segment::LineTo(_) => 'l',
        Segment::QuadTo { .. } => 'q',
        Segment::CubicTo { .. } => 'c',
        Segment::Close => 'z',
    }
}

/// The number of coordinates that follow a marker, or `None` if `token`
/// isn't a segment marker.
fn num_values(token: &str) -> Option<usize> {
    match token {
        "m" | "l" => Some(2),
        "q" => Some(4),
        "c" => Some(6),
        "z" => Some(0),
        _ => None,
    }
}

/// Rounds to three decimals and drops trailing zeros and a trailing point.
fn format_coord(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');

    if s == "-0" {
        String::from("0")
    } else {
        String::from(s)
    }
}

/// Writes space-separated tokens.
struct TokenWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> TokenWriter<'a, 'b> {
    fn token(&mut self, token: &str) -> fmt::Result {
        if !self.first {
            self.f.write_str(" ")?;
        }
        self.first = false;
        self.f.write_str(token)
    }

    fn point(&mut self, p: Point) -> fmt::Result {
        self.token(&format_coord(p.x))?;
        self.token(&format_coord(p.y))
    }
}

/// Writes the path as a compact string such as `"m 0 5 l 0 0 10 0 10 5 z"`.
///
/// A marker letter is only written when it differs from the previous one.
/// Paths using the even-odd rule start with an `a`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TokenWriter { f, first: true };

        if !self.is_using_non_zero_winding() {
            w.token("a")?;
        }

        let mut last_marker = None;

        for segment in self.iter() {
            let marker = marker_of(segment);

            if last_marker != Some(marker) {
                w.token(marker.encode_utf8(&mut [0u8; 4]))?;
                last_marker = Some(marker);
            }

            match *segment {
                Segment::MoveTo(pos) | Segment::LineTo(pos) => w.point(pos)?,
                Segment::QuadTo { ctrl, pos } => {
                    w.point(ctrl)?;
                    w.point(pos)?;
                }
                Segment::CubicTo {
                    h1_pos,
                    h2_pos,
                    pos,
                } => {
                    w.point(h1_pos)?;
                    w.point(h2_pos)?;
                    w.point(pos)?;
                }
                Segment::Close => {}
            }
        }

        Ok(())
    }
}

/// Parses a coordinate. NaN, infinities and numbers too large for an `f32`
/// are invalid.
fn parse_value(token: &str) -> Result<f32, ParseError> {
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidToken(String::from(token))),
    }
}

impl Path {
    /// Replaces the contents of this path with the segments described by a
    /// string in the form written by its [`Display`](fmt::Display) impl.
    ///
    /// The path is cleared and set to the non-zero winding rule first. A
    /// number without a marker in front of it continues the previous marker,
    /// starting with `m`. An `a` anywhere selects the even-odd rule.
    ///
    /// On error the path holds the segments parsed so far.
    pub fn restore_from_str(&mut self, s: &str) -> Result<(), ParseError> {
        self.clear();
        self.set_using_non_zero_winding(true);

        let mut tokens = s.split_whitespace();
        let mut marker = "m";
        let mut values: SmallVec<[f32; 6]> = SmallVec::new();

        while let Some(token) = tokens.next() {
            if token == "a" {
                self.set_using_non_zero_winding(false);
                continue;
            }

            values.clear();

            let needed = match num_values(token) {
                Some(n) => {
                    marker = token;
                    n
                }
                None => {
                    let n = num_values(marker).unwrap_or(0);
                    if n == 0 {
                        // Surface a garbage token as such before complaining
                        // about its position.
                        parse_value(token)?;
                        return Err(ParseError::UnexpectedCoordinate);
                    }

                    values.push(parse_value(token)?);
                    n
                }
            };

            while values.len() < needed {
                let token = tokens.next().ok_or(ParseError::MissingCoordinates {
                    marker: marker.chars().next().unwrap_or('m'),
                })?;
                values.push(parse_value(token)?);
            }

            match marker {
                "m" => self.start_new_sub_path(point(values[0], values[1])),
                "l" => self.line_to(point(values[0], values[1])),
                "q" => self.quadratic_to(point(values[0], values[1]), point(values[2], values[3])),
                "c" => self.cubic_to(
                    point(values[0], values[1]),
                    point(values[2], values[3]),
                    point(values[4], values[5]),
                ),
                _ => self.close_sub_path(),
            }
        }

        log::trace!("parsed path with {} segments", self.len());

        Ok(())
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut path = Path::new();
        path.restore_from_str(s)?;
        Ok(path)
    }
}
