use std::io;

use rootpath_core::math::{point, Point};

use crate::{DecodeError, Path, Segment};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    NonZero = b'n',
    EvenOdd = b'z',
    MoveTo = b'm',
    LineTo = b'l',
    QuadTo = b'q',
    CubicTo = b'b',
    Close = b'c',
    End = b'e',
}

impl Marker {
    fn from_u8(c: u8) -> Option<Self> {
        match c {
            b'n' => Some(Self::NonZero),
            b'z' => Some(Self::EvenOdd),
            b'm' => Some(Self::MoveTo),
            b'l' => Some(Self::LineTo),
            b'q' => Some(Self::QuadTo),
            b'b' => Some(Self::CubicTo),
            b'c' => Some(Self::Close),
            b'e' => Some(Self::End),
            _ => None,
        }
    }
}

fn push_point(data: &mut Vec<u8>, p: Point) {
    data.extend_from_slice(&p.x.to_ne_bytes());
    data.extend_from_slice(&p.y.to_ne_bytes());
}

/// Reads markers and coordinates while keeping track of the byte offset.
struct Decoder<'a, R: io::Read> {
    source: &'a mut R,
    offset: usize,
}

impl<'a, R: io::Read> Decoder<'a, R> {
    /// Returns `None` once the input is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut byte = [0u8; 1];

        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read_f32(&mut self) -> Result<f32, DecodeError> {
        let mut bytes = [0u8; 4];

        match self.source.read_exact(&mut bytes) {
            Ok(()) => {
                let offset = self.offset;
                self.offset += 4;

                let v = f32::from_ne_bytes(bytes);
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(DecodeError::NonFiniteCoordinate { offset })
                }
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(DecodeError::UnexpectedEof),
            Err(e) => Err(e.into()),
        }
    }

    fn read_point(&mut self) -> Result<Point, DecodeError> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        Ok(point(x, y))
    }
}

impl Path {
    /// Writes the path in its binary form.
    ///
    /// The winding rule comes first as `'n'` or `'z'`, then one marker byte
    /// per segment followed by its coordinates as native-endian `f32`s, and
    /// finally an `'e'`.
    pub fn write_to(&self, dest: &mut impl io::Write) -> io::Result<()> {
        dest.write_all(&self.to_bytes())
    }

    /// The binary form of the path, as written by [`Path::write_to`].
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(2 + self.len() * (1 + 4 * 6));

        let winding = if self.is_using_non_zero_winding() {
            Marker::NonZero
        } else {
            Marker::EvenOdd
        };
        data.push(winding as u8);

        for segment in self.iter() {
            match *segment {
                Segment::MoveTo(pos) => {
                    data.push(Marker::MoveTo as u8);
                    push_point(&mut data, pos);
                }
                Segment::LineTo(pos) => {
                    data.push(Marker::LineTo as u8);
                    push_point(&mut data, pos);
                }
                Segment::QuadTo { ctrl, pos } => {
                    data.push(Marker::QuadTo as u8);
                    push_point(&mut data, ctrl);
                    push_point(&mut data, pos);
                }
                Segment::CubicTo {
                    h1_pos,
                    h2_pos,
                    pos,
                } => {
                    data.push(Marker::CubicTo as u8);
                    push_point(&mut data, h1_pos);
                    push_point(&mut data, h2_pos);
                    push_point(&mut data, pos);
                }
                Segment::Close => data.push(Marker::Close as u8),
            }
        }

        data.push(Marker::End as u8);

        log::trace!(
            "encoded path with {} segments into {} bytes",
            self.len(),
            data.len()
        );

        data
    }

    /// Reads segments in the binary form and appends them to this path.
    ///
    /// Reading stops after an `'e'` marker or at the end of the input. A
    /// winding marker changes the winding rule of this path.
    pub fn load_from_reader(&mut self, source: &mut impl io::Read) -> Result<(), DecodeError> {
        let mut decoder = Decoder { source, offset: 0 };

        while let Some(byte) = decoder.next_byte()? {
            let Some(marker) = Marker::from_u8(byte) else {
                return Err(DecodeError::UnexpectedMarker {
                    byte,
                    offset: decoder.offset - 1,
                });
            };

            match marker {
                Marker::NonZero => self.set_using_non_zero_winding(true),
                Marker::EvenOdd => self.set_using_non_zero_winding(false),
                Marker::MoveTo => {
                    let pos = decoder.read_point()?;
                    self.start_new_sub_path(pos);
                }
                Marker::LineTo => {
                    let pos = decoder.read_point()?;
                    self.line_to(pos);
                }
                Marker::QuadTo => {
                    let ctrl = decoder.read_point()?;
                    let pos = decoder.read_point()?;
                    self.quadratic_to(ctrl, pos);
                }
                Marker::CubicTo => {
                    let h1_pos = decoder.read_point()?;
                    let h2_pos = decoder.read_point()?;
                    let pos = decoder.read_point()?;
                    self.cubic_to(h1_pos, h2_pos, pos);
                }
                Marker::Close => self.close_sub_path(),
                Marker::End => break,
            }
        }

        log::trace!("decoded {} bytes of path data", decoder.offset);

        Ok(())
    }

    /// [`Path::load_from_reader`] for data that is already in memory.
    pub fn load_from_bytes(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        let mut remaining = data;
        self.load_from_reader(&mut remaining)?;

        if !remaining.is_empty() {
            log::debug!(
                "ignoring {} bytes after the end of the path data",
                remaining.len()
            );
        }

        Ok(())
    }

    /// Builds a new path from its binary form.
    pub fn from_bytes(data: &[u8]) -> Result<Path, DecodeError> {
        let mut path = Path::new();
        path.load_from_bytes(data)?;
        Ok(path)
    }
}
