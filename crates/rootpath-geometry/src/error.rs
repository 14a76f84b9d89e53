/// An error while reading a path from its binary form.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("unexpected marker byte {byte:#04x} at offset {offset}")]
    UnexpectedMarker { byte: u8, offset: usize },

    #[error("path data ended in the middle of a segment")]
    UnexpectedEof,

    #[error("non-finite coordinate at offset {offset}")]
    NonFiniteCoordinate { offset: usize },

    #[error("io error while reading path data: {0}")]
    Io(#[from] std::io::Error),
}

/// An error while parsing a path from its text form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid token {0:?} in path string")]
    InvalidToken(String),

    #[error("path string ended before all coordinates for '{marker}' were given")]
    MissingCoordinates { marker: char },

    #[error("coordinate given after a close marker")]
    UnexpectedCoordinate,
}
