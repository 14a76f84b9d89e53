//! Binary and text forms of a [`Path`](crate::Path).
//!
//! Both forms are a stream of single-letter markers, each followed by the
//! coordinates of that segment.

mod binary;
mod text;
