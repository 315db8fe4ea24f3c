//! compression/codecs/mod.rs
//! Concrete stream codecs, one per container format.

pub mod deflate;
pub mod gzip;

pub use deflate::*;
pub use gzip::*;

/// Threshold policy shared by both codecs.
///
/// `staged` holds at most `max(threshold, 1)` bytes. Anything shorter than
/// the threshold is passed through, and so is an empty input even when the
/// threshold is zero: there is nothing to encode.
pub(crate) fn below_threshold(staged: &[u8], threshold: usize) -> bool {
    staged.len() < threshold || staged.is_empty()
}
