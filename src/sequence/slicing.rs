//! Sub-sequences taken from the front or back, and fixed-size chunking.
//!
//! `rest` is the single implementation behind the `drop` and `tail` names,
//! which are re-exported from [`crate::sequence`].

use super::error::{SequenceError, SequenceResult};

/// Returns every element except the first.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{drop, rest, tail};
///
/// assert_eq!(rest(&[5, 4, 3, 2, 1]), vec![4, 3, 2, 1]);
/// assert_eq!(tail(&[5, 4, 3, 2, 1]), vec![4, 3, 2, 1]);
/// assert_eq!(drop(&[5, 4, 3, 2, 1]), vec![4, 3, 2, 1]);
/// ```
#[inline]
pub fn rest<T: Clone>(sequence: &[T]) -> Vec<T> {
    rest_n(sequence, 1)
}

/// Returns every element from index `count` onward.
///
/// An out-of-range `count` yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::rest_n;
///
/// assert_eq!(rest_n(&[5, 4, 3, 2, 1], 2), vec![3, 2, 1]);
/// assert!(rest_n(&[5, 4], 7).is_empty());
/// ```
pub fn rest_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence.get(count..).map_or_else(Vec::new, <[T]>::to_vec)
}

/// Returns every element except the last.
#[inline]
pub fn initial<T: Clone>(sequence: &[T]) -> Vec<T> {
    initial_n(sequence, 1)
}

/// Returns every element except the last `count`.
///
/// A `count` at or beyond the length yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::initial_n;
///
/// assert_eq!(initial_n(&[5, 4, 3, 2, 1], 2), vec![5, 4, 3]);
/// assert!(initial_n(&[5, 4], 3).is_empty());
/// ```
pub fn initial_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..sequence.len().saturating_sub(count)].to_vec()
}

/// Partitions `sequence` into consecutive groups of `size` elements.
///
/// The last group holds whatever remains and is never padded.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::chunk;
///
/// let letters = ["a", "b", "c", "d"];
/// assert_eq!(chunk(&letters, 2), Ok(vec![vec!["a", "b"], vec!["c", "d"]]));
/// assert_eq!(chunk(&letters, 3), Ok(vec![vec!["a", "b", "c"], vec!["d"]]));
/// assert!(chunk(&letters, 0).is_err());
/// ```
pub fn chunk<T: Clone>(sequence: &[T], size: usize) -> SequenceResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(SequenceError::InvalidChunkSize { size }.reported());
    }
    Ok(sequence.chunks(size).map(<[T]>::to_vec).collect())
}
