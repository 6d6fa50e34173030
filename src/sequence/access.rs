//! Element access at either end of a sequence.
//!
//! Two policies coexist here:
//!
//! - **Strict** functions (`first`, `last`, `first_where`, `last_where`)
//!   fail with a [`SequenceError`] on empty input or when nothing matches.
//! - **Sentinel** functions (`first_or_none`, `last_or_none`,
//!   `single_or_none` and their predicate variants) never fail and return
//!   `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{first, first_n, first_or_none, last_n};
//!
//! let values = [5, 4, 3, 2, 1];
//! assert_eq!(first(&values), Ok(5));
//! assert_eq!(first_n(&values, 2), vec![5, 4]);
//! assert_eq!(last_n(&values, 2), vec![2, 1]);
//!
//! let empty: [i32; 0] = [];
//! assert_eq!(first_or_none(&empty), None);
//! ```

use super::error::{SequenceError, SequenceResult};

// =============================================================================
// Front
// =============================================================================

/// Returns the element at index 0.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::first;
///
/// assert_eq!(first(&[5, 4, 3]), Ok(5));
/// assert!(first::<i32>(&[]).is_err());
/// ```
pub fn first<T: Clone>(sequence: &[T]) -> SequenceResult<T> {
    sequence
        .first()
        .cloned()
        .ok_or_else(|| SequenceError::EmptySequence { operation: "first" }.reported())
}

/// Returns the first `count` elements, or the whole sequence if it is shorter.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::first_n;
///
/// assert_eq!(first_n(&[5, 4, 3, 2, 1], 2), vec![5, 4]);
/// assert_eq!(first_n(&[5, 4], 10), vec![5, 4]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the first element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `sequence` is empty and
/// [`SequenceError::NoMatch`] if no element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::first_where;
///
/// assert_eq!(first_where(&[5, 4, 3, 2, 1], |item| item % 2 == 0), Ok(4));
/// ```
pub fn first_where<T, P>(sequence: &[T], predicate: P) -> SequenceResult<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    if sequence.is_empty() {
        return Err(SequenceError::EmptySequence {
            operation: "first_where",
        }
        .reported());
    }
    first_or_none_where(sequence, predicate).ok_or_else(|| {
        SequenceError::NoMatch {
            operation: "first_where",
        }
        .reported()
    })
}

/// Returns the element at index 0, or `None` if `sequence` is empty.
#[inline]
pub fn first_or_none<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.first().cloned()
}

/// Returns the first element satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::first_or_none_where;
///
/// assert_eq!(first_or_none_where(&[5, 4, 3], |item| item % 2 == 0), Some(4));
/// assert_eq!(first_or_none_where(&[5, 3], |item| item % 2 == 0), None);
/// ```
pub fn first_or_none_where<T, P>(sequence: &[T], mut predicate: P) -> Option<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence.iter().find(|element| predicate(element)).cloned()
}

// =============================================================================
// Back
// =============================================================================

/// Returns the element at the final index.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::last;
///
/// assert_eq!(last(&[5, 4, 3, 2, 1]), Ok(1));
/// ```
pub fn last<T: Clone>(sequence: &[T]) -> SequenceResult<T> {
    sequence
        .last()
        .cloned()
        .ok_or_else(|| SequenceError::EmptySequence { operation: "last" }.reported())
}

/// Returns the last `count` elements in their original order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3, 4, 5], 3), vec![3, 4, 5]);
/// assert_eq!(last_n(&[1, 2], 5), vec![1, 2]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

/// Returns the last element satisfying `predicate`.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `sequence` is empty and
/// [`SequenceError::NoMatch`] if no element satisfies `predicate`.
pub fn last_where<T, P>(sequence: &[T], predicate: P) -> SequenceResult<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    if sequence.is_empty() {
        return Err(SequenceError::EmptySequence {
            operation: "last_where",
        }
        .reported());
    }
    last_or_none_where(sequence, predicate).ok_or_else(|| {
        SequenceError::NoMatch {
            operation: "last_where",
        }
        .reported()
    })
}

/// Returns the element at the final index, or `None` if `sequence` is empty.
#[inline]
pub fn last_or_none<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.last().cloned()
}

/// Returns the last element satisfying `predicate`, or `None`.
pub fn last_or_none_where<T, P>(sequence: &[T], mut predicate: P) -> Option<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence.iter().rev().find(|element| predicate(element)).cloned()
}

// =============================================================================
// Single
// =============================================================================

/// Returns the sole element of a one-element sequence.
///
/// Both an empty sequence and a sequence with more than one element yield
/// `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::single_or_none;
///
/// assert_eq!(single_or_none(&[1]), Some(1));
/// assert_eq!(single_or_none(&[1, 2, 3]), None);
/// assert_eq!(single_or_none::<i32>(&[]), None);
/// ```
pub fn single_or_none<T: Clone>(sequence: &[T]) -> Option<T> {
    match sequence {
        [only] => Some(only.clone()),
        _ => None,
    }
}

/// Returns the unique element satisfying `predicate`.
///
/// Yields `None` when zero or more than one element matches. Scanning stops
/// at the second match.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::single_or_none_where;
///
/// assert_eq!(single_or_none_where(&[1, 2, 3], |number| number % 2 == 0), Some(2));
/// assert_eq!(single_or_none_where(&[1, 2, 3], |number| number % 2 == 1), None);
/// assert_eq!(single_or_none_where(&[1, 2, 3], |number| *number == 5), None);
/// ```
pub fn single_or_none_where<T, P>(sequence: &[T], mut predicate: P) -> Option<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut matches = sequence.iter().filter(|element| predicate(element));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.clone()),
        _ => None,
    }
}
