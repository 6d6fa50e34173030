//! Set algebra over one primary sequence and any number of others.
//!
//! Equality is value equality (`Eq + Hash`). Every operation keeps the order
//! of the primary sequence; [`union`] then appends unseen elements from the
//! others in argument order.
//!
//! # Time Complexity
//!
//! | Operation      | Cost              |
//! |----------------|-------------------|
//! | `intersection` | O(n + m) expected |
//! | `union`        | O(n + m) expected |
//! | `difference`   | O(n + m) expected |
//!
//! where `n` is the primary length and `m` the total length of the others.

use std::hash::Hash;

use super::hash::{membership, seen_set};
use super::uniqueness::uniq;

/// Returns the distinct elements of `sequence` that occur in every one of
/// `others`.
///
/// With no others, this is [`uniq`] of `sequence`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::intersection;
///
/// let result = intersection(&[1, 2, 3], &[&[101, 2, 1, 10], &[2, 1]]);
/// assert_eq!(result, vec![1, 2]);
/// ```
pub fn intersection<T: Clone + Eq + Hash>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    if others.iter().any(|other| other.is_empty()) {
        return Vec::new();
    }
    let memberships: Vec<_> = others.iter().copied().map(membership).collect();
    let mut seen = seen_set(sequence.len());
    sequence
        .iter()
        .filter(|element| memberships.iter().all(|set| set.contains(*element)))
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns every distinct element of `sequence` and `others`, in first-seen
/// order.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::union;
///
/// let result = union(&[1, 2, 3], &[&[101, 2, 1, 10], &[2, 1]]);
/// assert_eq!(result, vec![1, 2, 3, 101, 10]);
/// ```
pub fn union<T: Clone + Eq + Hash>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    if others.is_empty() {
        return uniq(sequence);
    }
    let total = sequence.len() + others.iter().map(|other| other.len()).sum::<usize>();
    let mut seen = seen_set(total);
    std::iter::once(sequence)
        .chain(others.iter().copied())
        .flat_map(|part| part.iter())
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns the elements of `sequence` that occur in none of `others`.
///
/// Duplicates within `sequence` are tested one by one and survive together.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10]]), vec![1, 3, 4]);
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10], &[8, 4]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1, 2], &[&[2]]), vec![1, 1]);
/// ```
pub fn difference<T: Clone + Eq + Hash>(sequence: &[T], others: &[&[T]]) -> Vec<T> {
    let mut excluded = seen_set(others.iter().map(|other| other.len()).sum());
    excluded.extend(others.iter().flat_map(|other| other.iter()));
    sequence
        .iter()
        .filter(|element| !excluded.contains(*element))
        .cloned()
        .collect()
}
