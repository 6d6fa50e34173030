//! De-duplication preserving first-seen order.
//!
//! `distinct` and `distinct_by` are re-exported from [`crate::sequence`] as
//! aliases of [`uniq`] and [`uniq_by`].

use std::hash::Hash;

use super::hash::seen_set;

/// Returns the elements of `sequence` in first-seen order, dropping later
/// duplicates.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{distinct, uniq};
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 1, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(distinct(&[1, 2, 1, 3, 1, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn uniq<T: Clone + Eq + Hash>(sequence: &[T]) -> Vec<T> {
    let mut seen = seen_set(sequence.len());
    sequence
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns the first element of `sequence` for each distinct key produced by
/// `key_function`.
///
/// Later elements sharing a key are dropped, whatever the ordering of the keys
/// themselves.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::uniq_by;
///
/// let people = [("moe", 40), ("moe", 50), ("curly", 60)];
/// assert_eq!(
///     uniq_by(&people, |(name, _)| *name),
///     vec![("moe", 40), ("curly", 60)]
/// );
/// ```
pub fn uniq_by<T, K, F>(sequence: &[T], mut key_function: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = seen_set(sequence.len());
    sequence
        .iter()
        .filter(|element| seen.insert(key_function(element)))
        .cloned()
        .collect()
}
