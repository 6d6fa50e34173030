//! Index lookups: linear scans by value or predicate, and binary search over
//! sorted sequences.
//!
//! Absence is reported as `None`. In particular [`sorted_index`] returns
//! `None` when the probe would be inserted past the end of the sequence,
//! rather than the sequence length.

use std::cmp::Ordering;

use super::error::{SequenceError, SequenceResult};

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::index_of;
///
/// assert_eq!(index_of(&[1, 2, 3], &2), Some(1));
/// assert_eq!(index_of(&[1, 2, 3], &4), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}

/// Returns the index of the last element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::last_index_of;
///
/// assert_eq!(last_index_of(&[1, 2, 3, 1, 2, 3], &2), Some(4));
/// ```
pub fn last_index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().rposition(|element| element == target)
}

/// Returns the index of the first element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_index;
///
/// assert_eq!(find_index(&[1, 2, 3], |item| item % 2 == 0), Some(1));
/// assert_eq!(find_index(&[1, 2, 3], |item| *item > 3), None);
/// ```
pub fn find_index<T, P>(sequence: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().position(|element| predicate(element))
}

/// Returns the index of the last element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::find_last_index;
///
/// assert_eq!(find_last_index(&[1, 2, 3, 4, 5], |item| item % 2 == 0), Some(3));
/// assert_eq!(find_last_index(&[1, 2, 3, 4, 5], |item| *item > 5), None);
/// ```
pub fn find_last_index<T, P>(sequence: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().rposition(|element| predicate(element))
}

/// Returns the final index of `sequence`.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `sequence` is empty, the same
/// policy as [`first`](super::first) and [`last`](super::last).
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::last_index;
///
/// assert_eq!(last_index(&[1, 2, 3, 4, 5]), Ok(4));
/// assert!(last_index::<i32>(&[]).is_err());
/// ```
pub fn last_index<T>(sequence: &[T]) -> SequenceResult<usize> {
    sequence.len().checked_sub(1).ok_or_else(|| {
        SequenceError::EmptySequence {
            operation: "last_index",
        }
        .reported()
    })
}

// =============================================================================
// Binary search
// =============================================================================

/// Turns a lower bound into the past-end sentinel convention.
#[inline]
fn within_bounds(index: usize, length: usize) -> Option<usize> {
    (index < length).then_some(index)
}

/// Returns the position at which `value` would be inserted to keep an
/// ascending `sequence` sorted: the number of elements strictly less than
/// `value`.
///
/// If every element is less than `value` (including the empty case) there is
/// no slot inside the sequence and the result is `None`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::sorted_index;
///
/// assert_eq!(sorted_index(&[10, 20, 30, 40, 50], &35), Some(3));
/// assert_eq!(sorted_index(&[10, 20, 30, 40, 50], &30), Some(2));
/// assert_eq!(sorted_index(&[10, 20, 30, 40, 50], &60), None);
/// ```
pub fn sorted_index<T: Ord>(sequence: &[T], value: &T) -> Option<usize> {
    within_bounds(
        sequence.partition_point(|element| element < value),
        sequence.len(),
    )
}

/// Like [`sorted_index`], comparing `key_function(element)` with
/// `key_function(value)`.
///
/// # Errors
///
/// Returns [`SequenceError::NotComparable`] if the probe key or any key
/// visited by the search has no defined ordering (for example `f64::NAN`).
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::sorted_index_by_key;
///
/// let people = [("moe", 40), ("moe", 50), ("curly", 60)];
/// assert_eq!(sorted_index_by_key(&people, &("moe", 50), |(_, age)| *age), Ok(Some(1)));
/// assert_eq!(sorted_index_by_key(&people, &("moe", 70), |(_, age)| *age), Ok(None));
/// ```
pub fn sorted_index_by_key<T, K, F>(
    sequence: &[T],
    value: &T,
    mut key_function: F,
) -> SequenceResult<Option<usize>>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let probe = key_function(value);
    search_keys(sequence, &probe, key_function, "sorted_index_by_key")
}

/// Like [`sorted_index_by_key`], with a probe that is already a key.
///
/// # Errors
///
/// Returns [`SequenceError::NotComparable`] under the same conditions as
/// [`sorted_index_by_key`].
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::sorted_index_for_key;
///
/// let readings = [(1, 0.5), (2, 1.5), (3, 2.5)];
/// assert_eq!(sorted_index_for_key(&readings, &1.0, |(_, level)| *level), Ok(Some(1)));
/// assert!(sorted_index_for_key(&readings, &f64::NAN, |(_, level)| *level).is_err());
/// ```
pub fn sorted_index_for_key<T, K, F>(
    sequence: &[T],
    key: &K,
    key_function: F,
) -> SequenceResult<Option<usize>>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    search_keys(sequence, key, key_function, "sorted_index_for_key")
}

/// Lower-bound binary search over extracted keys.
fn search_keys<T, K, F>(
    sequence: &[T],
    probe: &K,
    mut key_function: F,
    operation: &'static str,
) -> SequenceResult<Option<usize>>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let not_comparable = || SequenceError::NotComparable { operation }.reported();

    if probe.partial_cmp(probe).is_none() {
        return Err(not_comparable());
    }

    let mut low = 0;
    let mut high = sequence.len();
    while low < high {
        let middle = low + (high - low) / 2;
        match key_function(&sequence[middle]).partial_cmp(probe) {
            Some(Ordering::Less) => low = middle + 1,
            Some(Ordering::Equal | Ordering::Greater) => high = middle,
            None => return Err(not_comparable()),
        }
    }
    Ok(within_bounds(low, sequence.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_index_of_empty_is_none() {
        let empty: [i32; 0] = [];
        assert_eq!(sorted_index(&empty, &1), None);
    }

    #[test]
    fn test_sorted_index_picks_first_of_equal_run() {
        assert_eq!(sorted_index(&[1, 2, 2, 2, 3], &2), Some(1));
    }

    #[test]
    fn test_sorted_index_for_key_rejects_nan_in_sequence() {
        let levels = [0.5, f64::NAN, 2.5];
        assert_eq!(
            sorted_index_for_key(&levels, &1.0, |level| *level),
            Err(SequenceError::NotComparable {
                operation: "sorted_index_for_key"
            })
        );
    }

    #[test]
    fn test_sorted_index_by_key_rejects_nan_probe_on_empty_input() {
        let empty: [f64; 0] = [];
        assert!(sorted_index_by_key(&empty, &f64::NAN, |level| *level).is_err());
    }

    #[test]
    fn test_last_index_of_single() {
        assert_eq!(last_index(&["only"]), Ok(0));
    }
}
