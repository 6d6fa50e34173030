//! Transposition of sequences into positional groups, and pairing.

use super::tuple::Tuple;

/// Groups the `i`-th elements of every sequence together.
///
/// Sequences may have different lengths: group `i` holds, in argument order,
/// the `i`-th element of every sequence long enough to have one. The number
/// of groups is the length of the longest sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::zip;
///
/// let zipped = zip(&[&["moe", "larry", "curly"], &["30", "40", "50"], &["true", "false", "false"]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec!["moe", "30", "true"],
///         vec!["larry", "40", "false"],
///         vec!["curly", "50", "false"],
///     ]
/// );
///
/// assert_eq!(zip(&[&[1, 2, 3], &[4]]), vec![vec![1, 4], vec![2], vec![3]]);
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<T>> {
    let longest = sequences.iter().map(|sequence| sequence.len()).max().unwrap_or(0);
    let mut groups: Vec<Vec<T>> = (0..longest)
        .map(|_| Vec::with_capacity(sequences.len()))
        .collect();
    for sequence in sequences {
        for (group, element) in groups.iter_mut().zip(sequence.iter()) {
            group.push(element.clone());
        }
    }
    groups
}

/// Reverses [`zip`] for equally long groups: returns the sequence of first
/// elements, then of second elements, and so on.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::unzip;
///
/// let unzipped = unzip(&[&["moe", "30", "true"], &["larry", "40", "false"], &["curly", "50", "false"]]);
/// assert_eq!(
///     unzipped,
///     vec![
///         vec!["moe", "larry", "curly"],
///         vec!["30", "40", "50"],
///         vec!["true", "false", "false"],
///     ]
/// );
/// ```
#[inline]
pub fn unzip<T: Clone>(groups: &[&[T]]) -> Vec<Vec<T>> {
    zip(groups)
}

/// Pairs elements positionally, stopping at the end of the shorter sequence.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{zip_pairs, Tuple};
///
/// let pairs = zip_pairs(&["moe", "larry", "curly"], &[30, 40, 50]);
/// assert_eq!(pairs[0], Tuple::new("moe", 30));
/// assert_eq!(pairs.len(), 3);
/// ```
pub fn zip_pairs<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Vec<Tuple<A, B>> {
    first
        .iter()
        .zip(second)
        .map(|(left, right)| Tuple::new(left.clone(), right.clone()))
        .collect()
}

/// Splits pairs into the sequence of first components and the sequence of
/// second components.
pub fn unzip_pairs<A: Clone, B: Clone>(pairs: &[Tuple<A, B>]) -> (Vec<A>, Vec<B>) {
    pairs
        .iter()
        .map(|pair| (pair.first().clone(), pair.second().clone()))
        .unzip()
}
