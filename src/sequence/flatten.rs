//! Flattening of arbitrarily nested sequences.
//!
//! A nested sequence is modelled as a slice of [`Nested`] values, each of
//! which is either a leaf or another sequence. Deep flattening walks the
//! tree depth-first, left to right, with an explicit stack, so the only
//! bound on nesting depth is available memory.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{flatten, flatten_shallow, Nested};
//!
//! // [1, [2, [3, [[4]]]]]
//! let nested = vec![
//!     Nested::leaf(1),
//!     Nested::sequence(vec![
//!         Nested::leaf(2),
//!         Nested::sequence(vec![
//!             Nested::leaf(3),
//!             Nested::sequence(vec![Nested::sequence(vec![Nested::leaf(4)])]),
//!         ]),
//!     ]),
//! ];
//!
//! assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
//!
//! let shallow = flatten_shallow(&nested);
//! let rendered: Vec<String> = shallow.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, vec!["1", "2", "[3, [[4]]]"]);
//! ```

use std::fmt;
use std::slice;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Levels kept inline before the traversal stack spills to the heap.
const INLINE_DEPTH: usize = 8;

/// An element of a nested sequence: either a leaf value or a sub-sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Nested<T> {
    /// A non-sequence element.
    Leaf(T),
    /// A nested sequence, possibly empty.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates a nested sequence from its children.
    #[inline]
    pub const fn sequence(children: Vec<Self>) -> Self {
        Self::Sequence(children)
    }

    /// Creates a one-level sequence whose children are all leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Nested;
    ///
    /// let nested = Nested::from_leaves([1, 2, 3]);
    /// assert_eq!(nested.to_string(), "[1, 2, 3]");
    /// ```
    pub fn from_leaves<I: IntoIterator<Item = T>>(leaves: I) -> Self {
        Self::Sequence(leaves.into_iter().map(Self::Leaf).collect())
    }

    /// Returns `true` if this is a leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the leaf value, or `None` for a sequence.
    #[inline]
    pub const fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the nesting depth: 0 for a leaf, 1 for a sequence of leaves
    /// (or an empty sequence), and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Nested;
    ///
    /// assert_eq!(Nested::leaf(1).depth(), 0);
    /// assert_eq!(Nested::<i32>::sequence(vec![]).depth(), 1);
    /// assert_eq!(Nested::sequence(vec![Nested::from_leaves([1])]).depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        let Self::Sequence(children) = self else {
            return 0;
        };
        let mut deepest = 1;
        let mut stack: SmallVec<[(slice::Iter<'_, Self>, usize); INLINE_DEPTH]> = SmallVec::new();
        stack.push((children.iter(), 1));
        while let Some((level, depth)) = stack.last_mut() {
            let depth = *depth;
            match level.next() {
                Some(Self::Sequence(grandchildren)) => {
                    deepest = deepest.max(depth + 1);
                    stack.push((grandchildren.iter(), depth + 1));
                }
                Some(Self::Leaf(_)) => {}
                None => {
                    stack.pop();
                }
            }
        }
        deepest
    }
}

impl<T> From<Vec<Self>> for Nested<T> {
    fn from(children: Vec<Self>) -> Self {
        Self::Sequence(children)
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write!(formatter, "{value}"),
            Self::Sequence(children) => {
                formatter.write_str("[")?;
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{child}")?;
                }
                formatter.write_str("]")
            }
        }
    }
}

/// How far [`flatten_with`] descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Depth {
    /// Unwrap exactly one level of nesting.
    Shallow,
    /// Unwrap every level of nesting.
    #[default]
    Deep,
}

/// Flattens every level of nesting into a sequence of leaf values.
///
/// Leaves appear in depth-first, left-to-right order. Empty nested
/// sequences contribute nothing.
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    let mut leaves = Vec::with_capacity(sequence.len());
    let mut stack: SmallVec<[slice::Iter<'_, Nested<T>>; INLINE_DEPTH]> = SmallVec::new();
    stack.push(sequence.iter());
    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Leaf(value)) => leaves.push(value.clone()),
            Some(Nested::Sequence(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    leaves
}

/// Unwraps one level of nesting.
///
/// Sub-sequences at depth two or more are kept as [`Nested::Sequence`].
pub fn flatten_shallow<T: Clone>(sequence: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut result = Vec::with_capacity(sequence.len());
    for element in sequence {
        match element {
            Nested::Leaf(_) => result.push(element.clone()),
            Nested::Sequence(children) => result.extend(children.iter().cloned()),
        }
    }
    result
}

/// Flattens to the given [`Depth`], keeping the [`Nested`] element type so
/// both modes share one signature.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{flatten_with, Depth, Nested};
///
/// let nested = vec![Nested::leaf(1), Nested::sequence(vec![Nested::from_leaves([2])])];
///
/// assert_eq!(
///     flatten_with(&nested, Depth::Deep),
///     vec![Nested::leaf(1), Nested::leaf(2)]
/// );
/// assert_eq!(
///     flatten_with(&nested, Depth::Shallow),
///     vec![Nested::leaf(1), Nested::from_leaves([2])]
/// );
/// ```
pub fn flatten_with<T: Clone>(sequence: &[Nested<T>], depth: Depth) -> Vec<Nested<T>> {
    match depth {
        Depth::Shallow => flatten_shallow(sequence),
        Depth::Deep => flatten(sequence).into_iter().map(Nested::Leaf).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequences_contribute_nothing() {
        let nested: Vec<Nested<i32>> = vec![
            Nested::sequence(vec![]),
            Nested::leaf(1),
            Nested::sequence(vec![Nested::sequence(vec![])]),
        ];
        assert_eq!(flatten(&nested), vec![1]);
        assert_eq!(
            flatten_shallow(&nested),
            vec![Nested::leaf(1), Nested::sequence(vec![])]
        );
    }

    #[test]
    fn test_flatten_beyond_inline_depth() {
        let mut nested = Nested::leaf(0);
        for value in 1..=64 {
            nested = Nested::sequence(vec![Nested::leaf(value), nested]);
        }
        let flat = flatten(std::slice::from_ref(&nested));
        assert_eq!(flat.len(), 65);
        assert_eq!(flat.first(), Some(&64));
        assert_eq!(flat.last(), Some(&0));
        assert_eq!(nested.depth(), 64);
    }

    #[test]
    fn test_display_of_empty_sequence() {
        assert_eq!(Nested::<i32>::sequence(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_default_depth_is_deep() {
        assert_eq!(Depth::default(), Depth::Deep);
    }
}
