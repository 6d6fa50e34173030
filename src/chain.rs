//! Fluent composition of sequence operations.
//!
//! [`Chain`] holds an immutable sequence. Each transforming method borrows the
//! chain and returns a new one, so intermediate chains stay usable; terminal
//! methods return a scalar, an `Option`, or a [`SequenceResult`]. All of the
//! work is done by [`crate::sequence`].
//!
//! # Examples
//!
//! ```rust
//! use seqkit::chain::Chain;
//!
//! let result = Chain::new(vec![5, 4, 3, 2, 1, 4, 5])
//!     .uniq()
//!     .rest()
//!     .first_n(2)
//!     .into_value();
//! assert_eq!(result, vec![4, 3]);
//!
//! let evens = Chain::range(10).unwrap().map(|value| value * 2).initial_n(7);
//! assert_eq!(evens.value(), &[0, 2, 4]);
//! ```

use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequence::{self, Falsy, Nested, SequenceResult};

/// A sequence wrapped for method chaining.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Chain<T> {
    value: Vec<T>,
}

impl<T> Chain<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: Vec<T>) -> Self {
        Self { value }
    }

    /// Returns the held sequence.
    #[inline]
    pub fn value(&self) -> &[T] {
        &self.value
    }

    /// Unwraps the held sequence.
    #[inline]
    pub fn into_value(self) -> Vec<T> {
        self.value
    }

    /// Returns the number of held elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns `true` if the held sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(&self, function: F) -> Chain<U>
    where
        F: FnMut(&T) -> U,
    {
        Chain::new(self.value.iter().map(function).collect())
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        sequence::find_index(&self.value, predicate)
    }
}

impl<T: Clone> Chain<T> {
    /// Copies `slice` into a new chain.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::new(slice.to_vec())
    }

    // =========================================================================
    // Terminal access
    // =========================================================================

    /// See [`sequence::first`].
    ///
    /// # Errors
    ///
    /// Fails on an empty chain.
    pub fn first(&self) -> SequenceResult<T> {
        sequence::first(&self.value)
    }

    /// See [`sequence::first_or_none`].
    pub fn first_or_none(&self) -> Option<T> {
        sequence::first_or_none(&self.value)
    }

    /// See [`sequence::first_where`].
    ///
    /// # Errors
    ///
    /// Fails on an empty chain or when nothing matches.
    pub fn first_where<P>(&self, predicate: P) -> SequenceResult<T>
    where
        P: FnMut(&T) -> bool,
    {
        sequence::first_where(&self.value, predicate)
    }

    /// See [`sequence::first_or_none_where`].
    pub fn first_or_none_where<P>(&self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        sequence::first_or_none_where(&self.value, predicate)
    }

    /// See [`sequence::last`].
    ///
    /// # Errors
    ///
    /// Fails on an empty chain.
    pub fn last(&self) -> SequenceResult<T> {
        sequence::last(&self.value)
    }

    /// See [`sequence::last_or_none`].
    pub fn last_or_none(&self) -> Option<T> {
        sequence::last_or_none(&self.value)
    }

    /// See [`sequence::last_or_none_where`].
    pub fn last_or_none_where<P>(&self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        sequence::last_or_none_where(&self.value, predicate)
    }

    /// See [`sequence::single_or_none`].
    pub fn single_or_none(&self) -> Option<T> {
        sequence::single_or_none(&self.value)
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// See [`sequence::first_n`].
    pub fn first_n(&self, count: usize) -> Self {
        Self::new(sequence::first_n(&self.value, count))
    }

    /// See [`sequence::last_n`].
    pub fn last_n(&self, count: usize) -> Self {
        Self::new(sequence::last_n(&self.value, count))
    }

    /// See [`sequence::rest`].
    pub fn rest(&self) -> Self {
        Self::new(sequence::rest(&self.value))
    }

    /// See [`sequence::rest_n`].
    pub fn rest_n(&self, count: usize) -> Self {
        Self::new(sequence::rest_n(&self.value, count))
    }

    /// See [`sequence::initial`].
    pub fn initial(&self) -> Self {
        Self::new(sequence::initial(&self.value))
    }

    /// See [`sequence::initial_n`].
    pub fn initial_n(&self, count: usize) -> Self {
        Self::new(sequence::initial_n(&self.value, count))
    }

    /// See [`sequence::chunk`].
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero.
    pub fn chunk(&self, size: usize) -> SequenceResult<Chain<Vec<T>>> {
        sequence::chunk(&self.value, size).map(Chain::new)
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::new(
            self.value
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// See [`sequence::uniq_by`].
    pub fn uniq_by<K, F>(&self, key_function: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        Self::new(sequence::uniq_by(&self.value, key_function))
    }
}

impl<T: Clone + Falsy> Chain<T> {
    /// See [`sequence::compact`].
    pub fn compact(&self) -> Self {
        Self::new(sequence::compact(&self.value))
    }
}

impl<T: Clone + PartialEq> Chain<T> {
    /// See [`sequence::compact_with`].
    pub fn compact_with(&self, falsy_value: &T) -> Self {
        Self::new(sequence::compact_with(&self.value, falsy_value))
    }

    /// See [`sequence::without`].
    pub fn without(&self, values: &[T]) -> Self {
        Self::new(sequence::without(&self.value, values))
    }

    /// See [`sequence::index_of`].
    pub fn index_of(&self, target: &T) -> Option<usize> {
        sequence::index_of(&self.value, target)
    }
}

impl<T: Clone + Eq + Hash> Chain<T> {
    /// See [`sequence::uniq`].
    pub fn uniq(&self) -> Self {
        Self::new(sequence::uniq(&self.value))
    }

    /// See [`sequence::intersection`].
    pub fn intersection(&self, others: &[&[T]]) -> Self {
        Self::new(sequence::intersection(&self.value, others))
    }

    /// See [`sequence::union`].
    pub fn union(&self, others: &[&[T]]) -> Self {
        Self::new(sequence::union(&self.value, others))
    }

    /// See [`sequence::difference`].
    pub fn difference(&self, others: &[&[T]]) -> Self {
        Self::new(sequence::difference(&self.value, others))
    }
}

impl<T: Ord> Chain<T> {
    /// See [`sequence::sorted_index`].
    pub fn sorted_index(&self, value: &T) -> Option<usize> {
        sequence::sorted_index(&self.value, value)
    }
}

impl<T: Clone> Chain<Nested<T>> {
    /// See [`sequence::flatten`].
    pub fn flatten(&self) -> Chain<T> {
        Chain::new(sequence::flatten(&self.value))
    }

    /// See [`sequence::flatten_shallow`].
    pub fn flatten_shallow(&self) -> Self {
        Self::new(sequence::flatten_shallow(&self.value))
    }
}

impl Chain<i64> {
    /// Starts a chain from [`sequence::range`].
    ///
    /// # Errors
    ///
    /// Fails if `stop` is negative.
    pub fn range(stop: i64) -> SequenceResult<Self> {
        sequence::range(stop).map(Self::new)
    }

    /// Starts a chain from [`sequence::range_from`].
    ///
    /// # Errors
    ///
    /// Fails if `start > stop`.
    pub fn range_from(start: i64, stop: i64) -> SequenceResult<Self> {
        sequence::range_from(start, stop).map(Self::new)
    }

    /// Starts a chain from [`sequence::range_step`].
    ///
    /// # Errors
    ///
    /// Fails if `step` cannot progress from `start` to `stop`.
    pub fn range_step(start: i64, stop: i64, step: i64) -> SequenceResult<Self> {
        sequence::range_step(start, stop, step).map(Self::new)
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

static_assertions::assert_impl_all!(Chain<i32>: Send, Sync);
