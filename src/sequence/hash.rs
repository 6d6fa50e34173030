//! Hasher selection for the uniqueness and set-algebra operations.
//!
//! The `fxhash` feature switches to `rustc-hash`, the `ahash` feature to
//! `ahash`. When both are enabled `fxhash` takes precedence.

use std::collections::HashSet;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
pub(crate) type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type SeenHasher = std::collections::hash_map::RandomState;

/// Set of already-observed values, borrowed from the input where possible.
pub(crate) type SeenSet<K> = HashSet<K, SeenHasher>;

/// Creates an empty set sized for `capacity` elements.
#[inline]
pub(crate) fn seen_set<K: Eq + Hash>(capacity: usize) -> SeenSet<K> {
    HashSet::with_capacity_and_hasher(capacity, SeenHasher::default())
}

/// Collects borrowed elements into a membership set.
#[inline]
pub(crate) fn membership<T: Eq + Hash>(sequence: &[T]) -> SeenSet<&T> {
    let mut set = seen_set(sequence.len());
    set.extend(sequence.iter());
    set
}
