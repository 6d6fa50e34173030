//! An immutable ordered pair.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair produced by pairing two sequences.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Tuple;
///
/// let pair = Tuple::new("moe", 30);
/// assert_eq!(pair.first(), &"moe");
/// assert_eq!(pair.second(), &30);
/// assert_eq!(pair.to_string(), "(moe, 30)");
///
/// let native: (&str, i32) = pair.into();
/// assert_eq!(native, ("moe", 30));
/// assert_eq!(Tuple::from(native).swap(), Tuple::new(30, "moe"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Returns a pair with the components swapped.
    #[inline]
    pub fn swap(self) -> Tuple<B, A> {
        Tuple::new(self.second, self.first)
    }

    /// Splits the pair into a native tuple.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    fn from(pair: Tuple<A, B>) -> Self {
        pair.into_parts()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Tuple<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}
