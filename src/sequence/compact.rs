//! Removal of falsy or explicitly named values.
//!
//! The default falsy set is numeric zero, `false`, absence (`None` or
//! [`Value::Null`]) and the empty string. [`compact_with`] replaces that set
//! with a single caller-chosen value.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{compact, compact_with, Value};
//!
//! let mixed = vec![
//!     Value::from(0),
//!     Value::from(1),
//!     Value::from(false),
//!     Value::from(2),
//!     Value::from(""),
//!     Value::from(3),
//! ];
//! assert_eq!(compact(&mixed), vec![Value::from(1), Value::from(2), Value::from(3)]);
//!
//! let without_one = compact_with(&mixed, &Value::from(1));
//! assert_eq!(without_one.len(), 5);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Types with a notion of "falsy" values that [`compact`] removes.
pub trait Falsy {
    /// Returns `true` if this value belongs to the default falsy set.
    fn is_falsy(&self) -> bool;
}

macro_rules! impl_falsy_for_zero {
    ($($numeric:ty => $zero:expr),* $(,)?) => {
        $(
            impl Falsy for $numeric {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_falsy_for_zero!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

impl Falsy for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Falsy for char {
    #[inline]
    fn is_falsy(&self) -> bool {
        *self == '\0'
    }
}

impl Falsy for str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Falsy::is_falsy)
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed scalar, for sequences that mix numbers, booleans,
/// text and absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A string.
    Text(String),
}

impl Falsy for Value {
    fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => flag.is_falsy(),
            Self::Integer(number) => number.is_falsy(),
            Self::Text(text) => text.is_falsy(),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Removes every falsy element, preserving the order of the rest.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::compact;
///
/// assert_eq!(compact(&[0, 1, 0, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(compact(&[Some(0), None, Some(4)]), vec![Some(4)]);
/// assert_eq!(compact(&["", "a", ""]), vec!["a"]);
/// ```
pub fn compact<T: Clone + Falsy>(sequence: &[T]) -> Vec<T> {
    sequence
        .iter()
        .filter(|element| !element.is_falsy())
        .cloned()
        .collect()
}

/// Removes only the elements equal to `falsy_value`.
///
/// The default falsy set is ignored entirely.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::compact_with;
///
/// assert_eq!(compact_with(&[0, 1, 2, 1, 3], &1), vec![0, 2, 3]);
/// ```
pub fn compact_with<T: Clone + PartialEq>(sequence: &[T], falsy_value: &T) -> Vec<T> {
    sequence
        .iter()
        .filter(|element| *element != falsy_value)
        .cloned()
        .collect()
}

/// Removes every element equal to any of `values`.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::without;
///
/// assert_eq!(without(&[1, 2, 1, 0, 3, 1, 4], &[0, 1]), vec![2, 3, 4]);
/// assert_eq!(without(&[1, 2, 1, 0, 3, 1, 4], &[1]), vec![2, 0, 3, 4]);
/// ```
pub fn without<T: Clone + PartialEq>(sequence: &[T], values: &[T]) -> Vec<T> {
    sequence
        .iter()
        .filter(|element| !values.contains(element))
        .cloned()
        .collect()
}
