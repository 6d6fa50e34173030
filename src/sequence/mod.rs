//! Pure algorithms over ordered sequences.
//!
//! Every function borrows its input as a slice, so arrays, vectors and
//! sub-slices are handled identically, and returns a freshly owned result.
//! Nothing here keeps state between calls.
//!
//! # Overview
//!
//! - **Access**: [`first`], [`last`], [`first_or_none`], [`single_or_none`], ...
//! - **Slicing**: [`rest`] (also [`drop`], [`tail`]), [`initial`], [`chunk`]
//! - **Filtering**: [`compact`], [`compact_with`], [`without`]
//! - **Flatten**: [`flatten`], [`flatten_shallow`], [`flatten_with`]
//! - **Uniqueness**: [`uniq`] (also [`distinct`]), [`uniq_by`] (also [`distinct_by`])
//! - **Set algebra**: [`intersection`], [`union`], [`difference`]
//! - **Search**: [`index_of`], [`find_index`], [`sorted_index`], [`last_index`], ...
//! - **Ranges**: [`range`], [`range_from`], [`range_step`]
//! - **Zip**: [`zip`], [`unzip`], [`zip_pairs`], [`unzip_pairs`]
//!
//! # Error Policy
//!
//! Strict accessors and argument-validating functions return
//! [`SequenceResult`]; sentinel variants and searches return `Option` and
//! never fail. An error never carries a partial result.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{difference, first, sorted_index, uniq};
//!
//! let values = vec![1, 2, 1, 3, 1, 4];
//! assert_eq!(first(&values), Ok(1));
//! assert_eq!(uniq(&values), vec![1, 2, 3, 4]);
//! assert_eq!(difference(&values, &[&[1]]), vec![2, 3, 4]);
//! assert_eq!(sorted_index(&[10, 20, 30, 40, 50], &35), Some(3));
//! ```

mod access;
mod compact;
mod error;
mod flatten;
mod hash;
mod range;
mod search;
mod set_algebra;
mod slicing;
mod tuple;
mod uniqueness;
mod zip;

pub use access::{
    first, first_n, first_or_none, first_or_none_where, first_where, last, last_n, last_or_none,
    last_or_none_where, last_where, single_or_none, single_or_none_where,
};
pub use access::{first as head, first_n as head_n};
pub use compact::{Falsy, Value, compact, compact_with, without};
pub use error::{SequenceError, SequenceResult};
pub use flatten::{Depth, Nested, flatten, flatten_shallow, flatten_with};
pub use range::{range, range_from, range_step};
pub use search::{
    find_index, find_last_index, index_of, last_index, last_index_of, sorted_index,
    sorted_index_by_key, sorted_index_for_key,
};
pub use set_algebra::{difference, intersection, union};
pub use slicing::{chunk, initial, initial_n, rest, rest_n};
pub use slicing::{rest as drop, rest as tail, rest_n as drop_n, rest_n as tail_n};
pub use tuple::Tuple;
pub use uniqueness::{uniq, uniq_by};
pub use uniqueness::{uniq as distinct, uniq_by as distinct_by};
pub use zip::{unzip, unzip_pairs, zip, zip_pairs};

static_assertions::assert_impl_all!(Nested<i32>: Send, Sync);
static_assertions::assert_impl_all!(Tuple<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Value: Send, Sync);
static_assertions::assert_impl_all!(SequenceError: Send, Sync, std::error::Error);
