//! # seqkit
//!
//! Pure algorithms over ordered sequences, with a fluent wrapper for
//! composing them.
//!
//! ## Overview
//!
//! - **Access & slicing**: `first`, `last`, `rest`, `initial`, `chunk`, and
//!   `*_or_none` variants that never fail
//! - **Flatten**: shallow and deep flattening of nested sequences
//! - **Uniqueness**: `uniq` / `distinct`, with or without a key extractor
//! - **Set algebra**: N-ary `intersection`, `union` and `difference`
//! - **Search**: linear lookups, `sorted_index` by binary search, ranges
//! - **Chain**: a builder that applies the above to a held value
//!
//! Every function borrows its input and returns a new value; nothing is
//! mutated and no state survives a call.
//!
//! ## Feature Flags
//!
//! - `sequence`: the algorithms (enabled by default)
//! - `chain`: the fluent [`chain::Chain`] wrapper (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the crate's data types
//! - `fxhash`: use `rustc-hash` for uniqueness and set algebra
//! - `ahash`: use `ahash` for uniqueness and set algebra
//! - `tracing`: report rejected inputs as `tracing` debug events
//! - `full`: `sequence`, `chain` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let values = [1, 2, 1, 3, 1, 4];
//! assert_eq!(sequence::uniq(&values), vec![1, 2, 3, 4]);
//! assert_eq!(sequence::first(&values), Ok(1));
//!
//! let tail = Chain::from_slice(&values).uniq().rest().into_value();
//! assert_eq!(tail, vec![2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`sequence`] module itself together with its data types,
/// rather than every function, so that names such as `drop` and `union` do
/// not shadow anything at the import site.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
///
/// assert_eq!(sequence::last(&[1, 2, 3]), Ok(3));
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{
        self, Depth, Falsy, Nested, SequenceError, SequenceResult, Tuple, Value,
    };

    #[cfg(feature = "chain")]
    pub use crate::chain::Chain;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "chain")]
pub mod chain;
