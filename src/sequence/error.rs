//! Error types for sequence operations.
//!
//! Only the strict access functions and the argument-validating functions
//! fail. Every `*_or_none` variant and every search reports absence through
//! `Option` instead.

use std::fmt;

/// Represents the ways a sequence operation can reject its input.
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{first, SequenceError};
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(
///     first(&empty),
///     Err(SequenceError::EmptySequence { operation: "first" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A strict access function was called on an empty sequence.
    EmptySequence {
        /// The name of the rejecting operation.
        operation: &'static str,
    },
    /// A strict predicate variant found no element satisfying the predicate.
    NoMatch {
        /// The name of the rejecting operation.
        operation: &'static str,
    },
    /// `chunk` was asked for groups of size zero.
    InvalidChunkSize {
        /// The rejected size.
        size: usize,
    },
    /// A range cannot make progress from `start` towards `stop`.
    ///
    /// `step` is `None` when the caller relied on the default step.
    InvalidStep {
        /// The first value of the requested range.
        start: i64,
        /// The exclusive bound of the requested range.
        stop: i64,
        /// The requested step, if one was supplied.
        step: Option<i64>,
    },
    /// Two keys compared during a sorted search have no defined ordering.
    NotComparable {
        /// The name of the rejecting operation.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Returns the name of the operation that produced this error.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::EmptySequence { operation }
            | Self::NoMatch { operation }
            | Self::NotComparable { operation } => operation,
            Self::InvalidChunkSize { .. } => "chunk",
            Self::InvalidStep { .. } => "range",
        }
    }

    /// Emits the error as a debug event when the `tracing` feature is on,
    /// then hands it back.
    #[inline]
    pub(crate) fn reported(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation = self.operation(), error = %self, "sequence operation rejected");
        self
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence { operation } => {
                write!(formatter, "{operation}: sequence is empty")
            }
            Self::NoMatch { operation } => {
                write!(formatter, "{operation}: no element satisfies the predicate")
            }
            Self::InvalidChunkSize { size } => {
                write!(formatter, "chunk: size must be positive, got {size}")
            }
            Self::InvalidStep {
                start,
                stop,
                step: Some(step),
            } => write!(
                formatter,
                "range: step {step} cannot progress from {start} to {stop}"
            ),
            Self::InvalidStep {
                start,
                stop,
                step: None,
            } => write!(
                formatter,
                "range: a negative step must be supplied to descend from {start} to {stop}"
            ),
            Self::NotComparable { operation } => {
                write!(formatter, "{operation}: keys have no defined ordering")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Result type for fallible sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;
