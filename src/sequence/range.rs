//! Arithmetic progressions.
//!
//! Ranges are half-open: `stop` is never included. A step must move `start`
//! towards `stop`; steps of zero or of the wrong sign are rejected rather than
//! producing an empty or infinite sequence.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{range, range_from, range_step};
//!
//! assert_eq!(range(10), Ok((0..10).collect::<Vec<i64>>()));
//! assert_eq!(range_from(1, 11), Ok((1..11).collect::<Vec<i64>>()));
//! assert_eq!(range_step(0, 30, 5), Ok(vec![0, 5, 10, 15, 20, 25]));
//! assert_eq!(range_step(0, -10, -1), Ok((-9..=0).rev().collect::<Vec<i64>>()));
//! assert_eq!(range(0), Ok(vec![]));
//! ```

use super::error::{SequenceError, SequenceResult};

/// Returns `[0, 1, ..., stop - 1]`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidStep`] if `stop` is negative, since the
/// default step cannot descend.
#[inline]
pub fn range(stop: i64) -> SequenceResult<Vec<i64>> {
    range_from(0, stop)
}

/// Returns `[start, start + 1, ..., stop - 1]`.
///
/// `start == stop` yields an empty sequence.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidStep`] if `start > stop`: a descending
/// range needs an explicit negative step, see [`range_step`].
pub fn range_from(start: i64, stop: i64) -> SequenceResult<Vec<i64>> {
    if start > stop {
        return Err(SequenceError::InvalidStep {
            start,
            stop,
            step: None,
        }
        .reported());
    }
    range_step(start, stop, 1)
}

/// Returns the progression `start, start + step, ...` up to but excluding
/// `stop`.
///
/// The progression ends early if the next value would overflow `i64`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidStep`] if `step` is zero, or if `start !=
/// stop` and `step` points away from `stop`.
pub fn range_step(start: i64, stop: i64, step: i64) -> SequenceResult<Vec<i64>> {
    let heads_towards_stop = match start.cmp(&stop) {
        std::cmp::Ordering::Less => step > 0,
        std::cmp::Ordering::Greater => step < 0,
        std::cmp::Ordering::Equal => step != 0,
    };
    if !heads_towards_stop {
        return Err(SequenceError::InvalidStep {
            start,
            stop,
            step: Some(step),
        }
        .reported());
    }

    let span = stop.abs_diff(start);
    let stride = step.unsigned_abs();
    let count = usize::try_from(span.div_ceil(stride)).unwrap_or(usize::MAX);

    Ok(
        std::iter::successors(Some(start), |current| current.checked_add(step))
            .take(count)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step_is_rejected_even_for_empty_range() {
        assert_eq!(
            range_step(3, 3, 0),
            Err(SequenceError::InvalidStep {
                start: 3,
                stop: 3,
                step: Some(0)
            })
        );
    }

    #[test]
    fn test_step_not_dividing_span() {
        assert_eq!(range_step(0, 10, 4), Ok(vec![0, 4, 8]));
        assert_eq!(range_step(10, 0, -4), Ok(vec![10, 6, 2]));
    }

    #[test]
    fn test_range_near_i64_max_stops_before_overflow() {
        let values = range_step(i64::MAX - 2, i64::MAX, 5);
        assert_eq!(values, Ok(vec![i64::MAX - 2]));
    }

    #[test]
    fn test_negative_stop_without_step_is_rejected() {
        assert!(range(-3).is_err());
    }
}
