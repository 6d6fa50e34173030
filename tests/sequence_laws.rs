//! Property-based tests for the sequence algorithms.
//!
//! These tests check the algebraic relationships between operations rather
//! than individual examples.

#![cfg(feature = "sequence")]

use std::collections::HashSet;

use proptest::prelude::*;
use seqkit::sequence::{
    Depth, Nested, chunk, difference, first, first_n, flatten, flatten_shallow, flatten_with,
    initial_n, intersection, last, last_n, rest_n, sorted_index, union, uniq, uniq_by,
};

// =============================================================================
// Strategies
// =============================================================================

/// Generates a small `Vec<i32>` with many collisions.
fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10..10_i32, 0..30)
}

/// Generates a non-empty `Vec<i32>`.
fn non_empty_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 1..30)
}

/// Generates an arbitrarily nested sequence of up to four levels.
fn nested_strategy() -> impl Strategy<Value = Vec<Nested<i32>>> {
    let leaf = any::<i32>().prop_map(Nested::leaf);
    let tree = leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Nested::sequence)
    });
    prop::collection::vec(tree, 0..8)
}

proptest! {
    // =========================================================================
    // Access
    // =========================================================================

    #[test]
    fn prop_first_and_last_match_indexing(values in non_empty_vec()) {
        prop_assert_eq!(first(&values), Ok(values[0]));
        prop_assert_eq!(last(&values), Ok(values[values.len() - 1]));
    }

    #[test]
    fn prop_first_n_then_rest_n_reconstructs(values in small_vec(), split in 0..40_usize) {
        let count = split.min(values.len());
        let mut rebuilt = first_n(&values, count);
        rebuilt.extend(rest_n(&values, count));
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn prop_initial_n_then_last_n_reconstructs(values in small_vec(), split in 0..40_usize) {
        let count = split.min(values.len());
        let mut rebuilt = initial_n(&values, count);
        rebuilt.extend(last_n(&values, count));
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn prop_chunks_concatenate_to_input(values in small_vec(), size in 1..8_usize) {
        let chunks = chunk(&values, size).unwrap();
        prop_assert!(chunks.iter().all(|group| !group.is_empty() && group.len() <= size));
        prop_assert!(chunks.iter().rev().skip(1).all(|group| group.len() == size));
        prop_assert_eq!(chunks.concat(), values);
    }

    // =========================================================================
    // Flatten
    // =========================================================================

    #[test]
    fn prop_repeated_shallow_flatten_converges_to_deep(nested in nested_strategy()) {
        let mut current = nested.clone();
        while current.iter().any(|element| !element.is_leaf()) {
            current = flatten_shallow(&current);
        }
        prop_assert_eq!(current, flatten_with(&nested, Depth::Deep));
    }

    #[test]
    fn prop_deep_flatten_is_idempotent(nested in nested_strategy()) {
        let once = flatten_with(&nested, Depth::Deep);
        prop_assert_eq!(flatten(&once), flatten(&nested));
    }

    // =========================================================================
    // Uniqueness
    // =========================================================================

    #[test]
    fn prop_uniq_has_no_duplicates(values in small_vec()) {
        let unique = uniq(&values);
        let distinct: HashSet<_> = unique.iter().collect();
        prop_assert_eq!(distinct.len(), unique.len());
        prop_assert!(unique.len() <= values.len());
    }

    #[test]
    fn prop_uniq_preserves_first_seen_order(values in small_vec()) {
        let unique = uniq(&values);
        let first_positions: Vec<usize> = unique
            .iter()
            .map(|element| values.iter().position(|candidate| candidate == element).unwrap())
            .collect();
        prop_assert!(first_positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_uniq_by_identity_is_uniq(values in small_vec()) {
        prop_assert_eq!(uniq_by(&values, |value| *value), uniq(&values));
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    #[test]
    fn prop_intersection_with_self_is_uniq(values in small_vec()) {
        prop_assert_eq!(intersection(&values, &[&values]), uniq(&values));
    }

    #[test]
    fn prop_difference_with_self_is_empty(values in small_vec()) {
        prop_assert!(difference(&values, &[&values]).is_empty());
    }

    #[test]
    fn prop_unary_union_is_uniq(values in small_vec()) {
        prop_assert_eq!(union(&values, &[]), uniq(&values));
    }

    #[test]
    fn prop_difference_and_intersection_partition_uniq(left in small_vec(), right in small_vec()) {
        let common = intersection(&left, &[&right]);
        let only_left = uniq(&difference(&left, &[&right]));
        prop_assert_eq!(common.len() + only_left.len(), uniq(&left).len());
    }

    // =========================================================================
    // Binary search
    // =========================================================================

    #[test]
    fn prop_sorted_index_counts_smaller_elements(mut values in small_vec(), probe in -12..12_i32) {
        values.sort_unstable();
        let smaller = values.iter().filter(|element| **element < probe).count();
        let expected = (smaller < values.len()).then_some(smaller);
        prop_assert_eq!(sorted_index(&values, &probe), expected);
    }
}
