//! Algebraic laws of the sequence operations.

use super::common::{
    bools, counts, finite_floats, is_subsequence, non_empty_ints, small_ints, words,
};
use proptest::prelude::*;
use seqops::{
    all, eq, filter, map, max, min, reduce, reversed, sum, try_max, try_min, var_max, var_min,
    var_sum, SequenceOps,
};

// ============================================================================
// MAP PROPERTIES
// ============================================================================

proptest! {
    /// Property: mapping the identity reproduces the input.
    #[test]
    fn prop_map_identity(seq in words()) {
        prop_assert!(eq(&map(&seq, |s| s.clone()), &seq));
    }

    /// Property: map preserves length.
    #[test]
    fn prop_map_preserves_length(seq in small_ints()) {
        prop_assert_eq!(map(&seq, |&x| x.to_string()).len(), seq.len());
    }

    /// Property: output[i] is f(input[i]).
    #[test]
    fn prop_map_is_index_aligned(seq in small_ints()) {
        let doubled = map(&seq, |&x| x * 2);
        for (i, x) in seq.iter().enumerate() {
            prop_assert_eq!(doubled[i], x * 2);
        }
    }

    /// Property: mapping twice is mapping the composition.
    #[test]
    fn prop_map_composes(seq in small_ints()) {
        let twice = map(&map(&seq, |&x| x + 1), |&x| x * 3);
        let once = map(&seq, |&x| (x + 1) * 3);
        prop_assert!(eq(&twice, &once));
    }
}

// ============================================================================
// FILTER PROPERTIES
// ============================================================================

proptest! {
    /// Property: every kept element satisfies the predicate.
    #[test]
    fn prop_filter_output_satisfies_predicate(seq in words()) {
        let even = filter(&seq, |s| s.len() % 2 == 0);
        prop_assert!(even.iter().all(|s| s.len() % 2 == 0));
    }

    /// Property: the output is an order-preserving subsequence of the input.
    #[test]
    fn prop_filter_is_subsequence(seq in small_ints(), threshold in -1000i64..1000) {
        let kept = filter(&seq, |&x| x > threshold);
        prop_assert!(is_subsequence(&kept, &seq));
    }

    /// Property: nothing satisfying the predicate is dropped.
    #[test]
    fn prop_filter_is_complete(seq in small_ints()) {
        let kept = filter(&seq, |&x| x % 3 == 0);
        let expected = seq.iter().filter(|&&x| x % 3 == 0).count();
        prop_assert_eq!(kept.len(), expected);
    }

    /// Property: filtering is idempotent.
    #[test]
    fn prop_filter_idempotent(seq in small_ints()) {
        let once = filter(&seq, |&x| x < 0);
        let twice = filter(&once, |&x| x < 0);
        prop_assert!(eq(&once, &twice));
    }
}

// ============================================================================
// REVERSAL PROPERTIES
// ============================================================================

proptest! {
    /// Property: reversal is an involution.
    #[test]
    fn prop_reversed_involution(seq in words()) {
        prop_assert!(eq(&reversed(&reversed(&seq)), &seq));
    }

    /// Property: element i lands at len - 1 - i.
    #[test]
    fn prop_reversed_mirrors_positions(seq in small_ints()) {
        let back = reversed(&seq);
        prop_assert_eq!(back.len(), seq.len());
        for (i, x) in seq.iter().enumerate() {
            prop_assert_eq!(&back[seq.len() - 1 - i], x);
        }
    }

    /// Property: order-insensitive aggregates ignore reversal.
    #[test]
    fn prop_aggregates_ignore_order(seq in small_ints()) {
        let back = reversed(&seq);
        prop_assert_eq!(sum(&seq), sum(&back));
        prop_assert_eq!(min(&seq), min(&back));
        prop_assert_eq!(max(&seq), max(&back));
    }
}

// ============================================================================
// AGGREGATE PROPERTIES
// ============================================================================

proptest! {
    /// Property: min(s) <= every element <= max(s) for non-empty integer input.
    #[test]
    fn prop_extrema_bound_integers(seq in non_empty_ints()) {
        let lo = min(&seq);
        let hi = max(&seq);
        prop_assert!(seq.iter().all(|&x| lo <= x && x <= hi));
        prop_assert!(seq.contains(&lo));
        prop_assert!(seq.contains(&hi));
    }

    /// Property: the same bounds hold for finite floats.
    #[test]
    fn prop_extrema_bound_floats(seq in finite_floats()) {
        prop_assume!(!seq.is_empty());
        let lo = min(&seq);
        let hi = max(&seq);
        prop_assert!(seq.iter().all(|&x| lo <= x && x <= hi));
    }

    /// Property: strict variants agree with the defaults whenever input is non-empty.
    #[test]
    fn prop_strict_variants_agree(seq in small_ints()) {
        if seq.is_empty() {
            prop_assert!(try_min(&seq).is_err());
            prop_assert!(try_max(&seq).is_err());
        } else {
            prop_assert_eq!(try_min(&seq), Ok(min(&seq)));
            prop_assert_eq!(try_max(&seq), Ok(max(&seq)));
        }
    }

    /// Property: sum distributes over concatenation.
    #[test]
    fn prop_sum_splits(left in small_ints(), right in small_ints()) {
        let joined: Vec<i64> = left.iter().chain(&right).copied().collect();
        prop_assert_eq!(sum(&joined), sum(&left) + sum(&right));
    }

    /// Property: newtype elements aggregate exactly like the wrapped type.
    #[test]
    fn prop_newtypes_match_inner(seq in small_ints()) {
        let wrapped = counts(&seq);
        prop_assert_eq!(sum(&wrapped).0, sum(&seq));
        prop_assert_eq!(min(&wrapped).0, min(&seq));
        prop_assert_eq!(max(&wrapped).0, max(&seq));
    }

    /// Property: all is false exactly when some element is false.
    #[test]
    fn prop_all_detects_false(seq in bools()) {
        prop_assert_eq!(all(&seq), !seq.contains(&false));
        prop_assert_eq!(seqops::any(&seq), seq.contains(&true));
    }

    /// Property: a single variadic argument is its own sum, min and max.
    #[test]
    fn prop_single_argument_identity(x in -1.0e9f64..1.0e9, y in any::<i64>()) {
        prop_assert_eq!(var_sum!(x), x);
        prop_assert_eq!(var_min!(x), x);
        prop_assert_eq!(var_max!(x), x);
        prop_assert_eq!(var_sum!(y), y);
        prop_assert_eq!(var_min!(y), y);
        prop_assert_eq!(var_max!(y), y);
    }
}

// ============================================================================
// METHOD FORM
// ============================================================================

proptest! {
    /// Property: the extension methods agree with the free functions.
    #[test]
    fn prop_methods_agree_with_functions(seq in small_ints()) {
        prop_assert_eq!(seq.map_to(|&x| x - 1), map(&seq, |&x| x - 1));
        prop_assert_eq!(seq.filter_by(|&x| x > 0), filter(&seq, |&x| x > 0));
        prop_assert_eq!(
            seq.reduce_with(0, |acc, &x| acc ^ x),
            reduce(&seq, 0, |acc, &x| acc ^ x)
        );
        prop_assert_eq!(SequenceOps::reversed(seq.as_slice()), reversed(&seq));
    }
}
