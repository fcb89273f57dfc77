// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the sequence laws.
//!
//! These are debug-mode assertions that the operations call on their own
//! results. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Only need the bounds the operation already has, so they never
//!    tighten a public signature
//!
//! # Contract Table
//!
//! | Contract Function          | Law                                        |
//! |----------------------------|--------------------------------------------|
//! | `check_length_preserved`   | `len(map(f, s)) == len(s)`, same for reversed |
//! | `check_no_longer_than`     | `len(filter(p, s)) <= len(s)`              |
//! | `check_lower_bound`        | `min(s) <= x` for every `x` in `s`         |
//! | `check_upper_bound`        | `x <= max(s)` for every `x` in `s`         |

// ============================================================================
// SHAPE CONTRACTS
// ============================================================================

/// Check that an element-wise operation produced exactly one output per input.
///
/// # Panics (debug builds only)
/// Panics if `output_len != input_len`.
#[inline]
pub fn check_length_preserved(operation: &str, input_len: usize, output_len: usize) {
    debug_assert_eq!(
        input_len, output_len,
        "Contract violation: {} must preserve length - input {} != output {}",
        operation, input_len, output_len
    );
}

/// Check that a selecting operation never invents elements.
///
/// # Panics (debug builds only)
/// Panics if `output_len > input_len`.
#[inline]
pub fn check_no_longer_than(operation: &str, input_len: usize, output_len: usize) {
    debug_assert!(
        output_len <= input_len,
        "Contract violation: {} produced {} elements from {}",
        operation,
        output_len,
        input_len
    );
}

// ============================================================================
// EXTREMUM CONTRACTS
// ============================================================================

/// Bounds only hold when every element is comparable with itself.
/// A single NaN makes the fold order-dependent, so the check is skipped.
fn totally_ordered<T: PartialOrd>(seq: &[T]) -> bool {
    seq.iter().all(|x| x.partial_cmp(x).is_some())
}

/// Check that no element lies strictly below the reported minimum.
///
/// # Panics (debug builds only)
/// Panics if some `seq[i] < minimum`.
#[inline]
pub fn check_lower_bound<T: PartialOrd>(seq: &[T], minimum: &T) {
    if cfg!(debug_assertions) && totally_ordered(seq) {
        let position = seq.iter().position(|x| x < minimum);
        debug_assert!(
            position.is_none(),
            "Contract violation: min - element at position {:?} is below the minimum",
            position
        );
    }
}

/// Check that no element lies strictly above the reported maximum.
///
/// # Panics (debug builds only)
/// Panics if some `seq[i] > maximum`.
#[inline]
pub fn check_upper_bound<T: PartialOrd>(seq: &[T], maximum: &T) {
    if cfg!(debug_assertions) && totally_ordered(seq) {
        let position = seq.iter().position(|x| x > maximum);
        debug_assert!(
            position.is_none(),
            "Contract violation: max - element at position {:?} is above the maximum",
            position
        );
    }
}
