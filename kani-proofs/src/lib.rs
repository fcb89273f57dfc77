// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the seqops fold primitives.
//!
//! This standalone crate extracts the seed-less fold, the binary selectors
//! and reversal, and proves their laws for every input up to `MAX_LEN`
//! elements using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Bounds**: `min(s) <= s[i] <= max(s)` for every non-empty `s`
//! 2. **Membership**: `min(s)` and `max(s)` are elements of `s`
//! 3. **Empty input**: `min([]) == max([]) == 0`
//! 4. **Involution**: `reversed(reversed(s)) == s`
//! 5. **No panics**: `sum` of `i8` widened to `i32` never overflows

/// Longest sequence the proofs consider.
pub const MAX_LEN: usize = 6;

// ============================================================================
// FOLD PRIMITIVES (copied from src/fold.rs and src/numeric.rs)
// ============================================================================

/// Smaller of two values; ties go right.
pub fn min_of(x: i32, y: i32) -> i32 {
    if x < y {
        x
    } else {
        y
    }
}

/// Larger of two values; ties go left.
pub fn max_of(x: i32, y: i32) -> i32 {
    if x >= y {
        x
    } else {
        y
    }
}

/// Seed-less fold with a zero value for empty input.
pub fn reduce_monoid(seq: &[i32], zero_value: i32, f: fn(i32, i32) -> i32) -> i32 {
    match seq.split_first() {
        None => zero_value,
        Some((&first, rest)) => rest.iter().fold(first, |acc, &x| f(acc, x)),
    }
}

pub fn min(seq: &[i32]) -> i32 {
    reduce_monoid(seq, 0, min_of)
}

pub fn max(seq: &[i32]) -> i32 {
    reduce_monoid(seq, 0, max_of)
}

pub fn sum(seq: &[i32]) -> i32 {
    seq.iter().fold(0, |acc, &x| acc + x)
}

pub fn reversed(seq: &[i32]) -> Vec<i32> {
    seq.iter().rev().copied().collect()
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic sequence of symbolic length.
    fn any_sequence(buf: &mut [i32; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for slot in buf.iter_mut() {
            *slot = kani::any();
        }
        len
    }

    /// Verify min/max bound every element of a non-empty sequence.
    #[kani::proof]
    #[kani::unwind(8)] // MAX_LEN + 2
    fn verify_extrema_bound_elements() {
        let mut buf = [0i32; MAX_LEN];
        let len = any_sequence(&mut buf);
        kani::assume(len > 0);
        let seq = &buf[..len];

        let lo = min(seq);
        let hi = max(seq);
        for &x in seq {
            kani::assert(lo <= x, "min must not exceed any element");
            kani::assert(x <= hi, "max must not be exceeded by any element");
        }
    }

    /// Verify min/max are members of the sequence.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_extrema_are_members() {
        let mut buf = [0i32; MAX_LEN];
        let len = any_sequence(&mut buf);
        kani::assume(len > 0);
        let seq = &buf[..len];

        kani::assert(seq.contains(&min(seq)), "min must be an element");
        kani::assert(seq.contains(&max(seq)), "max must be an element");
    }

    /// Verify the empty-input convention.
    #[kani::proof]
    fn verify_empty_extrema_are_zero() {
        let empty: &[i32] = &[];
        kani::assert(min(empty) == 0, "min of empty must be 0");
        kani::assert(max(empty) == 0, "max of empty must be 0");
        kani::assert(sum(empty) == 0, "sum of empty must be 0");
    }

    /// Verify reversal is an involution.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_reversed_involution() {
        let mut buf = [0i32; MAX_LEN];
        let len = any_sequence(&mut buf);
        let seq = &buf[..len];

        let twice = reversed(&reversed(seq));
        kani::assert(twice.as_slice() == seq, "reversing twice must restore input");
    }

    /// Verify summing small widened values cannot overflow.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_sum_of_widened_bytes_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0i32; MAX_LEN];
        for slot in buf.iter_mut() {
            let byte: i8 = kani::any();
            *slot = i32::from(byte);
        }
        let total = sum(&buf[..len]);
        kani::assert(
            total.unsigned_abs() <= 128 * MAX_LEN as u32,
            "sum must stay within len * 128",
        );
    }
}
