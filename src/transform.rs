// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Order-preserving transformations: map, filter, reversal and equality.
//!
//! Every function borrows its input and returns a freshly allocated `Vec`.
//! The input is never mutated.

use crate::verify::contracts::{check_length_preserved, check_no_longer_than};

/// Apply `f` to every element in order.
///
/// The output has the same length as `seq` and `output[i] == f(&seq[i])`.
///
/// ```
/// let shifted = seqops::map(&[5, 0, 10, 123, -1], |&x| x + 1000);
/// assert_eq!(shifted, [1005, 1000, 1010, 1123, 999]);
/// ```
pub fn map<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let result: Vec<U> = seq.iter().map(f).collect();
    // INVARIANT: map is a length-preserving, index-aligned image of seq
    check_length_preserved("map", seq.len(), result.len());
    result
}

/// Keep the elements for which `pred` returns true, in their original order.
///
/// ```
/// let even = seqops::filter(&["a", "", "qwer", "jkl", "jk", "12345"], |s| s.len() % 2 == 0);
/// assert_eq!(even, ["", "qwer", "jk"]);
/// ```
pub fn filter<T, P>(seq: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let result: Vec<T> = seq.iter().filter(|&x| pred(x)).cloned().collect();
    // INVARIANT: filter selects a subsequence, never more than seq holds
    check_no_longer_than("filter", seq.len(), result.len());
    result
}

/// A new sequence holding the elements of `seq` back to front.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    let result: Vec<T> = seq.iter().rev().cloned().collect();
    // INVARIANT: reversal is a bijection on positions
    check_length_preserved("reversed", seq.len(), result.len());
    result
}

/// Structural equality: same length and pairwise-equal elements in order.
///
/// The two sides may be different containers as long as both view as slices.
pub fn eq<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
