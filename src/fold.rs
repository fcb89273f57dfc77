// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left folds and the aggregates built on them.
//!
//! `reduce` is the primitive. Everything else in this module is a
//! specialization of it:
//!
//! | Function | Combiner      | Seed                         | Empty input |
//! |----------|---------------|------------------------------|-------------|
//! | `sum`    | `+`           | `0`                          | `0`         |
//! | `min`    | [`min_of`]    | first element                | `0`         |
//! | `max`    | [`max_of`]    | first element                | `0`         |
//! | `all`    | `&&`          | `true`                       | `true`      |
//! | `any`    | `\|\|`        | `false`                      | `false`     |
//!
//! `min` and `max` answer `0` for an empty sequence. That is a convention, not
//! a mathematical fact; callers that need to tell "empty" apart from "the
//! minimum is zero" should use [`try_min`] / [`try_max`].

use log::trace;

use crate::error::{Result, SequenceError};
use crate::numeric::{max_of, min_of, Numeric};
use crate::verify::contracts::{check_lower_bound, check_upper_bound};

/// Left fold: start from `initial` and combine it with each element in order.
///
/// An empty sequence returns `initial` untouched. The accumulator type is
/// independent of the element type.
///
/// ```
/// let total = seqops::reduce(&[1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], 0, |acc, &x| acc + x);
/// assert_eq!(total, 78);
///
/// let reversed = seqops::reduce(&[1, 2, 3], Vec::new(), |acc, &x| {
///     let mut prefixed = vec![x];
///     prefixed.extend(acc);
///     prefixed
/// });
/// assert_eq!(reversed, [3, 2, 1]);
/// ```
pub fn reduce<T, A, F>(seq: &[T], initial: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.iter().fold(initial, f)
}

/// Fold without an explicit seed: the first element seeds the fold over the
/// rest, and `zero_value` stands in for an empty sequence.
pub(crate) fn reduce_monoid<T, F>(seq: &[T], zero_value: T, mut f: F) -> T
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    match seq.split_first() {
        None => {
            trace!("seed-less fold over empty sequence, answering with zero value");
            zero_value
        }
        Some((first, rest)) => reduce(rest, first.clone(), |acc, x| f(acc, x.clone())),
    }
}

/// Sum of the elements; `0` for an empty sequence.
///
/// Integer overflow behaves like the element type's `+`: it panics in debug
/// builds. Wrap the elements in [`std::num::Wrapping`] to get two's-complement
/// wraparound in every build:
///
/// ```
/// use std::num::Wrapping;
///
/// assert_eq!(seqops::sum(&[Wrapping(i32::MAX), Wrapping(1)]), Wrapping(i32::MIN));
/// ```
pub fn sum<T: Numeric>(seq: &[T]) -> T {
    reduce(seq, T::zero(), |acc, &x| acc + x)
}

/// Smallest element; `0` for an empty sequence.
pub fn min<T: Numeric>(seq: &[T]) -> T {
    let minimum = reduce_monoid(seq, T::zero(), min_of);
    // INVARIANT: no element is strictly below the minimum
    check_lower_bound(seq, &minimum);
    minimum
}

/// Largest element; `0` for an empty sequence.
pub fn max<T: Numeric>(seq: &[T]) -> T {
    let maximum = reduce_monoid(seq, T::zero(), max_of);
    // INVARIANT: no element is strictly above the maximum
    check_upper_bound(seq, &maximum);
    maximum
}

/// Smallest element, refusing an empty sequence.
///
/// ```
/// use seqops::{try_min, SequenceError};
///
/// assert_eq!(try_min(&[4, -2, 9]), Ok(-2));
/// assert_eq!(try_min::<i32>(&[]), Err(SequenceError::EmptyInput { operation: "min" }));
/// ```
pub fn try_min<T: Numeric>(seq: &[T]) -> Result<T> {
    if seq.is_empty() {
        trace!("rejecting min of empty sequence");
        return Err(SequenceError::EmptyInput { operation: "min" });
    }
    Ok(min(seq))
}

/// Largest element, refusing an empty sequence.
pub fn try_max<T: Numeric>(seq: &[T]) -> Result<T> {
    if seq.is_empty() {
        trace!("rejecting max of empty sequence");
        return Err(SequenceError::EmptyInput { operation: "max" });
    }
    Ok(max(seq))
}

/// True when every element is true; vacuously true for an empty sequence.
pub fn all(seq: &[bool]) -> bool {
    reduce(seq, true, |acc, &x| acc && x)
}

/// True when at least one element is true; false for an empty sequence.
pub fn any(seq: &[bool]) -> bool {
    reduce(seq, false, |acc, &x| acc || x)
}
