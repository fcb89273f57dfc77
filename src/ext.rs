// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Method syntax for the free functions.
//!
//! The traits are implemented for `[T]`, so anything that derefs to a slice
//! (`Vec`, arrays, boxed slices) picks the methods up. Every method forwards
//! to the free function of the same meaning.
//!
//! ```
//! use seqops::{BoolOps, NumericOps, SequenceOps};
//!
//! let readings = vec![3.5, -1.0, 8.25];
//! assert_eq!(readings.max_all(), 8.25);
//! assert_eq!(readings.reversed(), [8.25, -1.0, 3.5]);
//! assert!(readings.map_to(|&x| x > 0.0).any_true());
//! ```

use crate::error::Result;
use crate::fold::{all, any, max, min, reduce, sum, try_max, try_min};
use crate::numeric::Numeric;
use crate::transform::{eq, filter, map, reversed};

/// Element-type-agnostic operations.
pub trait SequenceOps<T> {
    /// See [`map`](crate::map).
    fn map_to<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// See [`filter`](crate::filter).
    fn filter_by<P>(&self, pred: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`reduce`](crate::reduce).
    fn reduce_with<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// See [`reversed`](crate::reversed).
    fn reversed(&self) -> Vec<T>
    where
        T: Clone;

    /// See [`eq`](crate::eq).
    fn seq_eq(&self, other: &[T]) -> bool
    where
        T: PartialEq;
}

impl<T> SequenceOps<T> for [T] {
    fn map_to<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        map(self, f)
    }

    fn filter_by<P>(&self, pred: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(self, pred)
    }

    fn reduce_with<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        reduce(self, initial, f)
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        reversed(self)
    }

    fn seq_eq(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        eq(self, other)
    }
}

/// Aggregates over numeric elements.
pub trait NumericOps<T: Numeric> {
    fn sum_all(&self) -> T;
    fn min_all(&self) -> T;
    fn max_all(&self) -> T;
    fn try_min_all(&self) -> Result<T>;
    fn try_max_all(&self) -> Result<T>;
}

impl<T: Numeric> NumericOps<T> for [T] {
    fn sum_all(&self) -> T {
        sum(self)
    }

    fn min_all(&self) -> T {
        min(self)
    }

    fn max_all(&self) -> T {
        max(self)
    }

    fn try_min_all(&self) -> Result<T> {
        try_min(self)
    }

    fn try_max_all(&self) -> Result<T> {
        try_max(self)
    }
}

/// Quantifiers over boolean elements.
pub trait BoolOps {
    fn all_true(&self) -> bool;
    fn any_true(&self) -> bool;
}

impl BoolOps for [bool] {
    fn all_true(&self) -> bool {
        all(self)
    }

    fn any_true(&self) -> bool {
        any(self)
    }
}
