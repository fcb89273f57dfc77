// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Compiled for the crate's own tests and behind the `test-support` feature.
//! It provides newtypes over primitive numbers so the suites can check that
//! user-defined element types behave exactly like the types they wrap.

#![doc(hidden)]

use num_derive::{NumOps, Zero};

/// Integer newtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, NumOps, Zero)]
pub struct Count(pub i64);

/// Float newtype.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, NumOps, Zero)]
pub struct Ratio(pub f64);

/// String newtype, for the non-numeric operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub String);

impl Label {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Wrap a slice of integers.
pub fn counts(values: &[i64]) -> Vec<Count> {
    values.iter().copied().map(Count).collect()
}

/// Wrap a slice of floats.
pub fn ratios(values: &[f64]) -> Vec<Ratio> {
    values.iter().copied().map(Ratio).collect()
}

/// Wrap a slice of string literals.
pub fn labels(values: &[&str]) -> Vec<Label> {
    values.iter().map(|s| Label((*s).to_string())).collect()
}
