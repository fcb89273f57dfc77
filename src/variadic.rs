// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variadic front-ends for the aggregates.
//!
//! Each macro packs its arguments into an array and calls the slice function
//! of the same name, so `var_sum!(a, b, c)` is exactly `sum(&[a, b, c])`.
//! With no arguments they inherit the empty-sequence answers: `0`, `0`, `0`,
//! `true`, `false`.
//!
//! An empty numeric call needs its element type from somewhere. Either let
//! inference find it, or name it after the `type` keyword:
//!
//! ```
//! use seqops::{var_max, var_sum};
//! use std::num::Wrapping;
//!
//! let total: f64 = var_sum!();
//! assert_eq!(total, 0.0);
//! assert_eq!(var_max!(type i64), 0);
//! assert_eq!(var_sum!(type Wrapping<u8>), Wrapping(0));
//! assert_eq!(var_sum!(1, 2, 3), 6);
//! ```

/// Sum of the arguments. See [`sum`](crate::sum).
#[macro_export]
macro_rules! var_sum {
    (type $t:ty) => {
        $crate::sum::<$t>(&[])
    };
    ($($x:expr),* $(,)?) => {
        $crate::sum(&[$($x),*])
    };
}

/// Smallest argument. See [`min`](crate::min).
#[macro_export]
macro_rules! var_min {
    (type $t:ty) => {
        $crate::min::<$t>(&[])
    };
    ($($x:expr),* $(,)?) => {
        $crate::min(&[$($x),*])
    };
}

/// Largest argument. See [`max`](crate::max).
#[macro_export]
macro_rules! var_max {
    (type $t:ty) => {
        $crate::max::<$t>(&[])
    };
    ($($x:expr),* $(,)?) => {
        $crate::max(&[$($x),*])
    };
}

/// True when every argument is true. See [`all`](crate::all).
#[macro_export]
macro_rules! var_all {
    ($($x:expr),* $(,)?) => {
        $crate::all(&[$($x),*])
    };
}

/// True when some argument is true. See [`any`](crate::any).
#[macro_export]
macro_rules! var_any {
    ($($x:expr),* $(,)?) => {
        $crate::any(&[$($x),*])
    };
}
