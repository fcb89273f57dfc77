// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numeric type class shared by `sum`, `min` and `max`.
//!
//! A type is numeric when it can be copied, compared, added, and has an
//! additive identity. Every primitive integer and float qualifies, and so does
//! any newtype that derives or implements those four capabilities:
//!
//! ```
//! use seqops::sum;
//! use std::ops::Add;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
//! struct Cents(i64);
//!
//! impl Add for Cents {
//!     type Output = Cents;
//!     fn add(self, rhs: Cents) -> Cents {
//!         Cents(self.0 + rhs.0)
//!     }
//! }
//!
//! impl num_traits::Zero for Cents {
//!     fn zero() -> Cents {
//!         Cents(0)
//!     }
//!     fn is_zero(&self) -> bool {
//!         self.0 == 0
//!     }
//! }
//!
//! assert_eq!(sum(&[Cents(150), Cents(-50)]), Cents(100));
//! ```

use num_traits::Zero;
use std::ops::Add;

/// Element types accepted by the numeric aggregates.
///
/// Blanket-implemented; never implement it by hand.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Numeric for T where T: Copy + PartialOrd + Add<Output = T> + Zero {}

/// Smaller of two values.
///
/// Returns `x` only when `x < y`. Ties and incomparable pairs (NaN) yield `y`.
#[inline]
pub fn min_of<T: PartialOrd>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// Larger of two values.
///
/// Returns `x` when `x >= y`. Incomparable pairs (NaN) yield `y`.
#[inline]
pub fn max_of<T: PartialOrd>(x: T, y: T) -> T {
    if x >= y {
        x
    } else {
        y
    }
}
