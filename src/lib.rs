// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic map, filter, reduce and aggregate operations over slices.
//!
//! Every function is a single left-to-right pass over a borrowed slice. The
//! input is never mutated and every result is freshly allocated. Misuse
//! (summing strings, ordering structs without `PartialOrd`) is a type error,
//! and only the strict `try_min` / `try_max` report an error at runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  numeric.rs  │────▶│   fold.rs    │◀────│ variadic.rs  │
//! │  (Numeric,   │     │ (reduce, sum,│     │ (var_sum!,   │
//! │ min_of, ...) │     │ min, max, ..)│     │  var_all!..) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//! ┌──────────────┐            ▼
//! │ transform.rs │     ┌──────────────┐
//! │ (map, filter,│────▶│    ext.rs    │
//! │ reversed, eq)│     │ (method form)│
//! └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 verify/contracts.rs                 │
//! │   (debug-build checks of length and bound laws)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Empty input
//!
//! | Operation  | Answer for `&[]` |
//! |------------|------------------|
//! | `map`      | `[]`             |
//! | `filter`   | `[]`             |
//! | `reduce`   | `initial`        |
//! | `sum`      | `0`              |
//! | `min`      | `0`              |
//! | `max`      | `0`              |
//! | `all`      | `true`           |
//! | `any`      | `false`          |
//! | `reversed` | `[]`             |
//!
//! # Usage
//!
//! ```
//! use seqops::{filter, map, reduce, sum, var_max};
//!
//! let doubled = map(&[1, 2, 3], |&x| x * 2);
//! let big = filter(&doubled, |&x| x > 2);
//! assert_eq!(sum(&big), 10);
//! assert_eq!(reduce(&big, 1, |acc, &x| acc * x), 24);
//! assert_eq!(var_max!(3, 9, 4), 9);
//! ```

mod error;
mod ext;
mod fold;
mod numeric;
mod transform;
mod variadic;
pub mod verify;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-exports for public API
pub use error::{Result, SequenceError};
pub use ext::{BoolOps, NumericOps, SequenceOps};
pub use fold::{all, any, max, min, reduce, sum, try_max, try_min};
pub use numeric::{max_of, min_of, Numeric};
pub use transform::{eq, filter, map, reversed};
