// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for float min/max, NaN and infinities included.
//!
//! The fuzzer can produce any bit pattern, so this is where the NaN rules get
//! exercised: the fold must never panic, the debug contracts must stay quiet
//! when NaN is present, and without NaN the results must match `f64::min` /
//! `f64::max`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqops::{max, min, sum};

fuzz_target!(|values: Vec<f64>| {
    // Property 1: never panics, whatever the bit patterns
    let lo = min(&values);
    let hi = max(&values);
    let _ = sum(&values);

    if values.iter().any(|x| x.is_nan()) {
        return;
    }

    // Property 2: without NaN, agree with the std reductions
    let expected_lo = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let expected_hi = values.iter().copied().reduce(f64::max).unwrap_or(0.0);
    assert_eq!(lo, expected_lo);
    assert_eq!(hi, expected_hi);
});
