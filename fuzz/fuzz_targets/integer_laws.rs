// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sequence laws over integers.
//!
//! Elements are widened from `i32` to `i64` so that summing any fuzzer-sized
//! input cannot overflow.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqops::{eq, filter, map, max, min, reduce, reversed, sum, try_max, try_min};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i32>,
    threshold: i32,
}

fuzz_target!(|input: Input| {
    let seq: Vec<i64> = input.values.iter().map(|&x| i64::from(x)).collect();
    let threshold = i64::from(input.threshold);

    // Property 1: map identity and length
    assert!(eq(&map(&seq, |&x| x), &seq));

    // Property 2: filter keeps exactly the matching elements, in order
    let kept = filter(&seq, |&x| x >= threshold);
    let expected: Vec<i64> = seq.iter().copied().filter(|&x| x >= threshold).collect();
    assert_eq!(kept, expected);

    // Property 3: reversal is an involution
    assert_eq!(reversed(&reversed(&seq)), seq);

    // Property 4: sum agrees with a plain fold
    assert_eq!(sum(&seq), reduce(&seq, 0, |acc, &x| acc + x));

    // Property 5: extrema bound every element and are members
    if seq.is_empty() {
        assert_eq!((min(&seq), max(&seq)), (0, 0));
        assert!(try_min(&seq).is_err() && try_max(&seq).is_err());
    } else {
        let lo = min(&seq);
        let hi = max(&seq);
        assert!(seq.iter().all(|&x| lo <= x && x <= hi));
        assert!(seq.contains(&lo) && seq.contains(&hi));
    }
});
