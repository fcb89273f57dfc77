// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for all/any and their method forms.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqops::{all, any, map, BoolOps};

fuzz_target!(|flags: Vec<bool>| {
    // Property 1: agree with the iterator quantifiers
    assert_eq!(all(&flags), flags.iter().all(|&b| b));
    assert_eq!(any(&flags), flags.iter().any(|&b| b));

    // Property 2: De Morgan
    let negated = map(&flags, |&b| !b);
    assert_eq!(all(&flags), !any(&negated));

    // Property 3: method form is the same function
    assert_eq!(flags.all_true(), all(&flags));
    assert_eq!(flags.any_true(), any(&flags));
});
