// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for the sequence laws.
//!
//! The operations call these on their own results. They panic in debug builds
//! when a law is broken and compile to nothing in release. The property tests
//! in `tests/property` exercise the same laws from the outside.

pub mod contracts;
