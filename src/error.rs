// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the strict aggregate variants.
//!
//! The plain operations are total and never return these. Only `try_min` and
//! `try_max` refuse an empty sequence instead of answering with zero.

use std::fmt;

/// Error type for the strict aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The operation has no meaningful answer for an empty sequence.
    EmptyInput { operation: &'static str },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::EmptyInput { operation } => {
                write!(f, "{} of an empty sequence is undefined", operation)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Result alias for the strict aggregates.
pub type Result<T> = std::result::Result<T, SequenceError>;
