// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for share decoding, selection and reconstruction.
//!
//! Every failure the core can produce is a distinct variant so callers can
//! match on the kind instead of parsing messages.

use num_bigint::BigInt;
use thiserror::Error;

/// Main error type for secret recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    /// Radix outside `[2, 36]`, or radix text that is not a number
    #[error("Invalid radix: {radix} (expected a base between 2 and 36)")]
    InvalidRadix { radix: String },

    /// A value string contains a character that is not a digit of its radix
    #[error("{}", describe_invalid_digit(.digits, .radix, .position, .found))]
    InvalidDigit {
        digits: String,
        radix: u32,
        position: usize,
        found: Option<char>,
    },

    /// Fewer shares than the threshold requires
    #[error("Insufficient shares: {required} required but only {available} available")]
    InsufficientShares { required: usize, available: usize },

    /// Two shares have the same abscissa, so a basis denominator is zero
    #[error("Degenerate input: more than one share has x = {x}")]
    DegenerateInput { x: BigInt },

    /// The exact interpolated value is not an integer
    #[error("Non-integral result: {numerator}/{denominator} does not reduce to an integer")]
    NonIntegralResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Threshold of zero
    #[error("Invalid threshold: k = {k} (must be at least 1)")]
    InvalidThreshold { k: usize },
}

/// Result type alias for recovery operations
pub type RecoveryResult<T> = Result<T, RecoveryError>;

impl RecoveryError {
    pub fn invalid_radix(radix: impl ToString) -> Self {
        RecoveryError::InvalidRadix {
            radix: radix.to_string(),
        }
    }

    pub fn invalid_digit(digits: &str, radix: u32, position: usize, found: Option<char>) -> Self {
        RecoveryError::InvalidDigit {
            digits: digits.to_owned(),
            radix,
            position,
            found,
        }
    }

    pub fn insufficient_shares(required: usize, available: usize) -> Self {
        RecoveryError::InsufficientShares {
            required,
            available,
        }
    }

    pub fn degenerate(x: &BigInt) -> Self {
        RecoveryError::DegenerateInput { x: x.clone() }
    }
}

fn describe_invalid_digit(
    digits: &str,
    radix: &u32,
    position: &usize,
    found: &Option<char>,
) -> String {
    match found {
        Some(c) => format!(
            "Invalid digit: '{c}' at position {position} of \"{digits}\" is not a base-{radix} digit"
        ),
        None => format!("Invalid digit: \"{digits}\" contains no base-{radix} digits"),
    }
}
