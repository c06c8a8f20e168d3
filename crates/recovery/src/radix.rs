// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positional numeral decoding for share values.
//!
//! Share values arrive as digit strings in any base between 2 and 36. Digits
//! past 9 are the letters `a..z`, in either case. A single leading `+` or `-`
//! is accepted; whitespace and `_` separators are not.

use crate::errors::{RecoveryError, RecoveryResult};
use num_bigint::{BigInt, BigUint, Sign};

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix (`0-9` plus `a-z`)
pub const MAX_RADIX: u32 = 36;

fn check_radix(radix: u32) -> RecoveryResult<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(RecoveryError::invalid_radix(radix));
    }
    Ok(())
}

/// Decode `digits` written in base `radix` into an exact integer.
///
/// # Errors
///
/// - [`RecoveryError::InvalidRadix`] if `radix` is outside `[2, 36]`.
/// - [`RecoveryError::InvalidDigit`] if a character is not a digit of `radix`,
///   or if there are no digits at all.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use sss_recovery::decode;
///
/// assert_eq!(decode("1010", 2).unwrap(), BigInt::from(10));
/// assert_eq!(decode("-Ff", 16).unwrap(), BigInt::from(-255));
/// ```
pub fn decode(digits: &str, radix: u32) -> RecoveryResult<BigInt> {
    check_radix(radix)?;

    let (sign, body, offset) = match digits.chars().next() {
        Some('-') => (Sign::Minus, &digits[1..], 1),
        Some('+') => (Sign::Plus, &digits[1..], 1),
        _ => (Sign::Plus, digits, 0),
    };

    if body.is_empty() {
        return Err(RecoveryError::invalid_digit(digits, radix, offset, None));
    }

    let values = body
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_digit(radix)
                .map(|d| d as u8)
                .ok_or_else(|| RecoveryError::invalid_digit(digits, radix, offset + i, Some(c)))
        })
        .collect::<RecoveryResult<Vec<u8>>>()?;

    let magnitude = BigUint::from_radix_be(&values, radix)
        .ok_or_else(|| RecoveryError::invalid_radix(radix))?;

    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Render `value` in base `radix` using lowercase letters for digits past 9.
pub fn encode(value: &BigInt, radix: u32) -> RecoveryResult<String> {
    check_radix(radix)?;
    Ok(value.to_str_radix(radix))
}

/// Parse a radix given as text, as the shares document carries it.
pub fn parse_radix(text: &str) -> RecoveryResult<u32> {
    let radix = text
        .parse::<u32>()
        .map_err(|_| RecoveryError::invalid_radix(text))?;
    check_radix(radix)?;
    Ok(radix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn test_decode_common_bases() {
        assert_eq!(decode("10", 10).unwrap(), BigInt::from(10));
        assert_eq!(decode("1010", 2).unwrap(), BigInt::from(10));
        assert_eq!(decode("777", 8).unwrap(), BigInt::from(511));
        assert_eq!(decode("zz", 36).unwrap(), BigInt::from(1295));
        assert_eq!(decode("0", 7).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("DeadBeef", 16).unwrap(), decode("deadbeef", 16).unwrap());
        assert_eq!(decode("DEADBEEF", 16).unwrap(), BigInt::from(0xdead_beef_u64));
    }

    #[test]
    fn test_decode_sign() {
        assert_eq!(decode("-101", 2).unwrap(), BigInt::from(-5));
        assert_eq!(decode("+101", 2).unwrap(), BigInt::from(5));
        assert_eq!(decode("-0", 10).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_decode_large_value() {
        let digits = "1".repeat(300);
        let expected = BigInt::from_str(&digits).unwrap();
        assert_eq!(decode(&digits, 10).unwrap(), expected);
    }

    #[test]
    fn test_decode_rejects_bad_digits() {
        assert_eq!(
            decode("102", 2),
            Err(RecoveryError::invalid_digit("102", 2, 2, Some('2')))
        );
        assert_eq!(
            decode("-1g", 16),
            Err(RecoveryError::invalid_digit("-1g", 16, 2, Some('g')))
        );
        assert_eq!(
            decode(" 12", 10),
            Err(RecoveryError::invalid_digit(" 12", 10, 0, Some(' ')))
        );
        assert_eq!(
            decode("1_000", 10),
            Err(RecoveryError::invalid_digit("1_000", 10, 1, Some('_')))
        );
        assert_eq!(
            decode("--1", 10),
            Err(RecoveryError::invalid_digit("--1", 10, 1, Some('-')))
        );
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(
            decode("", 10),
            Err(RecoveryError::invalid_digit("", 10, 0, None))
        );
        assert_eq!(
            decode("+", 10),
            Err(RecoveryError::invalid_digit("+", 10, 1, None))
        );
    }

    #[test]
    fn test_decode_rejects_bad_radix() {
        for radix in [0, 1, 37, 256] {
            assert_eq!(
                decode("1", radix),
                Err(RecoveryError::invalid_radix(radix))
            );
        }
        // radix is checked before the digits
        assert_eq!(decode("", 1), Err(RecoveryError::invalid_radix(1)));
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!(parse_radix("2").unwrap(), 2);
        assert_eq!(parse_radix("36").unwrap(), 36);
        assert_eq!(parse_radix("ten"), Err(RecoveryError::invalid_radix("ten")));
        assert_eq!(parse_radix("1"), Err(RecoveryError::invalid_radix(1)));
        assert_eq!(parse_radix("-16"), Err(RecoveryError::invalid_radix("-16")));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&BigInt::from(255), 16).unwrap(), "ff");
        assert_eq!(encode(&BigInt::from(-10), 2).unwrap(), "-1010");
        assert_eq!(
            encode(&BigInt::from(1), 40),
            Err(RecoveryError::invalid_radix(40))
        );
    }

    fn arb_bigint() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), prop::collection::vec(any::<u32>(), 1..40)).prop_map(|(neg, limbs)| {
            let sign = if neg { Sign::Minus } else { Sign::Plus };
            BigInt::from_biguint(sign, BigUint::new(limbs))
        })
    }

    proptest! {
        #[test]
        fn roundtrip_small(value in any::<i64>(), radix in MIN_RADIX..=MAX_RADIX) {
            let value = BigInt::from(value);
            let digits = encode(&value, radix).unwrap();
            prop_assert_eq!(decode(&digits, radix).unwrap(), value);
        }

        #[test]
        fn roundtrip_large(value in arb_bigint(), radix in MIN_RADIX..=MAX_RADIX) {
            let digits = encode(&value, radix).unwrap();
            prop_assert_eq!(decode(&digits.to_uppercase(), radix).unwrap(), value);
        }
    }
}
