// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact rational numbers over `BigInt`.
//!
//! Every `Fraction` is kept in canonical form: the denominator is positive,
//! numerator and denominator are coprime, and zero is `0/1`. Two equal
//! rationals therefore always have identical representations, whatever
//! order they were accumulated in.

use crate::errors::{RecoveryError, RecoveryResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Builds `numer / denom` in lowest terms. `None` if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        Some(Self::reduced(numer, denom))
    }

    pub fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    // denom must be non-zero
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        let (mut numer, mut denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        let divisor = numer.gcd(&denom);
        if !divisor.is_one() {
            numer /= &divisor;
            denom /= &divisor;
        }

        Self { numer, denom }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The single final division.
    ///
    /// # Errors
    ///
    /// [`RecoveryError::NonIntegralResult`] if the value is not a whole number.
    pub fn into_integer(self) -> RecoveryResult<BigInt> {
        if !self.is_integer() {
            return Err(RecoveryError::NonIntegralResult {
                numerator: self.numer,
                denominator: self.denom,
            });
        }
        Ok(self.numer)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let common = self.denom.lcm(&rhs.denom);
        let numer = &self.numer * (&common / &self.denom) + &rhs.numer * (&common / &rhs.denom);
        Fraction::reduced(numer, common)
    }
}

impl AddAssign<&Fraction> for Fraction {
    fn add_assign(&mut self, rhs: &Fraction) {
        *self = &*self + rhs;
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        // Cross-cancel first so the products stay small.
        let left = self.numer.gcd(&rhs.denom);
        let right = rhs.numer.gcd(&self.denom);

        let numer = (&self.numer / &left) * (&rhs.numer / &right);
        let denom = (&self.denom / &right) * (&rhs.denom / &left);
        Fraction::reduced(numer, denom)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
