// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact Lagrange interpolation over the integers.
//!
//! For points `(x_0, y_0), ..., (x_{k-1}, y_{k-1})` with distinct abscissae the
//! interpolating polynomial evaluated at `t` is
//!
//! ```text
//! P(t) = Σ_i y_i · L_i(t),    L_i(t) = Π_{j≠i} (t − x_j) / (x_i − x_j)
//! ```
//!
//! The individual terms `y_i · L_i(t)` are rationals and are generally not
//! integers even when `P(t)` is. Each term is therefore kept as a reduced
//! [`Fraction`] and the sum is divided exactly once, at the end. A sum that
//! does not reduce to an integer is reported as
//! [`RecoveryError::NonIntegralResult`] rather than truncated.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::fraction::Fraction;
use crate::share::Point;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::collections::HashSet;
use tracing::{debug, trace};

fn ensure_distinct(points: &[Point]) -> RecoveryResult<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(&point.x) {
            return Err(RecoveryError::degenerate(&point.x));
        }
    }
    Ok(())
}

/// The Lagrange basis weight `L_i(target_x)` of `points[i]`.
///
/// # Errors
///
/// - [`RecoveryError::InsufficientShares`] if `i` is not an index of `points`.
/// - [`RecoveryError::DegenerateInput`] if another point has the same `x` as `points[i]`.
pub fn lagrange_basis(points: &[Point], i: usize, target_x: &BigInt) -> RecoveryResult<Fraction> {
    let x_i = &points
        .get(i)
        .ok_or_else(|| {
            RecoveryError::insufficient_shares(i.saturating_add(1), points.len())
        })?
        .x;

    let mut numer = BigInt::one();
    let mut denom = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let gap = x_i - &point.x;
        if gap.is_zero() {
            return Err(RecoveryError::degenerate(x_i));
        }
        numer *= target_x - &point.x;
        denom *= gap;
    }

    Fraction::new(numer, denom).ok_or_else(|| RecoveryError::degenerate(x_i))
}

/// Evaluates the polynomial through `points` at `target_x`.
///
/// The result does not depend on the order of `points`. A single point is a
/// constant polynomial, so its `y` is returned for every `target_x`.
///
/// # Errors
///
/// - [`RecoveryError::InsufficientShares`] if `points` is empty.
/// - [`RecoveryError::DegenerateInput`] if two points have the same `x`.
/// - [`RecoveryError::NonIntegralResult`] if the exact value is not an integer.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use sss_recovery::{reconstruct, Point};
///
/// // P(x) = 3x + 7
/// let points = [Point::new(1, 10), Point::new(2, 13)];
/// assert_eq!(reconstruct(&points, &BigInt::from(0)).unwrap(), BigInt::from(7));
/// ```
pub fn reconstruct(points: &[Point], target_x: &BigInt) -> RecoveryResult<BigInt> {
    if points.is_empty() {
        return Err(RecoveryError::insufficient_shares(1, 0));
    }
    ensure_distinct(points)?;

    let mut sum = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let basis = lagrange_basis(points, i, target_x)?;
        let term = &basis * &Fraction::from_integer(point.y.clone());
        trace!(x = %point.x, basis = %basis, term = %term, "lagrange term");
        sum += &term;
    }

    debug!(target_x = %target_x, value = %sum, k = points.len(), "interpolated");
    sum.into_integer()
}

/// [`reconstruct`] at `x = 0`, i.e. the constant term.
pub fn interpolate_at_zero(points: &[Point]) -> RecoveryResult<BigInt> {
    reconstruct(points, &BigInt::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn at(x: i64) -> BigInt {
        BigInt::from(x)
    }

    #[test]
    fn test_line() {
        // P(x) = 3x + 7
        let pts = points(&[(1, 10), (2, 13)]);
        assert_eq!(interpolate_at_zero(&pts), Ok(at(7)));
        assert_eq!(reconstruct(&pts, &at(10)), Ok(at(37)));
    }

    #[test]
    fn test_quadratic_with_non_integral_terms() {
        // P(x) = x^2 + 1 sampled at 1, 2, 4. The terms at x = 0 are
        // 16/3, -10 and 17/3; truncating each one would give 0 instead of 1.
        let pts = points(&[(1, 2), (2, 5), (4, 17)]);
        assert_eq!(lagrange_basis(&pts, 0, &at(0)).unwrap().to_string(), "8/3");
        assert_eq!(lagrange_basis(&pts, 2, &at(0)).unwrap().to_string(), "1/3");
        assert_eq!(interpolate_at_zero(&pts), Ok(at(1)));
    }

    #[test]
    fn test_single_point_is_constant() {
        let pts = points(&[(9, -4)]);
        assert_eq!(interpolate_at_zero(&pts), Ok(at(-4)));
        assert_eq!(reconstruct(&pts, &at(12345)), Ok(at(-4)));
        assert_eq!(lagrange_basis(&pts, 0, &at(3)), Ok(Fraction::from_integer(at(1))));
    }

    #[test]
    fn test_target_at_a_sample_returns_its_value() {
        let pts = points(&[(1, 6), (2, 11), (3, 18)]);
        assert_eq!(reconstruct(&pts, &at(2)), Ok(at(11)));
    }

    #[test]
    fn test_non_integral_result() {
        let pts = points(&[(1, 7), (5, 10)]);
        assert_eq!(
            interpolate_at_zero(&pts),
            Err(RecoveryError::NonIntegralResult {
                numerator: at(25),
                denominator: at(4),
            })
        );
    }

    #[test]
    fn test_duplicate_x() {
        let pts = points(&[(1, 7), (2, 9), (1, 8)]);
        assert_eq!(
            interpolate_at_zero(&pts),
            Err(RecoveryError::degenerate(&at(1)))
        );
        assert_eq!(
            lagrange_basis(&pts, 0, &at(0)),
            Err(RecoveryError::degenerate(&at(1)))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            interpolate_at_zero(&[]),
            Err(RecoveryError::insufficient_shares(1, 0))
        );
    }

    #[test]
    fn test_basis_index_out_of_range() {
        let pts = points(&[(1, 7)]);
        assert_eq!(
            lagrange_basis(&pts, 3, &at(0)),
            Err(RecoveryError::insufficient_shares(4, 1))
        );
        assert_eq!(
            lagrange_basis(&pts, usize::MAX, &at(0)),
            Err(RecoveryError::insufficient_shares(usize::MAX, 1))
        );
    }

    #[test]
    fn test_basis_weights_sum_to_one() {
        let pts = points(&[(-2, 0), (1, 0), (7, 0), (11, 0)]);
        let mut total = Fraction::zero();
        for i in 0..pts.len() {
            total += &lagrange_basis(&pts, i, &at(5)).unwrap();
        }
        assert_eq!(total, Fraction::from_integer(at(1)));
    }
}
