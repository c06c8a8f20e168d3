// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Threshold secret recovery with exact integer arithmetic.
//!
//! This crate reconstructs the constant term of an integer polynomial of
//! degree `k-1` from `k` of its evaluations ("shares"), the reconstruction
//! half of a Shamir-style threshold scheme over the integers.
//!
//! ## Pipeline
//!
//! 1. **Decode**: each share's value is a digit string in some radix in
//!    `[2, 36]` ([`decode`]).
//! 2. **Select**: exactly `k` shares are chosen by a deterministic policy,
//!    ascending `x` by default ([`SelectionPolicy`]).
//! 3. **Reconstruct**: Lagrange interpolation at `x = 0` ([`reconstruct`]),
//!    accumulated as an exact fraction and divided once.
//!
//! [`recover_secret`] runs all three on a [`ShareSet`].
//!
//! ## Exactness
//!
//! Per-term integer division can return a wrong integer whenever a single
//! term `y_i · L_i(0)` is not integral even though the sum is. Here every
//! term is a reduced [`Fraction`] and a sum that is not an integer is an
//! error ([`RecoveryError::NonIntegralResult`]), never a truncated value.
//!
//! Everything in this crate is a pure function of its inputs and safe to
//! call from several threads at once.

pub mod errors;
pub mod fraction;
pub mod lagrange;
pub mod radix;
pub mod recover;
pub mod selection;
pub mod share;

pub use errors::{RecoveryError, RecoveryResult};
pub use fraction::Fraction;
pub use lagrange::{interpolate_at_zero, lagrange_basis, reconstruct};
pub use radix::{decode, encode, parse_radix, MAX_RADIX, MIN_RADIX};
pub use recover::{recover, recover_at, recover_secret, Recovered};
pub use selection::{select, SelectionPolicy};
pub use share::{Point, Share, ShareSet};
