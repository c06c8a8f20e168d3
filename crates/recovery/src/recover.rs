// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The full pipeline: select `k` shares, then interpolate.

use crate::errors::RecoveryResult;
use crate::lagrange::reconstruct;
use crate::selection::SelectionPolicy;
use crate::share::{Point, Share, ShareSet};
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, instrument};

/// Outcome of one reconstruction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovered {
    /// The shares that took part, in interpolation order
    pub used: Vec<Share>,
    /// Where the polynomial was evaluated
    pub target_x: BigInt,
    /// The polynomial's value at `target_x`
    pub value: BigInt,
}

/// Runs selection and interpolation, keeping the subset that was used.
#[instrument(skip_all, fields(k = set.k(), available = set.len(), policy = %policy))]
pub fn recover(
    set: &ShareSet,
    policy: SelectionPolicy,
    target_x: &BigInt,
) -> RecoveryResult<Recovered> {
    let used = set.select(policy)?;
    debug!(
        xs = ?used.iter().map(|s| s.x().to_string()).collect::<Vec<_>>(),
        "selected shares"
    );

    let points: Vec<Point> = used.iter().map(Share::point).collect();
    let value = reconstruct(&points, target_x)?;

    Ok(Recovered {
        used,
        target_x: target_x.clone(),
        value,
    })
}

/// The value of the shared polynomial at `target_x`.
pub fn recover_at(
    set: &ShareSet,
    policy: SelectionPolicy,
    target_x: &BigInt,
) -> RecoveryResult<BigInt> {
    recover(set, policy, target_x).map(|recovered| recovered.value)
}

/// The secret: the shared polynomial's value at `x = 0`.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use sss_recovery::{recover_secret, SelectionPolicy, Share, ShareSet};
///
/// let shares = vec![
///     Share::decode(1, "10", 10).unwrap(),
///     Share::decode(2, "1101", 2).unwrap(),
/// ];
/// let set = ShareSet::new(2, 2, shares).unwrap();
/// assert_eq!(recover_secret(&set, SelectionPolicy::LowestX).unwrap(), BigInt::from(7));
/// ```
pub fn recover_secret(set: &ShareSet, policy: SelectionPolicy) -> RecoveryResult<BigInt> {
    recover_at(set, policy, &BigInt::zero())
}
