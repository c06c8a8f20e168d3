// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Shares and share sets.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::radix::{decode, encode};
use crate::selection::SelectionPolicy;
use num_bigint::BigInt;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;

/// A single evaluation `(x, y)` of the secret-bearing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A share as supplied: its abscissa plus a value written in some radix.
///
/// The value is decoded once, when the share is built, and never changes.
/// The only ways in are [`Share::decode`] and [`Share::from_value`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    x: BigInt,
    digits: String,
    radix: u32,
    y: BigInt,
}

impl Share {
    /// Decodes `digits` in base `radix` and builds the share.
    pub fn decode(x: impl Into<BigInt>, digits: &str, radix: u32) -> RecoveryResult<Self> {
        let y = decode(digits, radix)?;
        Ok(Self {
            x: x.into(),
            digits: digits.to_owned(),
            radix,
            y,
        })
    }

    /// Builds a share from an already decoded value.
    pub fn from_value(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        let y = y.into();
        Self {
            x: x.into(),
            digits: y.to_str_radix(10),
            radix: 10,
            y,
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn point(&self) -> Point {
        Point {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }

    /// The value re-encoded in `radix`.
    pub fn encode_value(&self, radix: u32) -> RecoveryResult<String> {
        encode(&self.y, radix)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} value=\"{}\" (base {}) y={}",
            self.x, self.digits, self.radix, self.y
        )
    }
}

/// The shares available for one reconstruction run.
///
/// Shares are kept ordered by ascending `x`. A `ShareSet` can only be built
/// with a threshold of at least one, at least `k` shares and pairwise
/// distinct abscissae.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    n: u64,
    k: usize,
    shares: BTreeMap<BigInt, Share>,
}

impl ShareSet {
    /// # Errors
    ///
    /// - [`RecoveryError::InvalidThreshold`] if `k == 0`.
    /// - [`RecoveryError::DegenerateInput`] if two shares have the same `x`.
    /// - [`RecoveryError::InsufficientShares`] if fewer than `k` shares are given.
    pub fn new(n: u64, k: usize, shares: impl IntoIterator<Item = Share>) -> RecoveryResult<Self> {
        if k == 0 {
            return Err(RecoveryError::InvalidThreshold { k });
        }

        let mut by_x = BTreeMap::new();
        for share in shares {
            match by_x.entry(share.x.clone()) {
                Entry::Occupied(entry) => return Err(RecoveryError::degenerate(entry.key())),
                Entry::Vacant(entry) => {
                    entry.insert(share);
                }
            }
        }

        if by_x.len() < k {
            return Err(RecoveryError::insufficient_shares(k, by_x.len()));
        }

        Ok(Self {
            n,
            k,
            shares: by_x,
        })
    }

    /// Declared share count. Advisory only.
    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Whether the declared `n` matches the number of shares present.
    pub fn count_matches_declared(&self) -> bool {
        u64::try_from(self.shares.len()).is_ok_and(|len| len == self.n)
    }

    /// Shares in ascending `x` order.
    pub fn shares(&self) -> impl Iterator<Item = &Share> {
        self.shares.values()
    }

    pub fn get(&self, x: &BigInt) -> Option<&Share> {
        self.shares.get(x)
    }

    /// Picks exactly `k` shares under `policy`.
    pub fn select(&self, policy: SelectionPolicy) -> RecoveryResult<Vec<Share>> {
        let shares: Vec<Share> = self.shares.values().cloned().collect();
        policy.select(&shares, self.k)
    }
}
