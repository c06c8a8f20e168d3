// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Deterministic choice of the `k` shares used for interpolation.
//!
//! The subset never depends on the order the shares were supplied in: they
//! are sorted by abscissa first and then truncated to `k`.

use crate::errors::{RecoveryError, RecoveryResult};
use crate::share::Share;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which `k` shares participate in a reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionPolicy {
    /// The `k` shares with the smallest `x`, ascending
    #[default]
    LowestX,
    /// The `k` shares with the largest `x`, descending
    HighestX,
}

impl SelectionPolicy {
    pub const ALL: [SelectionPolicy; 2] = [SelectionPolicy::LowestX, SelectionPolicy::HighestX];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::LowestX => "lowest_x",
            SelectionPolicy::HighestX => "highest_x",
        }
    }

    /// Returns exactly `k` shares, in the order they will be interpolated.
    ///
    /// # Errors
    ///
    /// - [`RecoveryError::InvalidThreshold`] if `k == 0`.
    /// - [`RecoveryError::InsufficientShares`] if fewer than `k` shares are given.
    pub fn select(&self, shares: &[Share], k: usize) -> RecoveryResult<Vec<Share>> {
        if k == 0 {
            return Err(RecoveryError::InvalidThreshold { k });
        }
        if shares.len() < k {
            return Err(RecoveryError::insufficient_shares(k, shares.len()));
        }

        let mut ordered: Vec<&Share> = shares.iter().collect();
        match self {
            SelectionPolicy::LowestX => ordered.sort_by(|a, b| a.x().cmp(b.x())),
            SelectionPolicy::HighestX => ordered.sort_by(|a, b| b.x().cmp(a.x())),
        }

        Ok(ordered.into_iter().take(k).cloned().collect())
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| {
                format!("unknown selection policy '{s}' (expected lowest_x or highest_x)")
            })
    }
}

/// Selects `k` shares by ascending `x`.
pub fn select(shares: &[Share], k: usize) -> RecoveryResult<Vec<Share>> {
    SelectionPolicy::LowestX.select(shares, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn shares(xs: &[i64]) -> Vec<Share> {
        xs.iter().map(|&x| Share::from_value(x, x * 10)).collect()
    }

    fn xs(selected: &[Share]) -> Vec<BigInt> {
        selected.iter().map(|s| s.x().clone()).collect()
    }

    fn big(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_select_lowest_x() {
        let selected = select(&shares(&[6, 2, 9, 1, 3]), 3).unwrap();
        assert_eq!(xs(&selected), big(&[1, 2, 3]));
    }

    #[test]
    fn test_select_highest_x() {
        let selected = SelectionPolicy::HighestX
            .select(&shares(&[6, 2, 9, 1, 3]), 2)
            .unwrap();
        assert_eq!(xs(&selected), big(&[9, 6]));
    }

    #[test]
    fn test_select_ignores_input_order() {
        let a = select(&shares(&[4, 8, 15, 16, 23, 42]), 4).unwrap();
        let b = select(&shares(&[42, 23, 16, 15, 8, 4]), 4).unwrap();
        let c = select(&shares(&[16, 4, 42, 8, 23, 15]), 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_select_all_when_k_equals_len() {
        let selected = select(&shares(&[3, -1, 2]), 3).unwrap();
        assert_eq!(xs(&selected), big(&[-1, 2, 3]));
    }

    #[test]
    fn test_select_insufficient() {
        assert_eq!(
            select(&shares(&[1, 2, 3]), 4),
            Err(RecoveryError::insufficient_shares(4, 3))
        );
        assert_eq!(
            select(&[], 1),
            Err(RecoveryError::insufficient_shares(1, 0))
        );
    }

    #[test]
    fn test_select_zero_threshold() {
        assert_eq!(
            select(&shares(&[1]), 0),
            Err(RecoveryError::InvalidThreshold { k: 0 })
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("lowest_x".parse::<SelectionPolicy>(), Ok(SelectionPolicy::LowestX));
        assert_eq!("highest_x".parse::<SelectionPolicy>(), Ok(SelectionPolicy::HighestX));
        assert!("random".parse::<SelectionPolicy>().is_err());
        assert_eq!(SelectionPolicy::default().to_string(), "lowest_x");
    }
}
