// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sss_recovery::Share;

pub mod telemetry;

/// `(x, y)` pairs of `shares`, comma separated.
pub fn format_points(shares: &[Share]) -> String {
    shares
        .iter()
        .map(|share| share.point().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
