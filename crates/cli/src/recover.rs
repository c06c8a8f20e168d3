// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::format_points;
use crate::input::{check_declared_count, SharesDocument};
use anyhow::{Context, Result};
use num_bigint::BigInt;
use num_traits::Zero;
use sss_config::RecoveryConfig;
use sss_recovery::Recovered;
use tracing::info;

pub fn run(config: &RecoveryConfig) -> Result<Recovered> {
    let set = SharesDocument::read(config.input())?.into_share_set()?;
    check_declared_count(&set, config.strict_count())?;

    let target_x = BigInt::from(config.target_x());
    let recovered = sss_recovery::recover(&set, config.selection(), &target_x)
        .context("Could not reconstruct the secret")?;

    info!("Using shares: {}", format_points(&recovered.used));
    Ok(recovered)
}

pub fn render(recovered: &Recovered) -> String {
    if recovered.target_x.is_zero() {
        format!("The secret is: {}", recovered.value)
    } else {
        format!("P({}) = {}", recovered.target_x, recovered.value)
    }
}

pub fn execute(config: &RecoveryConfig) -> Result<()> {
    let recovered = run(config)?;
    println!("{}", render(&recovered));
    Ok(())
}
