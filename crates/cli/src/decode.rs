// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use sss_recovery::{decode, parse_radix};

pub fn execute(value: &str, base: &str) -> Result<()> {
    let radix = parse_radix(base)?;
    let decoded =
        decode(value, radix).with_context(|| format!("Could not decode '{value}'"))?;
    println!("{decoded}");
    Ok(())
}
