// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a YAML file, substituting `$VAR` and `${VAR}` from the environment.
pub fn load_yaml_with_env(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Could not read configuration file {}", path.display()))?;
    expand_env(&raw)
}

pub fn expand_env(raw: &str) -> Result<String> {
    let expanded = shellexpand::env(raw).context("Could not expand environment variables")?;
    Ok(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_expand_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SHARES_DIR", "/data/shares");
            let out = expand_env("input: \"${SHARES_DIR}/roots.json\"").map_err(|e| e.to_string())?;
            assert_eq!(out, "input: \"/data/shares/roots.json\"");
            Ok(())
        });
    }

    #[test]
    fn test_tilde_is_left_alone() {
        Jail::expect_with(|jail| {
            jail.set_env("HOME", "/home/someone");
            let out = expand_env("input: ~/roots.json").map_err(|e| e.to_string())?;
            assert_eq!(out, "input: ~/roots.json");
            Ok(())
        });
    }

    #[test]
    fn test_expand_env_missing_var() {
        Jail::expect_with(|_| {
            assert!(expand_env("input: $SSS_DEFINITELY_UNSET_VAR").is_err());
            Ok(())
        });
    }
}
