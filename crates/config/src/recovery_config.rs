// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::yaml::load_yaml_with_env;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sss_recovery::SelectionPolicy;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "sss.config.yaml";
pub const DEFAULT_INPUT: &str = "roots.json";
pub const ENV_PREFIX: &str = "SSS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// The shares document to read
    input: PathBuf,
    /// Where to evaluate the recovered polynomial. The secret lives at 0.
    target_x: i64,
    /// Which `k` shares to interpolate when more are available
    selection: SelectionPolicy,
    /// Treat a declared `n` that differs from the share count as an error
    strict_count: bool,
    /// The configuration file that was loaded, if any
    config_file: Option<PathBuf>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            target_x: 0,
            selection: SelectionPolicy::default(),
            strict_count: false,
            config_file: None,
        }
    }
}

impl RecoveryConfig {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn target_x(&self) -> i64 {
        self.target_x
    }

    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    pub fn strict_count(&self) -> bool {
        self.strict_count
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}

/// Values passed on the command line. Unset fields leave lower layers alone.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_count: Option<bool>,
}

#[derive(Serialize)]
struct FoundConfigFile {
    config_file: Option<PathBuf>,
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sss-recover"))
    }
}

/// Load the configuration.
///
/// Layers, lowest first: built-in defaults, the YAML file, `SSS_*`
/// environment variables, then `overrides`. The YAML file is `cli_file` if
/// given (and must exist), else the nearest `sss.config.yaml` above the
/// working directory, else the one in the user's config directory.
pub fn load_config(cli_file: Option<&Path>, overrides: ConfigOverrides) -> Result<RecoveryConfig> {
    let cwd = env::current_dir()?;
    let default_dir = OsDirs::config_dir();

    let resolved = resolve_config_path(
        find_in_parent,
        &cwd,
        default_dir.as_deref(),
        DEFAULT_CONFIG_NAME,
        cli_file,
    );

    let mut figment = Figment::from(Serialized::defaults(RecoveryConfig::default()));

    let config_file = match resolved {
        Some(path) if path.is_file() => {
            let loaded_yaml = load_yaml_with_env(&path)?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
            Some(path)
        }
        Some(path) if cli_file.is_some() => {
            bail!("Configuration file not found: {}", path.display())
        }
        _ => None,
    };

    debug!(config_file = ?config_file, "resolved configuration file");

    let config: RecoveryConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .merge(Serialized::defaults(FoundConfigFile { config_file }))
        .extract()
        .context("Could not parse configuration")?;

    Ok(config)
}
