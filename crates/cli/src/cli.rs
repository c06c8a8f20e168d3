// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::{decode, inspect, recover};
use anyhow::Result;
use clap::{command, ArgAction, Parser, Subcommand};
use sss_config::{load_config, ConfigOverrides, RecoveryConfig};
use sss_recovery::SelectionPolicy;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "sss-recover", version)]
#[command(about = "Recover a threshold-shared secret from a document of radix-encoded shares", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Shares document to read (default: roots.json)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Which shares to use when more than k are available: lowest_x or highest_x
    #[arg(long, global = true)]
    selection: Option<SelectionPolicy>,

    /// Evaluate the recovered polynomial at this x instead of 0
    #[arg(long, allow_negative_numbers = true, global = true)]
    at: Option<i64>,

    /// Fail if the declared share count n differs from the shares present
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    strict_count: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sss-recover -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        if let Some(Commands::Decode { value, base }) = &self.command {
            return decode::execute(value, base);
        }

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            None | Some(Commands::Recover) => recover::execute(&config)?,
            Some(Commands::Inspect) => inspect::execute(&config)?,
            Some(Commands::Decode { .. }) => {}
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<RecoveryConfig> {
        let overrides = ConfigOverrides {
            input: self.input.clone(),
            target_x: self.at,
            selection: self.selection,
            strict_count: self.strict_count.then_some(true),
        };
        load_config(self.config.as_deref(), overrides)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct the secret (the default command)
    Recover,

    /// Decode and list the shares, marking the ones that would be used
    Inspect,

    /// Decode a single value
    Decode {
        /// Digits of the value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Base the digits are written in, 2 to 36
        #[arg(short, long)]
        base: String,
    },
}
