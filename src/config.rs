//! Command-line surface and resolved runtime configuration.

use crate::constants::{DEFAULT_LOG_FILTER, ENV_DATA_DIR, ENV_LOG_FILTER, ENV_PRESERVE};
use crate::loadout::PreservationMode;
use crate::store::default_data_dir;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

/// Vehicle loadout inspection checklist
#[derive(Debug, Parser)]
#[command(name = "loadout", disable_version_flag = true)]
pub struct Cli {
    /// Directory holding saved state and the log file
    #[arg(long, env = ENV_DATA_DIR, global = true)]
    pub data_dir: Option<PathBuf>,

    /// How checked marks follow items when kits change the lists
    #[arg(long, value_enum, env = ENV_PRESERVE, global = true)]
    pub preserve: Option<PreservationMode>,

    /// Show version information
    #[arg(short = 'V', long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the checklist and exit
    Status,
    /// Check one item
    Check { zone: String, index: usize },
    /// Uncheck one item
    Uncheck { zone: String, index: usize },
    /// Turn an auxiliary kit on or off
    Kit { kit: String },
    /// Clear every mark and kit
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub preserve: PreservationMode,
    pub log_filter: String,
}

impl Config {
    /// Flags win over environment, environment over built-in defaults.
    pub fn resolve(cli: &Cli) -> io::Result<Self> {
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        let log_filter = std::env::var(ENV_LOG_FILTER)
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            data_dir,
            preserve: cli.preserve.unwrap_or_default(),
            log_filter,
        })
    }
}
