//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for facetr using the `clap` crate.
//!
//! # Commands
//!
//! - **run**: Drive a headless search panel from a command script (default input: stdin)
//! - **check**: Validate a filter catalog and print a summary
//! - **config**: Show, locate or initialise the panel configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use facetr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["facetr", "run", "--catalog", "catalog.json", "--json"]);
//! assert!(matches!(cli.command, Commands::Run { json: true, .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the configuration file
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "facetr")]
#[command(about = "Headless faceted search panel", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a command script against a search panel
    #[command(visible_alias = "r")]
    Run {
        /// Command script (reads stdin when omitted)
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,

        /// Filter catalog (JSON or TOML)
        #[arg(short = 'c', long = "catalog", value_name = "PATH")]
        catalog: PathBuf,

        /// Panel snapshot to restore before and save after the run (JSON)
        #[arg(short = 's', long = "state", value_name = "PATH")]
        state: Option<PathBuf>,

        /// Emit one JSON object per command instead of text
        #[arg(long = "json")]
        json: bool,

        /// Stop at the first rejected command
        #[arg(long = "strict")]
        strict: bool,
    },

    /// Validate a filter catalog
    Check {
        /// Filter catalog (JSON or TOML)
        #[arg(value_name = "PATH")]
        catalog: PathBuf,

        /// Print the parsed catalog as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log directive for the verbosity flags
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
