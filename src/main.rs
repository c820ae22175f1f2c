//! Facetr CLI application entry point
//!
//! Drives a headless faceted search panel from the command line. Useful for
//! checking catalogs and configuration, and for replaying user interaction
//! scripts against the panel state machine.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog
//! facetr check catalog.json
//!
//! # Replay a script, printing the events each command emits
//! facetr run --catalog catalog.json session.txt
//!
//! # Keep the committed query and filters between runs, JSON output
//! echo "query shoes" | facetr run -c catalog.toml --state panel.json --json
//!
//! # Write a default configuration file
//! facetr config init
//! ```
//!
//! # Logging
//!
//! Warnings are logged to stderr by default. `-v` enables debug logs and
//! `-vv` trace logs; a set `RUST_LOG` replaces both.
//!
//! # Configuration
//!
//! Labels and paging are read from the user's config directory
//! (`~/.config/facetr/config.toml` on Linux) or from `--config <PATH>`.

use facetr::{
    cli::{Cli, Commands},
    commands::{self, run::RunArgs},
    config::PanelConfig,
    FacetError,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FacetError>;

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<PanelConfig> {
    match &cli.config {
        Some(path) => PanelConfig::load_from(path),
        None => PanelConfig::load(),
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            script,
            catalog,
            state,
            json,
            strict,
        } => {
            let args = RunArgs {
                script: script.clone(),
                catalog: catalog.clone(),
                state: state.clone(),
                json: *json,
                strict: *strict,
            };
            commands::run(load_config(cli)?, &args, cli.quiet)
        }
        Commands::Check { catalog, json } => commands::check(catalog, *json, cli.quiet),
        Commands::Config { command } => {
            commands::config(command, cli.config.as_deref(), cli.quiet)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
