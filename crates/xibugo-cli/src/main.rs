//! Xibugo CLI
//!
//! Command-line client for the Xibugo webhook delivery service.
//!
//! # Configuration
//!
//! Every command reads its settings from, highest priority first:
//! command-line flags, `XIBUGO_*` environment variables and the profile's
//! configuration file (`$XDG_CONFIG_HOME/xibugo/<profile>.yaml` or
//! `/etc/xibugo/<profile>.yaml`). Run `xibugo config init` to create one.
//!
//! Set `RUST_LOG=debug` to see where each value came from.

mod args;
mod commands;
mod console;
mod prompter;
mod router;

use crate::console::CliConsole;
use args::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match router::route(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CliConsole::new(false).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
