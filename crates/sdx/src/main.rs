//! Command-line interface for `sdx`, a toolkit for documentation search-data manifests.

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{CommandContext, args::Cli, commands, exit_codes};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SDX_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = exit_codes::for_usage(&e);
            return match e.print() {
                Ok(()) => code,
                Err(_) => exit_codes::FAILURE,
            };
        }
    };

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
