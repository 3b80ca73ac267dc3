//! Command implementations and dispatch.

pub mod check;
pub mod compare;
pub mod config;
pub mod fmt;
pub mod init;
pub mod ls;
pub mod scopes;
pub mod stats;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Check(cmd) => check::run(ctx, &cmd),
        Commands::Stats(cmd) => stats::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Scopes(cmd) => scopes::run(ctx, &cmd),
        Commands::Compare(cmd) => compare::run(ctx, &cmd),
        Commands::Fmt(cmd) => fmt::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
