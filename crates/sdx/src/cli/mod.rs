//! CLI support for the `sdx` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod exit_codes;
pub mod input;
pub mod output;

pub use context::CommandContext;
