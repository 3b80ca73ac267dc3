//! Implementation of `sdx config`.

use std::process::ExitCode;

use sdx_config::is_global_config;
use sdx_highlight::{Highlighter, rule};

use crate::cli::{
    context::CommandContext,
    output::{dim, display_path, subheader, warning},
};

/// Shows the merged files and the config root, then the effective settings
/// and any warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = &ctx.config_files;
    if files.is_empty() {
        println!("{}", dim("No configuration files found."));
    } else {
        println!("{}", subheader("Configuration files:"));
        for file in files {
            let label = if is_global_config(file) {
                format!(" {}", dim("(global)"))
            } else {
                String::new()
            };
            println!("  {}{label}", display_path(file, &ctx.cwd));
        }
    }
    if let Some(root) = &ctx.config.config_root {
        println!("{} {}", subheader("Config root:"), root.display());
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&ctx.config.settings_to_toml()));
    println!("{}", rule(40));

    for w in ctx.config.validate() {
        println!("{}", warning(&format!("warning: {w}")));
    }
    ExitCode::SUCCESS
}
