//! Implementation of `sdx fmt`.

use std::{fs, process::ExitCode};

use sdx_parse::{WriteOptions, write_json, write_source};

use crate::cli::{args::FmtCommand, context::CommandContext, input::into_data};

/// Rewrites a manifest in canonical form.
///
/// Script output keeps the input's binding unless `--binding` is given; bare
/// JSON input falls back to `[input].binding`.
pub fn run(ctx: &CommandContext, cmd: &FmtCommand) -> ExitCode {
    let (origin, source) = match ctx.load_source(&cmd.input) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let binding = binding(ctx, cmd, source.binding.as_deref());
    let data = match into_data(&origin, source) {
        Ok(data) => data,
        Err(code) => return code,
    };

    let text = if cmd.json {
        write_json(&data, cmd.pretty || ctx.config.output.pretty_json)
    } else {
        write_source(&data, &WriteOptions { binding })
    };

    match &cmd.output {
        Some(path) => {
            let path = ctx.cwd.join(path);
            if let Err(e) = fs::write(&path, &text) {
                eprintln!("error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            eprintln!("Wrote {} records to {}", data.len(), path.display());
        }
        None => println!("{text}"),
    }
    ExitCode::SUCCESS
}

/// Picks the binding for script output.
fn binding(ctx: &CommandContext, cmd: &FmtCommand, source: Option<&str>) -> String {
    cmd.binding
        .as_deref()
        .or(source)
        .unwrap_or(&ctx.config.input.binding)
        .to_string()
}
