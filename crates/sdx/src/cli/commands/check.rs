//! Implementation of `sdx check`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use sdx_check::{CheckOptions, Diagnostic, Report, Rule, Severity, check_entries};
use serde::Serialize;

use crate::cli::{
    args::CheckCommand,
    context::CommandContext,
    input::Origin,
    output::{count, dim, error, print_json, success, warning},
};

/// JSON shape of a check run.
#[derive(Serialize)]
struct JsonCheckOutput<'a> {
    /// Manifest that was checked.
    source: String,
    /// Number of array entries.
    entries: usize,
    /// Number of entries typed as records.
    records: usize,
    /// Error count.
    errors: usize,
    /// Warning count.
    warnings: usize,
    /// Every diagnostic in entry order.
    diagnostics: &'a [Diagnostic],
}

/// Validates a manifest and reports rule violations.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    if cmd.rules {
        print_rules();
        return ExitCode::SUCCESS;
    }

    let (origin, source) = match ctx.load_source(&cmd.input) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let options = options(ctx, cmd);
    let report = check_entries(&source.entries, &options);

    if cmd.json {
        let output = JsonCheckOutput {
            source: origin.to_string(),
            entries: source.entries.len(),
            records: report.data.len(),
            errors: report.error_count(),
            warnings: report.warning_count(),
            diagnostics: &report.diagnostics,
        };
        let code = print_json(&output, ctx.config.output.pretty_json);
        return if report.has_errors() {
            ExitCode::FAILURE
        } else {
            code
        };
    }

    print_report(&origin, source.entries.len(), &report);

    if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Combines configured options with command-line overrides.
fn options(ctx: &CommandContext, cmd: &CheckCommand) -> CheckOptions {
    let mut options = ctx.config.check_options();
    options.disabled.extend(cmd.disable.iter().copied());
    options.warnings_as_errors |= cmd.strict;
    options
}

/// Prints diagnostics and a summary line.
fn print_report(origin: &Origin, entries: usize, report: &Report) {
    for diagnostic in &report.diagnostics {
        let label = format!("{}[{}]", diagnostic.severity, diagnostic.rule);
        let label = match diagnostic.severity {
            Severity::Error => error(&label),
            Severity::Warning => warning(&label),
        };
        let context = match (&diagnostic.name, &diagnostic.link) {
            (Some(name), Some(link)) => format!(" {name} {}", dim(&format!("@ {link}"))),
            (None, Some(link)) => format!(" {}", dim(link)),
            (Some(name), None) => format!(" {name}"),
            (None, None) => String::new(),
        };
        println!(
            "{label} {}{context}: {}",
            dim(&format!("record {}", diagnostic.index)),
            diagnostic.message
        );
    }

    let summary = format!(
        "{origin}: {}, {}, {}",
        count(entries, "entry", "entries"),
        count(report.error_count(), "error", "errors"),
        count(report.warning_count(), "warning", "warnings")
    );
    if report.is_clean() {
        println!("{}", success(&format!("{summary}: ok")));
    } else {
        println!();
        println!("{summary}");
    }
}

/// Prints the rule table.
fn print_rules() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Rule", "Severity", "Checks that"]);
    for rule in Rule::ALL {
        table.add_row(vec![
            Cell::new(rule.code()),
            Cell::new(rule.default_severity()),
            Cell::new(rule.description()),
        ]);
    }
    println!("{table}");
}
