//! Implementation of `sdx compare`.

use std::process::ExitCode;

use sdx_check::{MirrorReport, compare_scopes, detect_mirrors};
use sdx_model::{Record, SearchData};

use crate::cli::{
    args::CompareCommand,
    context::CommandContext,
    output::{count, dim, header, print_json, record_line, success, warning},
};

/// Builds the reports for the pairs the command or config names.
///
/// Explicit `--left/--right` wins, then `[[mirror]]` entries, then detection.
fn reports<'a>(
    ctx: &CommandContext,
    cmd: &CompareCommand,
    data: &'a SearchData,
) -> Vec<MirrorReport<'a>> {
    if let (Some(left), Some(right)) = (&cmd.left, &cmd.right) {
        return vec![compare_scopes(data, left, right)];
    }
    if !ctx.config.mirrors.is_empty() {
        return ctx
            .config
            .mirrors
            .iter()
            .map(|m| compare_scopes(data, &m.left, &m.right))
            .collect();
    }
    detect_mirrors(data)
}

/// Checks that two API trees mirror each other.
///
/// Exits with failure if any compared pair has unmatched records.
pub fn run(ctx: &CommandContext, cmd: &CompareCommand) -> ExitCode {
    let data = match ctx.load_data(&cmd.input) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let reports = reports(ctx, cmd, &data);
    let identical = reports.iter().all(MirrorReport::is_identical);

    if cmd.json {
        let code = print_json(&reports, ctx.config.output.pretty_json);
        return if identical { code } else { ExitCode::FAILURE };
    }

    if reports.is_empty() {
        println!("{}", dim("No mirrored trees found."));
        return ExitCode::SUCCESS;
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_report(report);
    }

    if identical {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints one pair's result.
fn print_report(report: &MirrorReport<'_>) {
    println!(
        "{} {}",
        header(&format!("{} <-> {}", report.left, report.right)),
        dim(&format!(
            "({} matched)",
            count(report.matched, "record", "records")
        ))
    );
    if report.is_identical() {
        println!("  {}", success("identical"));
        return;
    }
    print_side(&format!("only in {}", report.left), &report.only_left);
    print_side(&format!("only in {}", report.right), &report.only_right);
}

/// Prints the unmatched records of one side.
fn print_side(label: &str, records: &[&Record]) {
    if records.is_empty() {
        return;
    }
    println!("  {}", warning(&format!("{label}:")));
    for record in records {
        println!("    {}", record_line(record, false));
    }
}
