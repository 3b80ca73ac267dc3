//! Implementation of `sdx stats`.

use std::{collections::BTreeSet, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use sdx_model::{Kind, SearchData};
use serde::Serialize;

use crate::cli::{
    args::StatsCommand,
    context::CommandContext,
    output::{header, print_json},
};

/// Summary figures for a manifest.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Stats<'a> {
    /// Total records.
    records: usize,
    /// Static pages.
    pages: usize,
    /// API symbols.
    symbols: usize,
    /// Distinct HTML pages linked.
    distinct_pages: usize,
    /// Distinct scope paths.
    scopes: usize,
    /// Top-level link components of API records.
    top_level: Vec<&'a str>,
    /// Records per kind.
    kinds: Vec<(Kind, usize)>,
}

impl<'a> Stats<'a> {
    /// Computes the summary.
    fn of(data: &'a SearchData) -> Self {
        let distinct_pages: BTreeSet<&str> = data
            .iter()
            .filter_map(|r| r.parsed_link().ok().map(|link| link.page()))
            .collect();
        Self {
            records: data.len(),
            pages: data.pages().count(),
            symbols: data.symbols().count(),
            distinct_pages: distinct_pages.len(),
            scopes: data.group_by_scope().len(),
            top_level: data.top_level_scopes(),
            kinds: data.kind_counts(),
        }
    }
}

/// Summarizes records by kind and scope.
pub fn run(ctx: &CommandContext, cmd: &StatsCommand) -> ExitCode {
    let data = match ctx.load_data(&cmd.input) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let stats = Stats::of(&data);

    if cmd.json {
        return print_json(&stats, ctx.config.output.pretty_json);
    }

    println!("{}", header("Records"));
    let mut totals = Table::new();
    totals.load_preset(UTF8_FULL_CONDENSED);
    for (label, value) in [
        ("records", stats.records),
        ("static pages", stats.pages),
        ("api symbols", stats.symbols),
        ("distinct pages", stats.distinct_pages),
        ("scopes", stats.scopes),
    ] {
        totals.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{totals}");

    println!();
    println!("{}", header("Kinds"));
    let mut kinds = Table::new();
    kinds.load_preset(UTF8_FULL_CONDENSED);
    kinds.set_header(vec!["Kind", "Count"]);
    for (kind, n) in &stats.kinds {
        kinds.add_row(vec![
            Cell::new(kind),
            Cell::new(n).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{kinds}");

    if !stats.top_level.is_empty() {
        println!();
        println!("{} {}", header("Top-level:"), stats.top_level.join(", "));
    }

    ExitCode::SUCCESS
}
