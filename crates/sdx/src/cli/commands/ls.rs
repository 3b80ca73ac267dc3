//! Implementation of `sdx ls`.

use std::process::ExitCode;

use globset::{Glob, GlobMatcher};
use sdx_model::{Kind, Record};

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, print_json, record_line},
};

/// Exact-match record filters. Unset filters match everything.
#[derive(Default)]
struct Filter {
    /// Accepted kinds; empty accepts all.
    kinds: Vec<Kind>,
    /// Required scope path.
    scope: Option<String>,
    /// Required name.
    name: Option<String>,
    /// Link pattern.
    link: Option<GlobMatcher>,
}

impl Filter {
    /// Builds the filter from command arguments.
    fn from_command(cmd: &LsCommand) -> Result<Self, globset::Error> {
        let link = cmd
            .link_glob
            .as_deref()
            .map(|pattern| Glob::new(pattern).map(|glob| glob.compile_matcher()))
            .transpose()?;
        Ok(Self {
            kinds: cmd.kinds.clone(),
            scope: cmd.scope.clone(),
            name: cmd.name.clone(),
            link,
        })
    }

    /// True if `record` passes every filter.
    fn matches(&self, record: &Record) -> bool {
        (self.kinds.is_empty() || self.kinds.contains(&record.kind))
            && self.scope.as_ref().is_none_or(|s| *s == record.scope)
            && self.name.as_ref().is_none_or(|n| *n == record.name)
            && self.link.as_ref().is_none_or(|m| m.is_match(&record.link))
    }
}

/// Lists records matching the filters, in source order.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let filter = match Filter::from_command(cmd) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("error: invalid link glob: {e}");
            return ExitCode::FAILURE;
        }
    };

    let data = match ctx.load_data(&cmd.input) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let matched: Vec<&Record> = data.iter().filter(|r| filter.matches(r)).collect();

    if cmd.json {
        return print_json(&matched, ctx.config.output.pretty_json);
    }

    if matched.is_empty() {
        println!("{}", dim("No matching records."));
        return ExitCode::SUCCESS;
    }
    for record in matched {
        println!("{}", record_line(record, cmd.long));
    }
    ExitCode::SUCCESS
}
