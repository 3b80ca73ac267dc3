//! Implementation of `sdx scopes`.

use std::process::ExitCode;

use sdx_model::{Record, ScopePath, SearchData};
use serde::Serialize;

use crate::cli::{
    args::ScopesCommand,
    context::CommandContext,
    output::{count, dim, header, kind, print_json},
};

/// One scope and the symbols it owns.
#[derive(Serialize)]
struct ScopeGroup<'a> {
    /// Raw scope path as stored in `d`.
    scope: &'a str,
    /// Dotted name with the empty package dropped.
    qualified_name: String,
    /// Package segment.
    package: Option<&'a str>,
    /// Records in source order.
    records: Vec<&'a Record>,
}

/// Groups API records by scope, sorted by scope path.
fn groups(data: &SearchData) -> Vec<ScopeGroup<'_>> {
    data.group_by_scope()
        .into_iter()
        .map(|(scope, records)| {
            let path = ScopePath::new(scope);
            ScopeGroup {
                scope,
                qualified_name: path.qualified_name(),
                package: path.package(),
                records,
            }
        })
        .collect()
}

/// Shows API records grouped by scope path.
pub fn run(ctx: &CommandContext, cmd: &ScopesCommand) -> ExitCode {
    let data = match ctx.load_data(&cmd.input) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let groups = groups(&data);

    if cmd.json {
        return print_json(&groups, ctx.config.output.pretty_json);
    }

    if groups.is_empty() {
        println!("{}", dim("No API symbols."));
        return ExitCode::SUCCESS;
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            header(&group.qualified_name),
            dim(&format!(
                "({}, {})",
                group.scope,
                count(group.records.len(), "symbol", "symbols")
            ))
        );
        for record in &group.records {
            println!(
                "  {} {}",
                kind(&format!("{:<7}", record.kind.as_str())),
                record.title
            );
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_groups() {
        let groups = groups(sdx_parse::bundled());
        let scopes: Vec<&str> = groups.iter().map(|g| g.scope).collect();
        assert!(scopes.windows(2).all(|w| w[0] < w[1]));
        assert!(scopes.contains(&"<empty>"));
        assert!(scopes.contains(&"tests"));

        let dollars = groups
            .iter()
            .find(|g| g.scope == "tests/values$$ZoneA$$Dollars$")
            .unwrap();
        assert_eq!(dollars.qualified_name, "tests.values.ZoneA.Dollars");
        assert_eq!(dollars.package, Some("tests"));
        let names: Vec<&str> = dollars.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Dollars", "+", "-", "apply"]);
    }

    #[test]
    fn empty_package_name_is_dropped() {
        let groups = groups(sdx_parse::bundled());
        let holes = groups.iter().find(|g| g.scope == "<empty>/holes$").unwrap();
        assert_eq!(holes.qualified_name, "holes");
        assert_eq!(holes.records.len(), 3);
    }

    #[test]
    fn static_pages_are_not_grouped() {
        let data = SearchData::new(vec![Record::page("index.html", "Welcome")]);
        assert!(groups(&data).is_empty());
    }
}
