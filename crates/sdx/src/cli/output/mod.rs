//! Output formatting shared by commands.

use std::{path::Path, process::ExitCode};

use sdx_model::Record;
use serde::Serialize;
pub use sdx_highlight::{dim, error, header, kind, subheader, success, warning};

/// Prints a value as JSON, compact or indented.
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ExitCode {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats one record for listings.
///
/// The short form is kind, name and link; the long form adds the title and,
/// for API symbols, the scope path.
pub fn record_line(record: &Record, long: bool) -> String {
    let mut line = format!(
        "{} {} {}",
        kind(&format!("{:<7}", record.kind.as_str())),
        record.name,
        dim(&record.link)
    );
    if long {
        line.push_str(&format!("\n        {}", record.title));
        if !record.scope.is_empty() {
            line.push_str(&format!("\n        {}", dim(&format!("in {}", record.scope))));
        }
    }
    line
}

/// Formats a path relative to `base` when it lies below it.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map_or_else(|_| path.display().to_string(), |rel| rel.display().to_string())
}

/// Returns `"1 record"` / `"2 records"` style counts.
pub fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sdx_model::Kind;

    use super::*;

    #[test]
    fn record_line_short_and_long() {
        let record = Record::new(
            "_empty_/holes$.html",
            "calculatePrice",
            "def calculatePrice(units: Int): BigDecimal",
            "<empty>/holes$",
            Kind::Def,
        );
        let short = record_line(&record, false);
        assert!(short.contains("calculatePrice"));
        assert!(short.contains("_empty_/holes$.html"));
        assert!(!short.contains('\n'));

        let long = record_line(&record, true);
        assert!(long.contains("def calculatePrice(units: Int): BigDecimal"));
        assert!(long.contains("in <empty>/holes$"));
    }

    #[test]
    fn pages_have_no_scope_line() {
        let long = record_line(&Record::page("index.html", "Welcome"), true);
        assert!(!long.contains(" in "));
    }

    #[test]
    fn display_path_strips_base() {
        let base = PathBuf::from("/work");
        assert_eq!(display_path(Path::new("/work/a/.sdx.toml"), &base), "a/.sdx.toml");
        assert_eq!(display_path(Path::new("/etc/.sdx.toml"), &base), "/etc/.sdx.toml");
    }

    #[test]
    fn counts_pluralize() {
        assert_eq!(count(1, "entry", "entries"), "1 entry");
        assert_eq!(count(0, "error", "errors"), "0 errors");
        assert_eq!(count(3, "entry", "entries"), "3 entries");
    }
}
