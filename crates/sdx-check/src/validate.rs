//! Rule-based validation of raw entries and typed records.

use std::collections::BTreeSet;

use sdx_model::{Kind, LinkError, RECORD_KEYS, Record, SearchData};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Diagnostic, Rule, Severity};

/// Which rules run and how warnings are treated.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Rules whose diagnostics are suppressed.
    pub disabled: BTreeSet<Rule>,
    /// Report warnings as errors.
    pub warnings_as_errors: bool,
}

impl CheckOptions {
    /// Returns a copy with `rule` disabled.
    pub fn disable(mut self, rule: Rule) -> Self {
        self.disabled.insert(rule);
        self
    }

    /// True if diagnostics for `rule` are reported.
    pub fn is_enabled(&self, rule: Rule) -> bool {
        !self.disabled.contains(&rule)
    }

    /// Effective severity for `rule`.
    pub fn severity(&self, rule: Rule) -> Severity {
        if self.warnings_as_errors {
            Severity::Error
        } else {
            rule.default_severity()
        }
    }
}

/// The outcome of validating a source.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Every entry that could be typed as a record, in source order.
    ///
    /// Entries that are not objects, miss a key, hold a non-string field or an
    /// unknown kind are left out. Records with other violations are kept.
    pub data: SearchData,
    /// Violations in entry order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// True if there are no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Counts diagnostics of one severity.
    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Accumulates diagnostics, applying options.
struct Collector<'o> {
    /// Active options.
    options: &'o CheckOptions,
    /// Diagnostics so far.
    diagnostics: Vec<Diagnostic>,
}

impl<'o> Collector<'o> {
    /// Creates an empty collector.
    fn new(options: &'o CheckOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Records a violation unless its rule is disabled.
    fn push(
        &mut self,
        rule: Rule,
        index: usize,
        context: (Option<&str>, Option<&str>),
        message: String,
    ) {
        if !self.options.is_enabled(rule) {
            return;
        }
        let (link, name) = context;
        self.diagnostics.push(Diagnostic {
            rule,
            severity: self.options.severity(rule),
            index,
            link: link.map(str::to_string),
            name: name.map(str::to_string),
            message,
        });
    }
}

/// Validates raw array entries.
///
/// Structural rules run on every entry; record-level rules run on the entries
/// that could be typed.
pub fn check_entries(entries: &[Value], options: &CheckOptions) -> Report {
    let mut out = Collector::new(options);
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if let Some(record) = type_entry(entry, index, &mut out) {
            check_record(&record, index, &mut out);
            records.push(record);
        }
    }

    let report = Report {
        data: SearchData::new(records),
        diagnostics: out.diagnostics,
    };
    debug!(
        entries = entries.len(),
        records = report.data.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "checked search data"
    );
    report
}

/// Validates already-typed records with the record-level rules.
pub fn check_records(data: &SearchData, options: &CheckOptions) -> Vec<Diagnostic> {
    let mut out = Collector::new(options);
    for (index, record) in data.iter().enumerate() {
        check_record(record, index, &mut out);
    }
    out.diagnostics
}

/// Applies the structural rules, returning the typed record if possible.
fn type_entry(entry: &Value, index: usize, out: &mut Collector<'_>) -> Option<Record> {
    let Some(object) = entry.as_object() else {
        out.push(
            Rule::NotAnObject,
            index,
            (None, None),
            format!("entry is {}", describe(entry)),
        );
        return None;
    };

    let context = (
        object.get("l").and_then(Value::as_str),
        object.get("n").and_then(Value::as_str),
    );

    let fields = string_fields(object, index, context, out);

    for key in object.keys() {
        if !RECORD_KEYS.contains(&key.as_str()) {
            out.push(
                Rule::UnknownField,
                index,
                context,
                format!("unexpected key '{key}'"),
            );
        }
    }

    let kind = fields[4].and_then(|tag| match tag.parse::<Kind>() {
        Ok(kind) => Some(kind),
        Err(err) => {
            out.push(Rule::UnknownKind, index, context, err.to_string());
            None
        }
    });

    let ([Some(link), Some(name), Some(title), Some(scope), Some(_)], Some(kind)) = (fields, kind)
    else {
        return None;
    };
    Some(Record::new(link, name, title, scope, kind))
}

/// Extracts the five record keys, reporting missing and non-string ones.
fn string_fields<'v>(
    object: &'v Map<String, Value>,
    index: usize,
    context: (Option<&str>, Option<&str>),
    out: &mut Collector<'_>,
) -> [Option<&'v str>; 5] {
    RECORD_KEYS.map(|key| match object.get(key) {
        None => {
            out.push(
                Rule::MissingField,
                index,
                context,
                format!("missing key '{key}'"),
            );
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(other) => {
            out.push(
                Rule::NonStringField,
                index,
                context,
                format!("key '{key}' is {}, expected a string", describe(other)),
            );
            None
        }
    })
}

/// Applies the record-level rules.
fn check_record(record: &Record, index: usize, out: &mut Collector<'_>) {
    let context = (Some(record.link.as_str()), Some(record.name.as_str()));

    match record.parsed_link() {
        Err(LinkError::Empty) => {
            out.push(Rule::EmptyLink, index, context, "link is empty".into());
        }
        Err(err @ (LinkError::Absolute { .. } | LinkError::HasScheme { .. })) => {
            out.push(Rule::AbsoluteLink, index, context, err.to_string());
        }
        Err(err @ LinkError::NotHtml { .. }) => {
            out.push(Rule::LinkNotHtml, index, context, err.to_string());
        }
        Ok(link) => {
            if record.kind.is_api() && !record.scope.is_empty() {
                let implied = link.implied_scope();
                if implied != record.scope {
                    out.push(
                        Rule::ScopeMismatch,
                        index,
                        context,
                        format!(
                            "link implies scope '{implied}' but d is '{}'",
                            record.scope
                        ),
                    );
                }
            }
        }
    }

    if record.is_page() {
        if !record.scope.is_empty() {
            out.push(
                Rule::StaticWithScope,
                index,
                context,
                format!("static page has scope '{}'", record.scope),
            );
        }
        if record.title != record.name {
            out.push(
                Rule::StaticTitleMismatch,
                index,
                context,
                format!("title '{}' differs from name", record.title),
            );
        }
    } else if record.scope.is_empty() {
        out.push(
            Rule::SymbolWithoutScope,
            index,
            context,
            format!("{} symbol has an empty scope path", record.kind),
        );
    }

    if record.name.is_empty() {
        out.push(Rule::EmptyName, index, context, "name is empty".into());
    }
}

/// Names the JSON type of a value for messages.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// A well-formed API entry.
    fn symbol() -> Value {
        json!({"l": "_empty_/holes$.html", "n": "holes", "t": "object holes", "d": "<empty>/holes$", "k": "object"})
    }

    /// Runs the checker with default options.
    fn check(entries: Vec<Value>) -> Report {
        check_entries(&entries, &CheckOptions::default())
    }

    /// Rules reported, in order.
    fn rules(report: &Report) -> Vec<Rule> {
        report.diagnostics.iter().map(|d| d.rule).collect()
    }

    #[test]
    fn clean_entries_produce_no_diagnostics() {
        let report = check(vec![
            json!({"l": "index.html", "n": "Welcome", "t": "Welcome", "d": "", "k": "static"}),
            symbol(),
        ]);
        assert!(report.is_clean());
        assert_eq!(report.data.len(), 2);
    }

    #[test]
    fn not_an_object() {
        let report = check(vec![json!(42), symbol()]);
        assert_eq!(rules(&report), vec![Rule::NotAnObject]);
        assert_eq!(report.diagnostics[0].message, "entry is a number");
        assert_eq!(report.data.len(), 1);
    }

    #[test]
    fn missing_and_non_string_fields() {
        let report = check(vec![json!({"l": "a.html", "n": 3, "t": "a", "k": "static"})]);
        assert_eq!(rules(&report), vec![Rule::NonStringField, Rule::MissingField]);
        assert!(report.diagnostics[0].message.contains("'n' is a number"));
        assert!(report.diagnostics[1].message.contains("missing key 'd'"));
        assert_eq!(report.diagnostics[1].link.as_deref(), Some("a.html"));
        assert!(report.data.is_empty());
    }

    #[test]
    fn unknown_field_keeps_record() {
        let mut entry = symbol();
        entry["x"] = json!("extra");
        let report = check(vec![entry]);
        assert_eq!(rules(&report), vec![Rule::UnknownField]);
        assert_eq!(report.data.len(), 1);
    }

    #[test]
    fn unknown_kind_drops_record() {
        let mut entry = symbol();
        entry["k"] = json!("trait");
        let report = check(vec![entry]);
        assert_eq!(rules(&report), vec![Rule::UnknownKind]);
        assert!(report.diagnostics[0].message.contains("'trait'"));
        assert!(report.data.is_empty());
    }

    #[test]
    fn link_rules() {
        let report = check(vec![
            json!({"l": "", "n": "a", "t": "a", "d": "", "k": "static"}),
            json!({"l": "/abs.html", "n": "b", "t": "b", "d": "", "k": "static"}),
            json!({"l": "https://x.org/c.html", "n": "c", "t": "c", "d": "", "k": "static"}),
            json!({"l": "d.md", "n": "d", "t": "d", "d": "", "k": "static"}),
        ]);
        assert_eq!(
            rules(&report),
            vec![
                Rule::EmptyLink,
                Rule::AbsoluteLink,
                Rule::AbsoluteLink,
                Rule::LinkNotHtml
            ]
        );
        let indexes: Vec<usize> = report.diagnostics.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn scope_presence_rules() {
        let report = check(vec![
            json!({"l": "a.html", "n": "A", "t": "A", "d": "<empty>", "k": "static"}),
            json!({"l": "_empty_.html", "n": "main", "t": "def main(): Unit", "d": "", "k": "def"}),
        ]);
        assert_eq!(
            rules(&report),
            vec![Rule::StaticWithScope, Rule::SymbolWithoutScope]
        );
        assert!(report.diagnostics[1].message.starts_with("def symbol"));
    }

    #[test]
    fn soft_rules_are_warnings() {
        let report = check(vec![
            json!({"l": "a.html", "n": "", "t": "A page", "d": "", "k": "static"}),
            json!({"l": "tests/holes$.html", "n": "holes", "t": "object holes", "d": "<empty>/holes$", "k": "object"}),
        ]);
        assert_eq!(
            rules(&report),
            vec![
                Rule::StaticTitleMismatch,
                Rule::EmptyName,
                Rule::ScopeMismatch
            ]
        );
        assert_eq!(report.warning_count(), 3);
        assert!(!report.has_errors());
        assert!(report.diagnostics[2].message.contains("'tests/holes$'"));
    }

    #[test]
    fn disabled_rules_are_silent() {
        let options = CheckOptions::default().disable(Rule::ScopeMismatch);
        let entry =
            json!({"l": "tests/a.html", "n": "a", "t": "def a", "d": "other/a", "k": "def"});
        let report = check_entries(&[entry], &options);
        assert!(report.is_clean());
    }

    #[test]
    fn warnings_can_be_promoted() {
        let options = CheckOptions {
            warnings_as_errors: true,
            ..CheckOptions::default()
        };
        let entry = json!({"l": "a.html", "n": "A", "t": "B", "d": "", "k": "static"});
        let report = check_entries(&[entry], &options);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn check_records_runs_record_rules() {
        let data = SearchData::new(vec![Record::new("x.html", "x", "x", "", Kind::Val)]);
        let diagnostics = check_records(&data, &CheckOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, Rule::SymbolWithoutScope);
    }
}
