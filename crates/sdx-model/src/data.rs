//! The ordered record collection and its lookups.

use std::{collections::BTreeMap, slice};

use serde::{Deserialize, Serialize};

use crate::{Kind, Record};

/// An ordered, immutable list of search-data records.
///
/// Order is the generator's order. Records are never deduplicated: the same
/// symbol set may legitimately appear under several top-level scopes, and no
/// uniqueness is enforced on `(link, name)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchData {
    /// Records in source order.
    records: Vec<Record>,
}

impl SearchData {
    /// Wraps records in source order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns all records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the collection, returning the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records of the given kind.
    pub fn by_kind(&self, kind: Kind) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Records whose name equals `name` exactly.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// Records whose scope path equals `scope` exactly.
    pub fn by_scope<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| r.scope == scope)
    }

    /// Records whose link starts with `prefix`.
    pub fn by_link_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| r.link.starts_with(prefix))
    }

    /// Hand-authored pages.
    pub fn pages(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_page())
    }

    /// Generated API symbols.
    pub fn symbols(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.kind.is_api())
    }

    /// Count of records per kind, in [`Kind::ALL`] order, including zero counts.
    pub fn kind_counts(&self) -> Vec<(Kind, usize)> {
        Kind::ALL
            .into_iter()
            .map(|kind| (kind, self.by_kind(kind).count()))
            .collect()
    }

    /// API records grouped by scope path. Static pages are left out.
    pub fn group_by_scope(&self) -> BTreeMap<&str, Vec<&Record>> {
        let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
        for record in self.symbols() {
            groups.entry(record.scope.as_str()).or_default().push(record);
        }
        groups
    }

    /// Distinct top-level link components of API records, in first-seen order.
    ///
    /// Records with unparseable links are skipped.
    pub fn top_level_scopes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in self.symbols() {
            let Ok(link) = record.parsed_link() else {
                continue;
            };
            let top = link.top_level();
            if !seen.contains(&top) {
                seen.push(top);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a SearchData {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for SearchData {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchData {
        SearchData::new(vec![
            Record::page("index.html", "Welcome"),
            Record::new("_empty_.html", "<empty>", "package <empty>", "<empty>", Kind::Package),
            Record::new(
                "_empty_.html",
                "main",
                "def main(name: String): Unit",
                "<empty>",
                Kind::Def,
            ),
            Record::new("_empty_/holes$.html", "holes", "object holes", "<empty>/holes$", Kind::Object),
            Record::new("tests.html", "tests", "package tests", "tests", Kind::Package),
            Record::new("tests/holes$.html", "holes", "object holes", "tests/holes$", Kind::Object),
            Record::page("index.html", "index"),
        ])
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let data = sample();
        assert_eq!(data.len(), 7);
        assert_eq!(data.by_link_prefix("index.html").count(), 2);
        assert_eq!(data.records()[0].name, "Welcome");
        assert_eq!(data.records()[6].name, "index");
    }

    #[test]
    fn filters_by_field() {
        let data = sample();
        assert_eq!(data.by_name("holes").count(), 2);
        assert_eq!(data.by_scope("<empty>").count(), 2);
        assert_eq!(data.by_kind(Kind::Package).count(), 2);
        assert_eq!(data.pages().count(), 2);
        assert_eq!(data.symbols().count(), 5);
    }

    #[test]
    fn kind_counts_cover_all_kinds() {
        let counts = sample().kind_counts();
        assert_eq!(counts.len(), Kind::ALL.len());
        assert_eq!(counts[0], (Kind::Static, 2));
        assert_eq!(counts[1], (Kind::Package, 2));
        assert_eq!(counts[6], (Kind::Type, 0));
    }

    #[test]
    fn groups_symbols_by_scope() {
        let data = sample();
        let groups = data.group_by_scope();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups["<empty>"].len(), 2);
        assert!(!groups.contains_key(""));
    }

    #[test]
    fn top_level_scopes_in_first_seen_order() {
        assert_eq!(sample().top_level_scopes(), vec!["_empty_", "tests"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let data: SearchData = vec![Record::page("a.html", "A")].into_iter().collect();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.starts_with("[{"));
    }
}
