//! Comparison of API trees generated twice under different packages.
//!
//! The same sources documented under two top-level packages yield records that
//! differ only in their link and scope prefix. Each record below a prefix is
//! keyed by what remains once the prefix is removed, and the two sides are
//! matched as multisets.

use std::collections::BTreeMap;

use sdx_model::{Kind, Record, SearchData};
use serde::Serialize;
use tracing::debug;

/// Prefix-independent identity of a record within one tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MirrorKey<'a> {
    /// Link below the `prefix/` directory.
    pub link: &'a str,
    /// Scope with its package segment removed.
    pub scope: &'a str,
    /// Record name.
    pub name: &'a str,
    /// Record title.
    pub title: &'a str,
    /// Record kind.
    pub kind: Kind,
}

impl<'a> MirrorKey<'a> {
    /// Keys `record` relative to `prefix`, or `None` if it is not below it.
    ///
    /// Only records whose page lives under `prefix/` qualify. The package page
    /// `prefix.html` and everything on it is left out.
    pub fn of(record: &'a Record, prefix: &str) -> Option<Self> {
        if !record.kind.is_api() || record.kind == Kind::Package {
            return None;
        }
        let link = record.parsed_link().ok()?.relative_to(prefix)?;
        if link.is_empty() {
            return None;
        }
        Some(Self {
            link,
            scope: record.scope_path().relative_to_package(),
            name: &record.name,
            title: &record.title,
            kind: record.kind,
        })
    }
}

/// Result of comparing two prefixes.
#[derive(Debug, Clone, Serialize)]
pub struct MirrorReport<'a> {
    /// Left prefix.
    pub left: String,
    /// Right prefix.
    pub right: String,
    /// Number of records with a counterpart on the other side.
    pub matched: usize,
    /// Left records without a right counterpart, in source order.
    pub only_left: Vec<&'a Record>,
    /// Right records without a left counterpart, in source order.
    pub only_right: Vec<&'a Record>,
}

impl MirrorReport<'_> {
    /// True if every record has a counterpart.
    pub fn is_identical(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

/// Compares the records below `left/` with those below `right/`.
pub fn compare_scopes<'a>(data: &'a SearchData, left: &str, right: &str) -> MirrorReport<'a> {
    let left_side = keyed(data, left);
    let right_side = keyed(data, right);

    let only_left = unmatched(&left_side, &right_side);
    let only_right = unmatched(&right_side, &left_side);
    let matched = left_side.len() - only_left.len();

    debug!(
        left,
        right,
        matched,
        only_left = only_left.len(),
        only_right = only_right.len(),
        "compared mirror scopes"
    );

    MirrorReport {
        left: left.to_string(),
        right: right.to_string(),
        matched,
        only_left,
        only_right,
    }
}

/// Proposes mirror pairs among the top-level scopes.
///
/// Every pair of distinct top-level link components sharing at least one
/// keyed record is compared, in first-seen order.
pub fn detect_mirrors(data: &SearchData) -> Vec<MirrorReport<'_>> {
    let tops = data.top_level_scopes();
    let mut reports = Vec::new();
    for (i, left) in tops.iter().enumerate() {
        for right in &tops[i + 1..] {
            let report = compare_scopes(data, left, right);
            if report.matched > 0 {
                reports.push(report);
            }
        }
    }
    reports
}

/// Records of `side` left over once each is paired with an equal key of `other`.
///
/// Pairing consumes keys in source order, so the first duplicates match.
fn unmatched<'a>(
    side: &[(MirrorKey<'a>, &'a Record)],
    other: &[(MirrorKey<'a>, &'a Record)],
) -> Vec<&'a Record> {
    let mut available: BTreeMap<&MirrorKey<'a>, usize> = BTreeMap::new();
    for (key, _) in other {
        *available.entry(key).or_default() += 1;
    }
    side.iter()
        .filter_map(|(key, record)| match available.get_mut(key) {
            Some(count) if *count > 0 => {
                *count -= 1;
                None
            }
            _ => Some(*record),
        })
        .collect()
}

/// Keys every record below `prefix`, in source order.
fn keyed<'a>(data: &'a SearchData, prefix: &str) -> Vec<(MirrorKey<'a>, &'a Record)> {
    data.iter()
        .filter_map(|record| MirrorKey::of(record, prefix).map(|key| (key, record)))
        .collect()
}
