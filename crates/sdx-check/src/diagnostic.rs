//! Diagnostics produced by validation.

use std::fmt;

use serde::Serialize;

use crate::{Rule, Severity};

/// A rule violation found in one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The violated rule.
    pub rule: Rule,
    /// Effective severity after options are applied.
    pub severity: Severity,
    /// Zero-based position of the entry in the array.
    pub index: usize,
    /// The entry's link, when it has a string `l`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// The entry's name, when it has a string `n`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description of this violation.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] record {}", self.severity, self.rule, self.index)?;
        match (&self.name, &self.link) {
            (Some(name), Some(link)) => write!(f, " ({name} @ {link})")?,
            (None, Some(link)) => write!(f, " ({link})")?,
            (Some(name), None) => write!(f, " ({name})")?,
            (None, None) => {}
        }
        write!(f, ": {}", self.message)
    }
}
