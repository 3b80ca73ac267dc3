//! Validation rules and their default severities.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but consumable.
    Warning,
    /// Violates a manifest invariant.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A rule name that matches no known rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// The entry is not a JSON object.
    NotAnObject,
    /// One of `l n t d k` is absent.
    MissingField,
    /// A record field is not a string.
    NonStringField,
    /// A key outside `l n t d k`.
    UnknownField,
    /// `k` is outside the closed set of kinds.
    UnknownKind,
    /// `l` is empty.
    EmptyLink,
    /// `l` is absolute or carries a URL scheme.
    AbsoluteLink,
    /// `l` does not point at an `.html` page.
    LinkNotHtml,
    /// A static page with a scope path.
    StaticWithScope,
    /// An API symbol without a scope path.
    SymbolWithoutScope,
    /// The scope encoded in `l` differs from `d`.
    ScopeMismatch,
    /// A static page whose title differs from its name.
    StaticTitleMismatch,
    /// `n` is empty.
    EmptyName,
}

impl Rule {
    /// Every rule, in reporting order.
    pub const ALL: [Self; 13] = [
        Self::NotAnObject,
        Self::MissingField,
        Self::NonStringField,
        Self::UnknownField,
        Self::UnknownKind,
        Self::EmptyLink,
        Self::AbsoluteLink,
        Self::LinkNotHtml,
        Self::StaticWithScope,
        Self::SymbolWithoutScope,
        Self::ScopeMismatch,
        Self::StaticTitleMismatch,
        Self::EmptyName,
    ];

    /// Returns the rule code used in output and configuration.
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotAnObject => "not-an-object",
            Self::MissingField => "missing-field",
            Self::NonStringField => "non-string-field",
            Self::UnknownField => "unknown-field",
            Self::UnknownKind => "unknown-kind",
            Self::EmptyLink => "empty-link",
            Self::AbsoluteLink => "absolute-link",
            Self::LinkNotHtml => "link-not-html",
            Self::StaticWithScope => "static-with-scope",
            Self::SymbolWithoutScope => "symbol-without-scope",
            Self::ScopeMismatch => "scope-mismatch",
            Self::StaticTitleMismatch => "static-title-mismatch",
            Self::EmptyName => "empty-name",
        }
    }

    /// Returns the severity the rule reports at unless promoted.
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::ScopeMismatch | Self::StaticTitleMismatch | Self::EmptyName => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// One-line description for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotAnObject => "every entry is an object",
            Self::MissingField => "every record has the keys l, n, t, d and k",
            Self::NonStringField => "every record field is a string",
            Self::UnknownField => "records carry no keys besides l, n, t, d and k",
            Self::UnknownKind => "k is one of static, package, object, def, val, class, type",
            Self::EmptyLink => "l is not empty",
            Self::AbsoluteLink => "l is relative to the documentation root",
            Self::LinkNotHtml => "l points at an .html page, optionally with a #fragment",
            Self::StaticWithScope => "static pages have an empty d",
            Self::SymbolWithoutScope => "API symbols have a non-empty d",
            Self::ScopeMismatch => "the scope encoded in l matches d",
            Self::StaticTitleMismatch => "static pages have t equal to n",
            Self::EmptyName => "n is not empty",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.code() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}
