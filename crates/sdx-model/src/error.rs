//! Error types for the search-data model.

use thiserror::Error;

/// A `k` tag outside the closed set of record kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record kind '{tag}' (expected one of: static, package, object, def, val, class, type)")]
pub struct KindError {
    /// The rejected tag.
    pub tag: String,
}

/// Errors raised when an `l` value is not a usable relative page link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The link is the empty string.
    #[error("link is empty")]
    Empty,

    /// The link starts with `/`.
    #[error("link is absolute: {link}")]
    Absolute {
        /// The offending link.
        link: String,
    },

    /// The link carries a URL scheme such as `https://`.
    #[error("link has a URL scheme: {link}")]
    HasScheme {
        /// The offending link.
        link: String,
    },

    /// The page part of the link does not end in `.html`.
    #[error("link does not point at an .html page: {link}")]
    NotHtml {
        /// The offending link.
        link: String,
    },
}
