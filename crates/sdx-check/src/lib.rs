//! Validation for documentation search-data manifests.
//!
//! [`check_entries`] types raw JSON entries into a [`SearchData`] and reports
//! every rule violation as a [`Diagnostic`]. [`compare_scopes`] checks that two
//! API trees generated from the same sources agree.
//!
//! ```
//! use sdx_check::{CheckOptions, Rule, check_entries};
//!
//! let entries = sdx_parse::parse_source(r#"pages = [{"l":"a.html","n":"A","t":"A","d":"x","k":"static"}];"#)
//!     .unwrap()
//!     .entries;
//! let report = check_entries(&entries, &CheckOptions::default());
//! assert_eq!(report.diagnostics[0].rule, Rule::StaticWithScope);
//! ```
//!
//! [`SearchData`]: sdx_model::SearchData

#![warn(missing_docs)]

mod diagnostic;
mod mirror;
mod rule;
mod validate;

pub use diagnostic::Diagnostic;
pub use mirror::{MirrorKey, MirrorReport, compare_scopes, detect_mirrors};
pub use rule::{Rule, Severity, UnknownRule};
pub use validate::{CheckOptions, Report, check_entries, check_records};
