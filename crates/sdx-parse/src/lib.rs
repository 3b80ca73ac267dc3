//! Reader and writer for documentation search-data manifests.
//!
//! Accepts the generated script form and plain JSON:
//!
//! - **Generated**: `pages = [{"l":...,"n":...,"t":...,"d":...,"k":...}, ...];`
//! - **Declared**: `var window.pages = [...]` (trailing `;` optional)
//! - **JSON**: `[...]`
//!
//! The array body must be strict JSON. Comments are allowed around the wrapper.
//!
//! # Example
//!
//! ```
//! use sdx_parse::{WriteOptions, parse_records, write_source};
//!
//! let src = r#"pages = [{"l":"index.html","n":"Welcome","t":"Welcome","d":"","k":"static"}];"#;
//! let data = parse_records(src).unwrap();
//! assert_eq!(data.len(), 1);
//! assert_eq!(write_source(&data, &WriteOptions::default()), src);
//! ```

#![warn(missing_docs)]

mod bundled;
mod error;
mod lexer;
mod parser;
mod writer;

pub use bundled::{BUNDLED_SOURCE, bundled};
pub use error::{Location, ParseError, SyntaxError};
pub use parser::{Source, parse_records, parse_source, read_file};
pub use writer::{DEFAULT_BINDING, WriteOptions, write_json, write_source};
