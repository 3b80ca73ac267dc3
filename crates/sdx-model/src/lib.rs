//! Typed records for documentation search-data manifests.
//!
//! Documentation generators ship a `searchData.js` file that assigns an array of
//! five-key records to a global binding:
//!
//! ```text
//! pages = [{"l":"_empty_.html","n":"main","t":"def main(name: String): Unit","d":"<empty>","k":"def"}, ...];
//! ```
//!
//! This crate models one entry as a [`Record`] with a closed [`Kind`], and the
//! whole array as an ordered [`SearchData`]. [`Link`] and [`ScopePath`] decode
//! the nesting that generated API entries encode in their `l` and `d` fields.
//!
//! # Example
//!
//! ```
//! use sdx_model::{Kind, Record, SearchData};
//!
//! let data = SearchData::new(vec![
//!     Record::page("index.html", "Welcome"),
//!     Record::new("tests/holes$.html", "holes", "object holes", "tests/holes$", Kind::Object),
//! ]);
//! assert_eq!(data.symbols().count(), 1);
//! assert_eq!(data.records()[1].scope_path().qualified_name(), "tests.holes");
//! ```

#![warn(missing_docs)]

mod data;
mod error;
mod kind;
mod link;
mod record;
mod scope;

pub use data::SearchData;
pub use error::{KindError, LinkError};
pub use kind::Kind;
pub use link::{EMPTY_PACKAGE_LINK, EMPTY_PACKAGE_SCOPE, Link};
pub use record::Record;
pub use scope::{Owner, ScopePath};

/// The wire keys every record carries, in serialization order.
pub const RECORD_KEYS: [&str; 5] = ["l", "n", "t", "d", "k"];
