//! The search data shipped with the crate.
//!
//! This is the manifest of the "Scala 3 By Example" documentation site: 19
//! hand-authored pages plus the API symbols of the `<empty>` and `tests`
//! packages, which were generated from the same sources.

use std::sync::OnceLock;

use sdx_model::SearchData;

use crate::parse_records;

/// Raw text of the bundled `searchData.js`.
pub const BUNDLED_SOURCE: &str = include_str!("../data/searchData.js");

/// Parsed bundled data, built on first use.
static BUNDLED: OnceLock<SearchData> = OnceLock::new();

/// Returns the bundled search data.
pub fn bundled() -> &'static SearchData {
    BUNDLED.get_or_init(|| {
        parse_records(BUNDLED_SOURCE).expect("bundled searchData.js is a valid manifest")
    })
}

#[cfg(test)]
mod tests {
    use sdx_model::{Kind, RECORD_KEYS};
    use serde_json::Value;

    use super::*;
    use crate::{WriteOptions, parse_source, write_source};

    #[test]
    fn bundled_has_every_record() {
        let data = bundled();
        assert_eq!(data.len(), 70);
        assert_eq!(data.pages().count(), 19);
        assert_eq!(data.by_kind(Kind::Def).count(), 30);
        assert_eq!(data.by_kind(Kind::Object).count(), 12);
        assert_eq!(data.by_kind(Kind::Class).count(), 3);
        assert_eq!(data.by_kind(Kind::Package).count(), 2);
        assert_eq!(data.by_kind(Kind::Type).count(), 2);
        assert_eq!(data.by_kind(Kind::Val).count(), 2);
    }

    #[test]
    fn every_entry_has_exactly_five_string_keys() {
        let source = parse_source(BUNDLED_SOURCE).unwrap();
        for entry in &source.entries {
            let object = entry.as_object().unwrap();
            assert_eq!(object.len(), RECORD_KEYS.len());
            for key in RECORD_KEYS {
                assert!(matches!(object.get(key), Some(Value::String(_))), "{entry}");
            }
        }
    }

    #[test]
    fn links_are_relative_html_pages() {
        for record in bundled() {
            let link = record.parsed_link().unwrap();
            assert!(link.page().ends_with(".html"), "{}", record.link);
        }
    }

    #[test]
    fn scope_presence_follows_kind() {
        for record in bundled() {
            if record.kind.is_api() {
                assert!(!record.scope.is_empty(), "{record:?}");
            } else {
                assert!(record.scope.is_empty(), "{record:?}");
            }
        }
    }

    #[test]
    fn empty_package_main() {
        let main: Vec<_> = bundled()
            .by_name("main")
            .filter(|r| r.scope == "<empty>")
            .collect();
        assert_eq!(main.len(), 1);
        assert_eq!(main[0].title, "def main(name: String): Unit");
        assert_eq!(main[0].link, "_empty_.html");
    }

    #[test]
    fn writer_reproduces_bundled_file() {
        let out = write_source(bundled(), &WriteOptions::default());
        assert_eq!(out, BUNDLED_SOURCE);
    }
}
