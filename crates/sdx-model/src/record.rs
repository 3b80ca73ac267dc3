//! The search-data record.

use serde::{Deserialize, Serialize};

use crate::{Kind, Link, LinkError, ScopePath};

/// One entry of the search-data array, describing a page or an API symbol.
///
/// Field order matches the wire key order `l, n, t, d, k`, so serializing a
/// record reproduces the generator's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Relative page path, optionally followed by `#fragment`.
    #[serde(rename = "l")]
    pub link: String,
    /// Short display name.
    #[serde(rename = "n")]
    pub name: String,
    /// Full heading or declaration signature.
    #[serde(rename = "t")]
    pub title: String,
    /// Owning scope path; empty for static pages.
    #[serde(rename = "d")]
    pub scope: String,
    /// Record kind.
    #[serde(rename = "k")]
    pub kind: Kind,
}

impl Record {
    /// Creates a record from its five fields.
    pub fn new(
        link: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        scope: impl Into<String>,
        kind: Kind,
    ) -> Self {
        Self {
            link: link.into(),
            name: name.into(),
            title: title.into(),
            scope: scope.into(),
            kind,
        }
    }

    /// Creates a static page record, whose title equals its name.
    pub fn page(link: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(link, name.clone(), name, "", Kind::Static)
    }

    /// Parses the link.
    pub fn parsed_link(&self) -> Result<Link<'_>, LinkError> {
        Link::parse(&self.link)
    }

    /// Returns the scope path view.
    pub fn scope_path(&self) -> ScopePath<'_> {
        ScopePath::new(&self.scope)
    }

    /// True for hand-authored pages.
    pub fn is_page(&self) -> bool {
        self.kind == Kind::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_wire_order() {
        let record = Record::new(
            "_empty_.html",
            "main",
            "def main(name: String): Unit",
            "<empty>",
            Kind::Def,
        );
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"l":"_empty_.html","n":"main","t":"def main(name: String): Unit","d":"<empty>","k":"def"}"#
        );
    }

    #[test]
    fn rejects_extra_keys() {
        let json = r#"{"l":"a.html","n":"a","t":"a","d":"","k":"static","x":"1"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn page_constructor() {
        let record = Record::page("values.html", "Values");
        assert!(record.is_page());
        assert_eq!(record.title, "Values");
        assert!(record.scope_path().is_empty());
        assert_eq!(record.parsed_link().unwrap().stem(), "values");
    }
}
