//! Parsed view of a record's `l` field.
//!
//! Links are relative to the documentation root. API pages encode their owner
//! nesting in the file stem: `values$$ZoneA$$Dollars$.html` is the page of the
//! object `Dollars` inside `ZoneA` inside `values`. The top-level directory (or
//! the stem, for package pages) names the package, with Scala's empty package
//! spelled `_empty_`.

use crate::LinkError;

/// Page suffix every link must carry.
const HTML_SUFFIX: &str = ".html";

/// Link spelling of the empty package.
pub const EMPTY_PACKAGE_LINK: &str = "_empty_";

/// Scope spelling of the empty package.
pub const EMPTY_PACKAGE_SCOPE: &str = "<empty>";

/// A validated relative page link, borrowed from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    /// The full link text.
    raw: &'a str,
    /// Byte length of the page part (everything before `#`).
    page_len: usize,
}

impl<'a> Link<'a> {
    /// Parses and validates a link.
    pub fn parse(raw: &'a str) -> Result<Self, LinkError> {
        if raw.is_empty() {
            return Err(LinkError::Empty);
        }
        if raw.starts_with('/') {
            return Err(LinkError::Absolute {
                link: raw.to_string(),
            });
        }
        if has_scheme(raw) {
            return Err(LinkError::HasScheme {
                link: raw.to_string(),
            });
        }

        let page_len = raw.find('#').unwrap_or(raw.len());
        let link = Self { raw, page_len };
        if !link.page().ends_with(HTML_SUFFIX) || link.stem().is_empty() {
            return Err(LinkError::NotHtml {
                link: raw.to_string(),
            });
        }

        Ok(link)
    }

    /// Returns the full link text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the page path without the fragment.
    pub fn page(&self) -> &'a str {
        &self.raw[..self.page_len]
    }

    /// Returns the anchor after `#`, if any.
    pub fn fragment(&self) -> Option<&'a str> {
        self.raw
            .get(self.page_len + 1..)
            .filter(|fragment| !fragment.is_empty())
    }

    /// Returns the directory components leading to the page.
    pub fn directories(&self) -> impl Iterator<Item = &'a str> {
        let page = self.page();
        let dirs = page.rfind('/').map_or("", |idx| &page[..idx]);
        dirs.split('/').filter(|c| !c.is_empty())
    }

    /// Returns the page file name, including `.html`.
    pub fn file_name(&self) -> &'a str {
        let page = self.page();
        page.rfind('/').map_or(page, |idx| &page[idx + 1..])
    }

    /// Returns the file name without `.html`.
    pub fn stem(&self) -> &'a str {
        let name = self.file_name();
        name.strip_suffix(HTML_SUFFIX).unwrap_or(name)
    }

    /// Returns the nested member names encoded in the stem, outermost first.
    ///
    /// `values$$ZoneA$$Dollars$` yields `["values", "ZoneA", "Dollars"]`.
    pub fn members(&self) -> Vec<&'a str> {
        self.stem()
            .split("$$")
            .map(|m| m.strip_suffix('$').unwrap_or(m))
            .collect()
    }

    /// Returns the first path component, or the stem for root-level pages.
    pub fn top_level(&self) -> &'a str {
        self.directories().next().unwrap_or_else(|| self.stem())
    }

    /// Returns the scope path this link encodes.
    ///
    /// The page path loses its `.html` suffix and a leading `_empty_` component
    /// becomes `<empty>`, so `_empty_/holes$.html` implies `<empty>/holes$`.
    pub fn implied_scope(&self) -> String {
        let page = self.page();
        let path = page.strip_suffix(HTML_SUFFIX).unwrap_or(page);
        match path.split_once('/') {
            Some((EMPTY_PACKAGE_LINK, rest)) => format!("{EMPTY_PACKAGE_SCOPE}/{rest}"),
            None if path == EMPTY_PACKAGE_LINK => EMPTY_PACKAGE_SCOPE.to_string(),
            _ => path.to_string(),
        }
    }

    /// Returns the link relative to a top-level prefix.
    ///
    /// The package page `{prefix}.html` maps to the empty string, pages under
    /// `{prefix}/` map to the remainder. Other links return `None`.
    pub fn relative_to(&self, prefix: &str) -> Option<&'a str> {
        let rest = self.raw.strip_prefix(prefix)?;
        if let Some(inner) = rest.strip_prefix('/') {
            return Some(inner);
        }
        if rest == HTML_SUFFIX || rest.starts_with(".html#") {
            return Some("");
        }
        None
    }
}

/// True if the link starts with `scheme://`.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
