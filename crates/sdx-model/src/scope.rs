//! Parsed view of a record's `d` field.

use std::fmt;

use crate::link::EMPTY_PACKAGE_SCOPE;

/// A declaration that owns nested members, decoded from a scope segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner<'a> {
    /// Declared name without the `$` object marker.
    pub name: &'a str,
    /// Whether the owner is an object rather than a class.
    pub is_object: bool,
}

/// The fully qualified owning path of an API symbol, e.g. `<empty>/values$$ZoneA$`.
///
/// Segments are separated by `/`. The first segment is the package. When the
/// path has more than one segment, the last one encodes the owner nesting with
/// `$$` between owners and a trailing `$` on objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopePath<'a>(&'a str);

impl<'a> ScopePath<'a> {
    /// Wraps a raw `d` value.
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Returns the raw scope text.
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// True for static pages, which have no owner.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Returns the package segment.
    pub fn package(&self) -> Option<&'a str> {
        self.segments().next()
    }

    /// Returns the scope with its package segment removed.
    pub fn relative_to_package(&self) -> &'a str {
        self.0.split_once('/').map_or("", |(_, rest)| rest)
    }

    /// Decodes the owner chain of the last segment, outermost first.
    ///
    /// Package-only scopes have no owners.
    pub fn owners(&self) -> Vec<Owner<'a>> {
        let segments: Vec<&'a str> = self.segments().collect();
        let &[_, .., last] = segments.as_slice() else {
            return Vec::new();
        };

        let parts: Vec<&'a str> = last.split("$$").collect();
        let count = parts.len();
        parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| match part.strip_suffix('$') {
                Some(name) => Owner {
                    name,
                    is_object: true,
                },
                // Owners followed by `$$` were objects; the separator ate the marker.
                None => Owner {
                    name: part,
                    is_object: i + 1 < count,
                },
            })
            .collect()
    }

    /// Returns a dotted name such as `tests.values.ZoneA`.
    ///
    /// The empty package is dropped unless it is the whole scope.
    pub fn qualified_name(&self) -> String {
        let segments: Vec<&str> = self.segments().collect();
        if segments.len() <= 1 {
            return self.0.to_string();
        }

        let mut names: Vec<&str> = segments[..segments.len() - 1]
            .iter()
            .copied()
            .filter(|s| *s != EMPTY_PACKAGE_SCOPE)
            .collect();
        names.extend(self.owners().iter().map(|o| o.name));
        names.join(".")
    }
}

impl fmt::Display for ScopePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_only_scope() {
        let scope = ScopePath::new("<empty>");
        assert_eq!(scope.package(), Some("<empty>"));
        assert!(scope.owners().is_empty());
        assert_eq!(scope.relative_to_package(), "");
        assert_eq!(scope.qualified_name(), "<empty>");
    }

    #[test]
    fn nested_object_chain() {
        let scope = ScopePath::new("<empty>/values$$ZoneA$$Dollars$");
        assert_eq!(
            scope.owners(),
            vec![
                Owner {
                    name: "values",
                    is_object: true
                },
                Owner {
                    name: "ZoneA",
                    is_object: true
                },
                Owner {
                    name: "Dollars",
                    is_object: true
                },
            ]
        );
        assert_eq!(scope.relative_to_package(), "values$$ZoneA$$Dollars$");
        assert_eq!(scope.qualified_name(), "values.ZoneA.Dollars");
    }

    #[test]
    fn class_owner_has_no_marker() {
        let scope = ScopePath::new("tests/values$$ZoneA$$NonOpaque");
        let owners = scope.owners();
        assert_eq!(owners.len(), 3);
        assert!(!owners[2].is_object);
        assert_eq!(owners[2].name, "NonOpaque");
        assert_eq!(scope.qualified_name(), "tests.values.ZoneA.NonOpaque");

        let class = ScopePath::new("<empty>/main");
        assert_eq!(
            class.owners(),
            vec![Owner {
                name: "main",
                is_object: false
            }]
        );
    }

    #[test]
    fn empty_scope() {
        let scope = ScopePath::new("");
        assert!(scope.is_empty());
        assert_eq!(scope.package(), None);
        assert!(scope.owners().is_empty());
    }
}
