//! The closed set of record kinds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::KindError;

/// Discriminant classifying a record as a static page or an API declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A hand-authored documentation page.
    Static,
    /// A package declaration.
    Package,
    /// An object (singleton) declaration.
    Object,
    /// A method.
    Def,
    /// A value member.
    Val,
    /// A class declaration.
    Class,
    /// A type alias or abstract type member.
    Type,
}

impl Kind {
    /// Every kind, in the order reports list them.
    pub const ALL: [Self; 7] = [
        Self::Static,
        Self::Package,
        Self::Object,
        Self::Def,
        Self::Val,
        Self::Class,
        Self::Type,
    ];

    /// Returns the wire tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Package => "package",
            Self::Object => "object",
            Self::Def => "def",
            Self::Val => "val",
            Self::Class => "class",
            Self::Type => "type",
        }
    }

    /// True for kinds generated from API declarations, which must carry a scope path.
    pub const fn is_api(self) -> bool {
        !matches!(self, Self::Static)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KindError { tag: s.to_string() })
    }
}
