//! Error types for reading search-data sources.
//!
//! Syntax errors carry a [`Location`] and the offending source line so they can
//! be printed with a caret under the problem.

use std::{error, fmt, io, path::PathBuf};

use thiserror::Error;

/// Widest slice of a source line shown in error context.
const CONTEXT_WIDTH: usize = 72;

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Location {
    /// Computes the line and column of a byte offset.
    ///
    /// Offsets past the end or inside a multi-byte character are clamped back
    /// to the nearest character boundary.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &input[..offset];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        Self {
            offset,
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A syntax error in the wrapper or the JSON array body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Error message.
    pub message: String,
    /// Where the error occurred.
    pub location: Location,
    /// The source line containing the error.
    pub line_text: String,
}

impl SyntaxError {
    /// Creates a syntax error at a byte offset of `input`.
    pub fn new(message: impl Into<String>, input: &str, offset: usize) -> Self {
        let location = Location::from_offset(input, offset);
        let line_start = input[..location.offset].rfind('\n').map_or(0, |idx| idx + 1);
        let line_end = input[line_start..]
            .find('\n')
            .map_or(input.len(), |idx| line_start + idx);
        Self {
            message: message.into(),
            location,
            line_text: input[line_start..line_end].trim_end_matches('\r').to_string(),
        }
    }

    /// Formats the error with the source line and a caret under the error column.
    ///
    /// Long lines are cut to a window around the column.
    pub fn format_with_context(&self) -> String {
        let chars: Vec<char> = self.line_text.chars().collect();
        let caret = self.location.column - 1;
        let start = caret.saturating_sub(CONTEXT_WIDTH / 2);
        let end = (start + CONTEXT_WIDTH).min(chars.len());
        let window: String = chars[start.min(end)..end].iter().collect();

        let mut result = String::new();
        result.push_str(&format!(
            "syntax error at {}: {}\n",
            self.location, self.message
        ));
        result.push_str(&format!("  {window}\n"));
        result.push_str(&format!("  {}^", " ".repeat(caret - start)));
        result
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_context())
    }
}

impl error::Error for SyntaxError {}

/// Errors raised while reading a search-data source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The wrapper or the JSON body is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The input holds no array literal.
    #[error("no array literal found; expected `pages = [...]` or a JSON array")]
    MissingArray,

    /// An entry parsed as JSON but is not a well-formed record.
    #[error("record {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the entry in the array.
        index: usize,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// Failed to read the source file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_counts_lines_and_chars() {
        let input = "pages = [\n  {\"n\":\"ä\"}, @";
        let offset = input.find('@').unwrap();
        let loc = Location::from_offset(input, offset);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 14);
    }

    #[test]
    fn location_clamps_past_end() {
        let loc = Location::from_offset("abc", 99);
        assert_eq!(loc.offset, 3);
        assert_eq!(loc.column, 4);
    }

    #[test]
    fn context_points_at_column() {
        let err = SyntaxError::new("unexpected character '@'", "pages @ [", 6);
        let display = err.to_string();
        assert!(display.contains("line 1, column 7"));
        assert!(display.contains("  pages @ ["));
        assert!(display.ends_with("        ^"));
    }

    #[test]
    fn context_windows_long_lines() {
        let line = format!("{}@{}", "a".repeat(200), "b".repeat(200));
        let err = SyntaxError::new("boom", &line, 200);
        let context = err.format_with_context();
        let shown = context.lines().nth(1).unwrap();
        assert!(shown.len() <= CONTEXT_WIDTH + 2);
        assert!(shown.contains('@'));
        let caret_line = context.lines().nth(2).unwrap();
        assert_eq!(caret_line.find('^'), shown.find('@'));
    }

    #[test]
    fn read_error_names_path() {
        let err = ParseError::ReadFile {
            path: PathBuf::from("docs/scripts/searchData.js"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("docs/scripts/searchData.js"));
    }
}
