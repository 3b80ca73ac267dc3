//! Syntax highlighting and terminal colors for sdx.
//!
//! Highlights the TOML that sdx prints and styles headers, diagnostics and
//! status lines.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including the two-face extras for TOML.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Selected theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML, as printed by `sdx config` and `sdx init`.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the given syntax, looked up by extension then name.
    ///
    /// Unknown syntaxes fall back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self.find_syntax(syntax_name);
        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Resolves a syntax by extension or name.
    fn find_syntax(&self, syntax_name: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Magenta text (for symbol kinds).
    pub const MAGENTA: &str = "\x1b[35m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given escape codes and a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Formats a record kind tag (magenta).
pub fn kind(text: &str) -> String {
    paint(&[colors::MAGENTA], text)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Formats text as a warning (bold yellow).
pub fn warning(text: &str) -> String {
    paint(&[colors::BOLD, colors::YELLOW], text)
}

/// Formats text as an error (bold red).
pub fn error(text: &str) -> String {
    paint(&[colors::BOLD, colors::RED], text)
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Indents every non-empty line by two spaces.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighter_toml() {
        let hl = Highlighter::new();
        let output = hl.highlight_toml("[input]\nbinding = \"pages\"\n");
        assert!(output.contains("\x1b["));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn test_highlight_by_extension() {
        let hl = Highlighter::new();
        let js = hl.highlight("pages = [];", "js");
        assert!(js.contains("pages"));
        assert!(js.ends_with(colors::RESET));
    }

    #[test]
    fn test_unknown_syntax_is_plain_text() {
        let hl = Highlighter::new();
        let output = hl.highlight("just text", "no-such-syntax");
        assert!(output.contains("just text"));
    }

    #[test]
    fn test_syntaxes_available() {
        let ss = extra_syntaxes();
        for ext in ["toml", "js"] {
            assert!(ss.find_syntax_by_extension(ext).is_some(), "{ext}");
        }
    }

    #[test]
    fn test_styles_wrap_text() {
        assert_eq!(
            header("Kinds"),
            format!("{}{}Kinds{}", colors::BOLD, colors::CYAN, colors::RESET)
        );
        assert_eq!(dim("x"), format!("{}x{}", colors::DIM, colors::RESET));
        assert!(error("bad").contains(colors::RED));
        assert!(warning("meh").contains(colors::YELLOW));
        assert!(kind("def").contains(colors::MAGENTA));
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule(3), dim("───"));
    }

    #[test]
    fn test_indent_content() {
        assert_eq!(indent_content("a\n\nb"), "  a\n\n  b");
    }
}
