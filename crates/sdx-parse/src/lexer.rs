//! Tokenizer for the script wrapper around the array literal.
//!
//! Only the assignment around the array is lexed here (`var window.pages =`
//! and the trailing `;`). The array body itself is strict JSON and is handed to
//! `serde_json` as soon as the opening bracket is seen.

use crate::error::SyntaxError;

/// A wrapper token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A declaration keyword: `var`, `let` or `const`.
    Decl(String),
    /// An identifier.
    Ident(String),
    /// `.`
    Dot,
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// `[`, the start of the array literal.
    OpenBracket,
}

/// A token with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Byte offset of the first character.
    pub start: usize,
}

/// Tokenizes wrapper text, one token at a time.
pub struct Lexer<'a> {
    /// The whole input.
    input: &'a str,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of the input, skipping a byte-order mark.
    pub fn new(input: &'a str) -> Self {
        let position = if input.starts_with('\u{feff}') {
            '\u{feff}'.len_utf8()
        } else {
            0
        };
        Self::at(input, position)
    }

    /// Creates a lexer that resumes at a byte offset.
    pub fn at(input: &'a str, position: usize) -> Self {
        Self { input, position }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> SyntaxError {
        SyntaxError::new(message, self.input, position)
    }

    /// Returns the next token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<Spanned>, SyntaxError> {
        self.skip_trivia()?;

        let start = self.position;
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '.' => {
                self.advance();
                Token::Dot
            }
            '=' => {
                self.advance();
                Token::Assign
            }
            ';' => {
                self.advance();
                Token::Semicolon
            }
            '[' => {
                self.advance();
                Token::OpenBracket
            }
            c if is_ident_start(c) => self.read_word(),
            other => {
                return Err(self.error_at(format!("unexpected character '{other}'"), start));
            }
        };

        Ok(Some(Spanned { token, start }))
    }

    /// Reads an identifier or declaration keyword.
    fn read_word(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if !is_ident_continue(ch) {
                break;
            }
            self.advance();
        }

        let word = &self.input[start..self.position];
        match word {
            "var" | "let" | "const" => Token::Decl(word.to_string()),
            _ => Token::Ident(word.to_string()),
        }
    }

    /// Skips whitespace, line comments and block comments.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            let rest = &self.input[self.position..];
            if rest.starts_with("//") {
                let len = rest.find('\n').unwrap_or(rest.len());
                self.position += len;
            } else if rest.starts_with("/*") {
                let Some(end) = rest[2..].find("*/") else {
                    return Err(self.error_at("unclosed block comment", self.position));
                };
                self.position += end + 4;
            } else if let Some(ch) = self.peek().filter(|c| c.is_whitespace()) {
                self.position += ch.len_utf8();
            } else {
                return Ok(());
            }
        }
    }

    /// Returns the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances past the current character.
    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += ch.len_utf8();
        }
    }
}

/// True for characters that may start a JavaScript identifier.
fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

/// True for characters that may continue a JavaScript identifier.
fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
