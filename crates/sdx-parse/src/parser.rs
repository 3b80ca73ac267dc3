//! Parser for search-data sources.
//!
//! Grammar:
//!
//! ```text
//! source  := decl? binding '=' array ';'? | array
//! decl    := 'var' | 'let' | 'const'
//! binding := ident ('.' ident)*
//! array   := <strict JSON array>
//! ```

use std::{fs, path::Path};

use sdx_model::{Record, SearchData};
use serde_json::{Deserializer, Value};
use tracing::debug;

use crate::{
    error::{ParseError, SyntaxError},
    lexer::{Lexer, Spanned, Token},
};

/// A parsed source: the binding it assigns and the raw array entries.
///
/// Entries are kept as JSON values so a validator can report every malformed
/// record instead of stopping at the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// The assigned binding, e.g. `pages` or `window.pages`. `None` for a bare array.
    pub binding: Option<String>,
    /// Array entries in source order.
    pub entries: Vec<Value>,
}

impl Source {
    /// Converts every entry into a typed record, failing on the first bad one.
    pub fn into_records(self) -> Result<SearchData, ParseError> {
        self.entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<Record>(entry)
                    .map_err(|source| ParseError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SearchData::new)
    }
}

/// Parses a search-data source into its binding and raw entries.
pub fn parse_source(input: &str) -> Result<Source, ParseError> {
    let mut lexer = Lexer::new(input);
    let Some(first) = lexer.next_token()? else {
        return Err(ParseError::MissingArray);
    };

    let (binding, array_start) = match first.token {
        Token::OpenBracket => (None, first.start),
        Token::Decl(_) => parse_assignment(input, &mut lexer, None)?,
        Token::Ident(name) => parse_assignment(input, &mut lexer, Some(name))?,
        other => return Err(unexpected(input, &other, first.start).into()),
    };

    let (entries, end) = parse_array(input, array_start)?;
    expect_end(input, end)?;

    debug!(
        entries = entries.len(),
        binding = binding.as_deref().unwrap_or("<none>"),
        "parsed search data source"
    );
    Ok(Source { binding, entries })
}

/// Parses a source and converts it straight into typed records.
pub fn parse_records(input: &str) -> Result<SearchData, ParseError> {
    parse_source(input)?.into_records()
}

/// Reads and parses a source file.
pub fn read_file(path: &Path) -> Result<Source, ParseError> {
    let contents = fs::read_to_string(path).map_err(|source| ParseError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read search data file");
    parse_source(&contents)
}

/// Parses `binding = [` after the first token, returning the binding and the bracket offset.
///
/// `first` is the identifier already consumed, or `None` if a declaration
/// keyword was consumed instead.
fn parse_assignment(
    input: &str,
    lexer: &mut Lexer<'_>,
    first: Option<String>,
) -> Result<(Option<String>, usize), ParseError> {
    let mut binding = match first {
        Some(name) => name,
        None => match next_or_eof(input, lexer, "expected binding name")? {
            Spanned {
                token: Token::Ident(name),
                ..
            } => name,
            Spanned { token, start } => {
                return Err(unexpected(input, &token, start).into());
            }
        },
    };

    loop {
        match next_or_eof(input, lexer, "expected '=' after binding")? {
            Spanned {
                token: Token::Dot, ..
            } => match next_or_eof(input, lexer, "expected name after '.'")? {
                Spanned {
                    token: Token::Ident(name),
                    ..
                } => {
                    binding.push('.');
                    binding.push_str(&name);
                }
                Spanned { token, start } => {
                    return Err(unexpected(input, &token, start).into());
                }
            },
            Spanned {
                token: Token::Assign,
                ..
            } => break,
            Spanned { token, start } => return Err(unexpected(input, &token, start).into()),
        }
    }

    match next_or_eof(input, lexer, "expected '[' after '='")? {
        Spanned {
            token: Token::OpenBracket,
            start,
        } => Ok((Some(binding), start)),
        Spanned { token, start } => Err(unexpected(input, &token, start).into()),
    }
}

/// Parses the JSON array starting at `start`, returning entries and the offset past `]`.
fn parse_array(input: &str, start: usize) -> Result<(Vec<Value>, usize), ParseError> {
    let rest = &input[start..];
    let mut stream = Deserializer::from_str(rest).into_iter::<Vec<Value>>();
    match stream.next() {
        Some(Ok(entries)) => Ok((entries, start + stream.byte_offset())),
        Some(Err(err)) => {
            let offset = start + json_error_offset(rest, &err);
            Err(SyntaxError::new(json_error_message(&err), input, offset).into())
        }
        None => Err(ParseError::MissingArray),
    }
}

/// Accepts an optional `;` and then end of input.
fn expect_end(input: &str, end: usize) -> Result<(), ParseError> {
    let mut lexer = Lexer::at(input, end);
    let mut token = lexer.next_token()?;
    if let Some(Spanned {
        token: Token::Semicolon,
        ..
    }) = token
    {
        token = lexer.next_token()?;
    }

    match token {
        None => Ok(()),
        Some(Spanned { start, .. }) => {
            Err(SyntaxError::new("unexpected input after array", input, start).into())
        }
    }
}

/// Returns the next token or an end-of-input error with `message`.
fn next_or_eof(input: &str, lexer: &mut Lexer<'_>, message: &str) -> Result<Spanned, SyntaxError> {
    lexer
        .next_token()?
        .ok_or_else(|| SyntaxError::new(format!("{message}, found end of input"), input, input.len()))
}

/// Builds an "unexpected token" error.
fn unexpected(input: &str, token: &Token, start: usize) -> SyntaxError {
    let found = match token {
        Token::Decl(word) | Token::Ident(word) => format!("'{word}'"),
        Token::Dot => "'.'".to_string(),
        Token::Assign => "'='".to_string(),
        Token::Semicolon => "';'".to_string(),
        Token::OpenBracket => "'['".to_string(),
    };
    SyntaxError::new(format!("unexpected {found}"), input, start)
}

/// Converts a serde_json line/column (1-based, byte columns) into a byte offset of `text`.
fn json_error_offset(text: &str, err: &serde_json::Error) -> usize {
    let line_start = text
        .split_inclusive('\n')
        .take(err.line().saturating_sub(1))
        .map(str::len)
        .sum::<usize>();
    (line_start + err.column().saturating_sub(1)).min(text.len())
}

/// Strips serde_json's own " at line X column Y" suffix.
fn json_error_message(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}
