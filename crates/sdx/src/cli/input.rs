//! Locating, reading and parsing the manifest a command works on.

use std::{
    borrow::Cow,
    fmt, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sdx_model::SearchData;
use sdx_parse::{BUNDLED_SOURCE, ParseError, Source, bundled, parse_source, read_file};
use tracing::debug;

use super::{args::InputArgs, context::CommandContext, exit_codes};

/// Where a manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The manifest shipped with sdx.
    Bundled,
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("<bundled>"),
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl CommandContext {
    /// Resolves which manifest the arguments select.
    ///
    /// `--bundled` or an explicit FILE wins, then `[input].path`.
    pub fn origin(&self, args: &InputArgs) -> Result<Origin, ExitCode> {
        if args.bundled {
            return Ok(Origin::Bundled);
        }
        match (&args.file, &self.config.input.path) {
            (Some(file), _) if file == Path::new("-") => Ok(Origin::Stdin),
            (Some(file), _) => Ok(Origin::File(self.cwd.join(file))),
            (None, Some(configured)) => Ok(Origin::File(configured.clone())),
            (None, None) => {
                eprintln!("error: no input manifest");
                eprintln!("pass FILE or --bundled, or set [input].path in .sdx.toml");
                Err(exit_codes::input_failure())
            }
        }
    }

    /// Reads and parses the selected manifest into raw entries.
    pub fn load_source(&self, args: &InputArgs) -> Result<(Origin, Source), ExitCode> {
        let origin = self.origin(args)?;
        let result = match &origin {
            Origin::Bundled => parse_source(BUNDLED_SOURCE),
            Origin::Stdin => read_stdin().and_then(|text| parse_source(&text)),
            Origin::File(path) => read_file(path),
        };
        match result {
            Ok(source) => {
                debug!(%origin, entries = source.entries.len(), "loaded manifest");
                Ok((origin, source))
            }
            Err(e) => Err(input_failure(&origin, &e)),
        }
    }

    /// Reads the selected manifest and types every record.
    pub fn load_data(&self, args: &InputArgs) -> Result<Cow<'static, SearchData>, ExitCode> {
        if self.origin(args)? == Origin::Bundled {
            return Ok(Cow::Borrowed(bundled()));
        }
        let (origin, source) = self.load_source(args)?;
        into_data(&origin, source).map(Cow::Owned)
    }
}

/// Types every entry of a parsed source.
///
/// Fails on the first malformed record; `sdx check` reports all of them.
pub fn into_data(origin: &Origin, source: Source) -> Result<SearchData, ExitCode> {
    source.into_records().map_err(|e| {
        let code = input_failure(origin, &e);
        eprintln!("run 'sdx check' to list every problem");
        code
    })
}

/// Reads all of standard input.
fn read_stdin() -> Result<String, ParseError> {
    io::read_to_string(io::stdin()).map_err(|source| ParseError::ReadFile {
        path: PathBuf::from("-"),
        source,
    })
}

/// Prints a parse failure and returns the input failure status.
fn input_failure(origin: &Origin, err: &ParseError) -> ExitCode {
    eprintln!("error: {origin}: {err}");
    exit_codes::input_failure()
}
