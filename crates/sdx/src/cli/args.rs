//! Clap argument definitions for the `sdx` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sdx_check::Rule;
use sdx_model::Kind;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sdx", version)]
#[command(about = "Inspect, validate and reformat documentation search-data manifests")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the manifest from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Manifest to read; `-` reads stdin [default: input.path from .sdx.toml]
    pub file: Option<PathBuf>,

    /// Use the manifest shipped with sdx
    #[arg(long, conflicts_with = "file")]
    pub bundled: bool,
}

/// Arguments for `sdx check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Disable a rule (repeatable)
    #[arg(long = "disable", value_name = "RULE")]
    pub disable: Vec<Rule>,

    /// Output diagnostics as JSON
    #[arg(long)]
    pub json: bool,

    /// List the rules and exit
    #[arg(long, conflicts_with_all = ["file", "bundled"])]
    pub rules: bool,
}

/// Arguments for `sdx stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sdx ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Only records of this kind (repeatable)
    #[arg(short = 'k', long = "kind", value_name = "KIND")]
    pub kinds: Vec<Kind>,

    /// Only records with exactly this scope path
    #[arg(short = 'd', long)]
    pub scope: Option<String>,

    /// Only records with exactly this name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Only records whose link matches this glob
    #[arg(short = 'g', long, value_name = "GLOB")]
    pub link_glob: Option<String>,

    /// Show title and scope too
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sdx scopes`.
#[derive(Args, Debug, Clone)]
pub struct ScopesCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sdx compare`.
#[derive(Args, Debug, Clone)]
pub struct CompareCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Left top-level prefix [default: configured or detected mirrors]
    #[arg(long, requires = "right")]
    pub left: Option<String>,

    /// Right top-level prefix
    #[arg(long, requires = "left")]
    pub right: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sdx fmt`.
#[derive(Args, Debug, Clone)]
pub struct FmtCommand {
    #[command(flatten)]
    /// Manifest selection.
    pub input: InputArgs,

    /// Write a bare JSON array instead of a script
    #[arg(long)]
    pub json: bool,

    /// Indent JSON output [default: output.pretty_json from .sdx.toml]
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Binding to assign the array to [default: the input's binding]
    #[arg(long, conflicts_with = "json")]
    pub binding: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for `sdx init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sdx` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a manifest and report rule violations
    #[command(after_help = "\
EXIT STATUS:
  0  no errors (warnings allowed unless --strict)
  1  at least one error, or invalid arguments or configuration
  2  the manifest could not be read or parsed")]
    Check(CheckCommand),

    /// Summarize records by kind and scope
    Stats(StatsCommand),

    /// List records matching exact filters
    #[command(after_help = "\
EXAMPLES:
  sdx ls --bundled -k object
  sdx ls --bundled -d '<empty>/holes$' -l
  sdx ls --bundled -g 'tests/values*'")]
    Ls(LsCommand),

    /// Show API records grouped by scope path
    Scopes(ScopesCommand),

    /// Check that two API trees mirror each other
    Compare(CompareCommand),

    /// Rewrite a manifest in canonical form
    Fmt(FmtCommand),

    /// Initialize sdx configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// True if the command reads `.sdx.toml`.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub const fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ls_filters_parse_kinds() {
        let cli = Cli::try_parse_from(["sdx", "ls", "--bundled", "-k", "def", "-k", "val"]).unwrap();
        let Commands::Ls(cmd) = cli.command else {
            panic!("expected ls");
        };
        assert_eq!(cmd.kinds, vec![Kind::Def, Kind::Val]);
        assert!(cmd.input.bundled);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["sdx", "ls", "-k", "trait"]).is_err());
    }

    #[test]
    fn check_disable_parses_rules() {
        let cli =
            Cli::try_parse_from(["sdx", "check", "x.js", "--disable", "scope-mismatch"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.disable, vec![Rule::ScopeMismatch]);
        assert_eq!(cmd.input.file, Some(PathBuf::from("x.js")));
    }

    #[test]
    fn bundled_conflicts_with_file() {
        assert!(Cli::try_parse_from(["sdx", "stats", "x.js", "--bundled"]).is_err());
    }

    #[test]
    fn compare_sides_go_together() {
        assert!(Cli::try_parse_from(["sdx", "compare", "--left", "a"]).is_err());
        assert!(Cli::try_parse_from(["sdx", "compare", "--left", "a", "--right", "b"]).is_ok());
    }

    #[test]
    fn init_skips_config() {
        let cli = Cli::try_parse_from(["sdx", "init"]).unwrap();
        assert!(!cli.command.needs_config());
    }
}
