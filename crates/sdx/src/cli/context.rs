//! The working directory and configuration a command runs against.

use std::{env, path::PathBuf, process::ExitCode};

use sdx_config::{Config, discover_config_files};

/// State built once per invocation and shared by every command.
pub struct CommandContext {
    /// Current working directory; relative FILE arguments resolve against it.
    pub cwd: PathBuf,
    /// `.sdx.toml` files that were merged, closest first.
    pub config_files: Vec<PathBuf>,
    /// Merged configuration, or the defaults when no file was found.
    pub config: Config,
}

impl CommandContext {
    /// Discovers and merges configuration for the current directory.
    ///
    /// An unreadable or invalid `.sdx.toml` is fatal.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir()?;
        let config_files = discover_config_files(&cwd);
        let config = Config::load_from_files(&config_files).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self {
            cwd,
            config_files,
            config,
        })
    }

    /// Builds a context without reading any configuration.
    ///
    /// `init` uses this so it can replace a broken config file.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        Ok(Self::with_config(current_dir()?, Config::default()))
    }

    /// A context over `cwd` with an already merged configuration.
    pub fn with_config(cwd: PathBuf, config: Config) -> Self {
        Self {
            cwd,
            config_files: Vec::new(),
            config,
        }
    }
}

/// Returns the current working directory, reporting failure.
fn current_dir() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
