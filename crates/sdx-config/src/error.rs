//! Errors raised while loading `.sdx.toml` files.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A `[[mirror]]` side is empty or nested below another directory.
    #[error("mirror prefix '{prefix}' in {path} must be a single top-level name")]
    InvalidMirrorPrefix {
        /// The rejected prefix.
        prefix: String,
        /// Config file that declared it.
        path: PathBuf,
    },

    /// A config file has no parent directory to resolve paths against.
    #[error("config file has no parent directory: {path}")]
    NoConfigDirectory {
        /// Path of the config file.
        path: PathBuf,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
