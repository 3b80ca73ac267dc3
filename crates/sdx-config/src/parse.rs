//! Configuration file parsing.
//!
//! Parses individual `.sdx.toml` files into `RawConfig` structures that keep
//! every field optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Input section.
    pub input: Option<RawInputSettings>,
    /// Check section.
    pub check: Option<RawCheckSettings>,
    /// Output section.
    pub output: Option<RawOutputSettings>,
    /// Mirror pairs, in file order.
    pub mirror: Option<Vec<RawMirror>>,
}

/// Raw `[input]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawInputSettings {
    /// Manifest path, relative to the config file's directory.
    pub path: Option<String>,
    /// Binding name written by `fmt`.
    pub binding: Option<String>,
}

/// Raw `[check]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCheckSettings {
    /// Rule codes to disable. Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub disable: Option<Vec<String>>,
    /// Report warnings as errors.
    pub warnings_as_errors: Option<bool>,
}

/// Raw `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawOutputSettings {
    /// Indent JSON output.
    pub pretty_json: Option<bool>,
}

/// Raw `[[mirror]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMirror {
    /// Left top-level prefix.
    pub left: String,
    /// Right top-level prefix.
    pub right: String,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
