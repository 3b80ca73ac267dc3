//! Configuration system for sdx.
//!
//! sdx uses TOML configuration files named `.sdx.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.sdx.toml` files
//! found, then loading `~/.sdx.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCheckSettings, RawConfig, RawInputSettings, RawMirror, RawOutputSettings,
    parse_config_file, parse_config_str,
};
pub use resolve::resolve_input_path;
use sdx_check::{CheckOptions, Rule};
use sdx_parse::DEFAULT_BINDING;
use serde::Serialize;
pub use templates::local_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for sdx.
///
/// This represents the fully resolved configuration after merging all discovered `.sdx.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input settings.
    pub input: InputSettings,
    /// Validation settings.
    pub check: CheckSettings,
    /// Output settings.
    pub output: OutputSettings,
    /// Mirror pairs for `sdx compare`.
    pub mirrors: Vec<Mirror>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sdx.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An input path that doesn't exist or isn't a file
    /// - Disabled rule codes that name no rule
    /// - Mirror pairs comparing a prefix with itself
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Builds checker options from `[check]`. Unknown rule codes are skipped.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            disabled: self
                .check
                .disable
                .iter()
                .filter_map(|code| code.parse::<Rule>().ok())
                .collect(),
            warnings_as_errors: self.check.warnings_as_errors,
        }
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            input: &self.input,
            check: &self.check,
            output: &self.output,
            mirror: &self.mirrors,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// The `[input]` section.
#[derive(Debug, Clone, Serialize)]
pub struct InputSettings {
    /// Resolved manifest path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Binding name written by `fmt`.
    pub binding: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: None,
            binding: DEFAULT_BINDING.to_string(),
        }
    }
}

/// The `[check]` section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSettings {
    /// Rule codes to disable, as written.
    pub disable: Vec<String>,
    /// Report warnings as errors.
    pub warnings_as_errors: bool,
}

/// The `[output]` section.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSettings {
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// A pair of top-level prefixes expected to hold the same API tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mirror {
    /// Left prefix.
    pub left: String,
    /// Right prefix.
    pub right: String,
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Input settings.
    input: &'a InputSettings,
    /// Validation settings.
    check: &'a CheckSettings,
    /// Output settings.
    output: &'a OutputSettings,
    /// Mirror pairs.
    mirror: &'a [Mirror],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.input.path.is_none());
        assert_eq!(config.input.binding, "pages");
        assert!(config.check.disable.is_empty());
        assert!(!config.check.warnings_as_errors);
        assert!(config.output.pretty_json);
        assert!(config.mirrors.is_empty());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_check_options_skip_unknown_codes() {
        let mut config = Config::default();
        config.check.disable = vec!["scope-mismatch".into(), "bogus".into()];
        config.check.warnings_as_errors = true;

        let options = config.check_options();
        assert_eq!(
            options.disabled.into_iter().collect::<Vec<_>>(),
            vec![Rule::ScopeMismatch]
        );
        assert!(options.warnings_as_errors);
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.input.path = Some(PathBuf::from("/site/searchData.js"));
        config.mirrors.push(Mirror {
            left: "_empty_".into(),
            right: "tests".into(),
        });
        let toml = config.settings_to_toml();

        assert!(toml.contains("[input]"));
        assert!(toml.contains("path = \"/site/searchData.js\""));
        assert!(toml.contains("binding = \"pages\""));
        assert!(toml.contains("[check]"));
        assert!(toml.contains("warnings_as_errors = false"));
        assert!(toml.contains("pretty_json = true"));
        assert!(toml.contains("[[mirror]]"));

        let parsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(parsed.mirror.unwrap()[0].right, "tests");
    }
}
