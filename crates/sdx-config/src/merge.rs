//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    CheckSettings, Config, ConfigError, InputSettings, Mirror, OutputSettings,
    parse::{RawCheckSettings, RawConfig, RawOutputSettings},
    resolve::resolve_input_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this file resolve against.
    fn dir(&self) -> Result<&Path, ConfigError> {
        self.path
            .parent()
            .ok_or_else(|| ConfigError::NoConfigDirectory {
                path: self.path.clone(),
            })
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to the working directory), global config last.
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Input path: first defined wins, resolved against its own file's directory
/// - Disabled rules: union of all files, first occurrence order
/// - Mirror pairs: concatenated closest first, duplicates dropped
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let Some(first) = configs.first() else {
        return Ok(Config::default());
    };

    let config = Config {
        input: merge_input(configs)?,
        check: merge_check(configs),
        output: merge_output(configs),
        mirrors: merge_mirrors(configs)?,
        config_root: Some(first.dir()?.to_path_buf()),
    };
    debug!(files = configs.len(), ?config, "merged configuration");
    Ok(config)
}

/// Merges `[input]`, resolving the winning path against its file.
fn merge_input(configs: &[ParsedConfig]) -> Result<InputSettings, ConfigError> {
    let mut result = InputSettings::default();

    for parsed in configs.iter().rev() {
        let Some(ref input) = parsed.config.input else {
            continue;
        };
        if let Some(ref path) = input.path {
            result.path = Some(resolve_input_path(path, parsed.dir()?)?);
        }
        if let Some(ref binding) = input.binding {
            result.binding.clone_from(binding);
        }
    }

    Ok(result)
}

/// Merges `[check]`.
fn merge_check(configs: &[ParsedConfig]) -> CheckSettings {
    let mut result = CheckSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref check) = parsed.config.check {
            apply_raw_check(&mut result, check);
        }
    }

    // Union in precedence order.
    for parsed in configs {
        let disabled = parsed
            .config
            .check
            .as_ref()
            .and_then(|c| c.disable.as_ref());
        for code in disabled.into_iter().flatten() {
            if !result.disable.contains(code) {
                result.disable.push(code.clone());
            }
        }
    }

    result
}

/// Applies raw check scalars, overwriting any present values.
fn apply_raw_check(result: &mut CheckSettings, raw: &RawCheckSettings) {
    if let Some(v) = raw.warnings_as_errors {
        result.warnings_as_errors = v;
    }
}

/// Merges `[output]`.
fn merge_output(configs: &[ParsedConfig]) -> OutputSettings {
    let mut result = OutputSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref output) = parsed.config.output {
            apply_raw_output(&mut result, output);
        }
    }

    result
}

/// Applies raw output settings.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.pretty_json {
        result.pretty_json = v;
    }
}

/// Concatenates `[[mirror]]` entries, closest file first.
///
/// Each side must name a single top-level link component.
fn merge_mirrors(configs: &[ParsedConfig]) -> Result<Vec<Mirror>, ConfigError> {
    let mut result: Vec<Mirror> = Vec::new();

    for parsed in configs {
        for raw in parsed.config.mirror.iter().flatten() {
            for prefix in [&raw.left, &raw.right] {
                if prefix.is_empty() || prefix.contains('/') {
                    return Err(ConfigError::InvalidMirrorPrefix {
                        prefix: prefix.clone(),
                        path: parsed.path.clone(),
                    });
                }
            }
            let mirror = Mirror {
                left: raw.left.clone(),
                right: raw.right.clone(),
            };
            if !result.contains(&mirror) {
                result.push(mirror);
            }
        }
    }

    Ok(result)
}
