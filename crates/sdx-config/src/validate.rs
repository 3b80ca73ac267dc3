//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use sdx_check::Rule;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The input path does not exist.
    InputMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The input path exists but is not a file.
    InputNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// A disabled rule code names no rule.
    UnknownRule {
        /// The unrecognized code.
        code: String,
    },
    /// A mirror pair compares a prefix with itself.
    MirrorSidesIdentical {
        /// The repeated prefix.
        prefix: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMissing { path } => write!(f, "input path does not exist: {path}"),
            Self::InputNotFile { path } => write!(f, "input path is not a file: {path}"),
            Self::UnknownRule { code } => write!(f, "disabled rule '{code}' is not a known rule"),
            Self::MirrorSidesIdentical { prefix } => {
                write!(f, "mirror compares '{prefix}' with itself")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref path) = config.input.path {
        if !path.exists() {
            warnings.push(ConfigWarning::InputMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::InputNotFile {
                path: path.display().to_string(),
            });
        }
    }

    for code in &config.check.disable {
        if code.parse::<Rule>().is_err() {
            warnings.push(ConfigWarning::UnknownRule { code: code.clone() });
        }
    }

    for mirror in &config.mirrors {
        if mirror.left == mirror.right {
            warnings.push(ConfigWarning::MirrorSidesIdentical {
                prefix: mirror.left.clone(),
            });
        }
    }

    warnings
}
