//! Path resolution for configured input files.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured input path.
///
/// Handles three cases:
/// - Tilde paths (`~/site/searchData.js`) are expanded to the home directory
/// - Relative paths are joined onto `config_dir`
/// - Absolute paths are returned as-is
///
/// The file is not required to exist; `Config::validate` reports missing inputs.
pub fn resolve_input_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_input_path("docs/searchData.js", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/docs/searchData.js"));
    }

    #[test]
    fn test_resolve_dot_relative_path() {
        let resolved = resolve_input_path("./searchData.js", Path::new("/project")).unwrap();
        assert_eq!(resolved, Path::new("/project").join("./searchData.js"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_input_path("/srv/site/searchData.js", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/site/searchData.js"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = home_dir().unwrap();
        let resolved = resolve_input_path("~/site/searchData.js", Path::new("/project")).unwrap();
        assert_eq!(resolved, home.join("site/searchData.js"));
    }

    #[test]
    fn test_expand_bare_tilde() {
        assert_eq!(expand_tilde("~").unwrap(), home_dir().unwrap());
    }

    #[test]
    fn test_tilde_in_middle_is_literal() {
        assert_eq!(expand_tilde("a/~/b").unwrap(), PathBuf::from("a/~/b"));
    }
}
