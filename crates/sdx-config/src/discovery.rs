//! Configuration file discovery.
//!
//! Discovers `.sdx.toml` files by walking up the directory tree from a starting
//! point, then appending the global `~/.sdx.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sdx.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global
/// (`~/.sdx.toml`) last. A file with `root = true` ends the walk and suppresses
/// the global config.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    debug!(count = configs.len(), ?configs, "discovered config files");
    configs
}

/// Returns the path to the global configuration file (`~/.sdx.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn nothing_to_discover() {
        let tree = TestDir::new();
        let cwd = tree.dir("site/docs/scripts");
        assert!(local(&discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn closest_file_comes_first() {
        let tree = TestDir::new();
        let outer = tree.config("", "[output]\npretty_json = false\n");
        let site = tree.config("site", "[input]\npath = \"scripts/searchData.js\"\n");
        let docs = tree.config("site/docs", "[check]\ndisable = \"empty-name\"\n");
        let cwd = tree.dir("site/docs/scripts");

        assert_eq!(
            local(&discover_config_files(&cwd)),
            vec![&docs, &site, &outer]
        );
    }

    #[test]
    fn cwd_itself_is_searched() {
        let tree = TestDir::new();
        let config = tree.config("", "");
        assert_eq!(local(&discover_config_files(tree.path())), vec![&config]);
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tree = TestDir::new();
        fs::create_dir_all(tree.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = tree.dir("site");
        assert!(local(&discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn root_config_ends_the_walk() {
        let tree = TestDir::new();
        tree.config("", "");
        let site = tree.config("site", "root = true\n");
        let docs = tree.config("site/docs", "");
        let cwd = tree.dir("site/docs/api");

        // No global config either: the result is exact.
        assert_eq!(discover_config_files(&cwd), vec![docs, site]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let tree = TestDir::new();
        let outer = tree.config("", "");
        let site = tree.config("site", "root = false\n");
        let cwd = tree.dir("site/docs");

        assert_eq!(local(&discover_config_files(&cwd)), vec![&site, &outer]);
    }

    #[test]
    fn global_path_is_in_home() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/srv/site/.sdx.toml")));
    }
}
