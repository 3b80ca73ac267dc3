//! The starter `.sdx.toml` written by `sdx init`.
//!
//! `templates/config.toml` stays valid TOML so tests can parse it; users get
//! every setting commented out.

/// Starter configuration with every setting active.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the starter configuration with every setting commented out.
pub fn local_template() -> String {
    comment_out(LOCAL_TEMPLATE)
}

/// Prefixes each setting and table header with `# `.
///
/// Blank lines and existing comments pass through untouched.
fn comment_out(toml: &str) -> String {
    toml.lines()
        .map(|line| match line {
            "" => String::new(),
            l if l.starts_with('#') => l.to_string(),
            l => format!("# {l}"),
        })
        .fold(String::with_capacity(toml.len() * 2), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn starter_config_is_valid_toml() {
        let config = parse_config(LOCAL_TEMPLATE).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(config.mirror.map(|m| m.len()), Some(1));
    }

    #[test]
    fn written_template_sets_nothing() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.root.is_none());
        assert!(config.input.is_none());
        assert!(config.mirror.is_none());
    }

    #[test]
    fn mirror_tables_are_commented_out() {
        let toml = "# Paired API trees.\n[[mirror]]\n\nleft = \"_empty_\"\n";
        assert_eq!(
            comment_out(toml),
            "# Paired API trees.\n# [[mirror]]\n\n# left = \"_empty_\"\n"
        );
    }
}
