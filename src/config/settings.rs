//! Linter settings supplied by the editor

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::linter::split_args;

/// Settings bundle for one lint request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterSettings {
    /// Cosmetic only, kept for compatibility with editor settings files
    #[serde(default = "default_enable_cells")]
    pub enable_cells: bool,

    /// Editor syntax scope the linter is attached to
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Inject `--autoload-file` when a Composer autoloader is found
    #[serde(default = "default_use_composer_autoload")]
    pub use_composer_autoload: bool,

    /// Extra analyzer arguments, spliced in at `${args}`
    #[serde(default)]
    pub args: UserArgs,
}

fn default_enable_cells() -> bool {
    true
}

fn default_selector() -> String {
    "source.php".to_string()
}

fn default_use_composer_autoload() -> bool {
    true
}

impl Default for LinterSettings {
    fn default() -> Self {
        Self {
            enable_cells: default_enable_cells(),
            selector: default_selector(),
            use_composer_autoload: default_use_composer_autoload(),
            args: UserArgs::default(),
        }
    }
}

impl LinterSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: LinterSettings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }

    /// The user's arguments as individual tokens
    pub fn user_args(&self) -> Vec<String> {
        self.args.to_vec()
    }
}

/// User arguments, given either as a list or as one shell-style string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserArgs {
    List(Vec<String>),
    Line(String),
}

impl Default for UserArgs {
    fn default() -> Self {
        UserArgs::List(Vec::new())
    }
}

impl UserArgs {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            UserArgs::List(args) => args.clone(),
            UserArgs::Line(line) => split_args(line),
        }
    }
}

impl From<Vec<String>> for UserArgs {
    fn from(args: Vec<String>) -> Self {
        UserArgs::List(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let settings: LinterSettings = toml::from_str("").unwrap();
        assert!(settings.enable_cells);
        assert!(settings.use_composer_autoload);
        assert_eq!(settings.selector, "source.php");
        assert!(settings.user_args().is_empty());
    }

    #[test]
    fn test_args_as_list() {
        let settings: LinterSettings =
            toml::from_str(r#"args = ["--memory-limit=1G", "-c", "custom.neon"]"#).unwrap();
        assert_eq!(
            settings.user_args(),
            vec!["--memory-limit=1G", "-c", "custom.neon"]
        );
    }

    #[test]
    fn test_args_as_line() {
        let settings: LinterSettings = toml::from_str(
            r#"
use_composer_autoload = false
args = "--memory-limit=1G -c 'my config.neon'"
"#,
        )
        .unwrap();
        assert!(!settings.use_composer_autoload);
        assert_eq!(
            settings.user_args(),
            vec!["--memory-limit=1G", "-c", "my config.neon"]
        );
    }
}
