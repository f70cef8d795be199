//! PHPStan project configuration discovery and reading
//!
//! The configuration file (`phpstan.neon` or `phpstan.neon.dist`) is located by
//! walking up from the linted file. Two things are read out of it: the
//! strictness level (a plain line scan, see [`level`]) and the restricted
//! analysis paths (sanitize-then-parse, see [`neon`]).

pub mod level;
pub mod neon;
mod settings;

pub use level::{project_level, user_level_args};
pub use neon::{parse_document, project_paths, sanitize};
pub use settings::{LinterSettings, UserArgs};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ConfigFile, ConfigKind};

/// Error type for reading project configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported tag '{tag}' in config file {path}")]
    UnsupportedTag { path: PathBuf, tag: String },

    #[error("Invalid parameters.paths in config file {path}: {reason}")]
    InvalidPaths { path: PathBuf, reason: String },
}

/// Find the nearest configuration file above `file_path`.
///
/// Starts in the file's own directory. At each level `phpstan.neon` wins over
/// `phpstan.neon.dist`. Returns `None` for an empty path or when the
/// filesystem root is passed without a hit.
pub fn find_configuration(file_path: &Path) -> Option<ConfigFile> {
    let start = file_path.parent()?;

    for dir in start.ancestors() {
        for kind in ConfigKind::SEARCH_ORDER {
            let candidate = dir.join(kind.file_name());
            if candidate.is_file() {
                debug!("Found PHPStan config {:?}", candidate);
                return Some(ConfigFile::new(candidate, kind));
            }
        }
    }

    None
}

/// Read a configuration file that the locator already confirmed exists
pub(crate) fn read_config(config: &ConfigFile) -> Result<String, ConfigError> {
    std::fs::read_to_string(config.path()).map_err(|source| ConfigError::Read {
        path: config.path().to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_configuration_in_same_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("phpstan.neon"), "").unwrap();

        let found = find_configuration(&tmp.path().join("Foo.php")).unwrap();
        assert_eq!(found.path(), tmp.path().join("phpstan.neon"));
        assert_eq!(found.kind(), ConfigKind::Primary);
    }

    #[test]
    fn test_find_configuration_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("src/Domain/Model");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("phpstan.neon.dist"), "").unwrap();

        let found = find_configuration(&nested.join("User.php")).unwrap();
        assert_eq!(found.path(), tmp.path().join("phpstan.neon.dist"));
        assert_eq!(found.kind(), ConfigKind::Dist);
    }

    #[test]
    fn test_primary_wins_over_dist() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("phpstan.neon"), "").unwrap();
        fs::write(tmp.path().join("phpstan.neon.dist"), "").unwrap();

        let found = find_configuration(&tmp.path().join("Foo.php")).unwrap();
        assert_eq!(found.kind(), ConfigKind::Primary);
    }

    #[test]
    fn test_nearest_config_wins() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("packages/billing");
        fs::create_dir_all(pkg.join("src")).unwrap();
        fs::write(tmp.path().join("phpstan.neon"), "").unwrap();
        fs::write(pkg.join("phpstan.neon.dist"), "").unwrap();

        let found = find_configuration(&pkg.join("src/Invoice.php")).unwrap();
        assert_eq!(found.path(), pkg.join("phpstan.neon.dist"));
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("phpstan.neon")).unwrap();
        fs::write(tmp.path().join("phpstan.neon.dist"), "").unwrap();

        let found = find_configuration(&tmp.path().join("Foo.php")).unwrap();
        assert_eq!(found.path(), tmp.path().join("phpstan.neon.dist"));
        assert_eq!(found.kind(), ConfigKind::Dist);
    }

    #[test]
    fn test_empty_path_yields_none() {
        assert!(find_configuration(Path::new("")).is_none());
    }

    #[test]
    fn test_root_path_yields_none() {
        assert!(find_configuration(Path::new("/")).is_none());
    }
}
