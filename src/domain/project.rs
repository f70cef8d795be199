//! Project-level facts discovered around the file being linted

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Which of the two recognized configuration filenames was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    /// `phpstan.neon`
    Primary,
    /// `phpstan.neon.dist`
    Dist,
}

impl ConfigKind {
    /// Lookup order used at every ancestor directory
    pub const SEARCH_ORDER: [ConfigKind; 2] = [ConfigKind::Primary, ConfigKind::Dist];

    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigKind::Primary => "phpstan.neon",
            ConfigKind::Dist => "phpstan.neon.dist",
        }
    }
}

/// A PHPStan configuration file located by ancestor search
///
/// Resolved fresh for every command build and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    path: PathBuf,
    kind: ConfigKind,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, kind: ConfigKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    /// The configuration path with its filename stripped, trailing separator kept.
    ///
    /// The longer `phpstan.neon.dist` suffix is tried first so a `.dist` file
    /// does not leave a stray `.dist` behind.
    pub fn base_dir(&self) -> String {
        let full = self.path.to_string_lossy();
        for name in [ConfigKind::Dist.file_name(), ConfigKind::Primary.file_name()] {
            if let Some(base) = full.strip_suffix(name) {
                return base.to_string();
            }
        }
        full.into_owned()
    }
}

/// Opaque strictness level, passed through to the analyzer untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysisLevel(String);

impl AnalysisLevel {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composer's generated `vendor/autoload.php`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AutoloadFile(PathBuf);

impl AutoloadFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// The `parameters.paths` entries of a project configuration
///
/// Present-but-empty is kept distinct from absent: an empty list puts every
/// file out of scope, an absent one puts every file in scope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RestrictedPaths(Vec<String>);

impl RestrictedPaths {
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether `file_path` contains `base_dir` joined with any declared path
    pub fn contains_file(&self, base_dir: &str, file_path: &str) -> bool {
        self.iter()
            .any(|path| file_path.contains(&format!("{base_dir}{path}")))
    }
}
