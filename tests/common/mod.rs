//! Shared test utilities for building PHP project layouts

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway PHP project on disk
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A Composer install: `composer.json` plus `vendor/autoload.php`
    pub fn with_composer(self) -> Self {
        self.write("composer.json", "{\"autoload\": {\"psr-4\": {\"App\\\\\": \"src/\"}}}\n");
        self.write("vendor/autoload.php", "<?php\n");
        self
    }

    pub fn with_config(self, name: &str, content: &str) -> Self {
        self.write(name, content);
        self
    }

    /// Create a PHP file and return its absolute path
    pub fn php_file(&self, relative: &str) -> PathBuf {
        self.write(relative, "<?php\n")
    }

    pub fn autoload_path(&self) -> String {
        self.root()
            .join("vendor/autoload.php")
            .to_string_lossy()
            .into_owned()
    }
}
