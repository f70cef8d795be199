//! Composer autoloader discovery

use std::path::Path;

use tracing::debug;

use crate::AutoloadFile;

/// Generated bootstrap, relative to the project root
pub const AUTOLOAD_PATH: &str = "vendor/autoload.php";

/// Either one marks a directory as a Composer project root
pub const MANIFEST_FILES: [&str; 2] = ["composer.json", "composer.lock"];

/// Find the nearest Composer autoloader above `file_path`.
///
/// A directory only counts when `vendor/autoload.php` exists *and* a
/// `composer.json` or `composer.lock` sits next to `vendor/`.
pub fn find_autoload(file_path: &Path) -> Option<AutoloadFile> {
    let start = file_path.parent()?;

    for dir in start.ancestors() {
        let autoload = dir.join(AUTOLOAD_PATH);
        if !autoload.is_file() {
            continue;
        }

        if MANIFEST_FILES.iter().any(|name| dir.join(name).is_file()) {
            debug!("Found Composer autoloader {:?}", autoload);
            return Some(AutoloadFile::new(autoload));
        }
    }

    None
}
