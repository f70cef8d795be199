//! Inspect command implementation

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use phpstan_lint::composer::find_autoload;
use phpstan_lint::config::{find_configuration, project_level, project_paths};
use phpstan_lint::{AnalysisLevel, AutoloadFile, ConfigFile, RestrictedPaths};

#[derive(Serialize)]
struct Inspection {
    config: Option<ConfigFile>,
    base_dir: Option<String>,
    level: Option<AnalysisLevel>,
    paths: Option<RestrictedPaths>,
    autoload: Option<AutoloadFile>,
}

/// Show what the linter resolves for `file`
pub fn inspect_command(file: &Path) -> Result<()> {
    let config = find_configuration(file);

    let inspection = Inspection {
        base_dir: config.as_ref().map(ConfigFile::base_dir),
        level: project_level(config.as_ref())?,
        paths: project_paths(config.as_ref())?,
        autoload: find_autoload(file),
        config,
    };

    println!("{}", serde_json::to_string_pretty(&inspection)?);
    Ok(())
}
