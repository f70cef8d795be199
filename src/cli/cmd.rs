//! Cmd command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use phpstan_lint::config::{LinterSettings, UserArgs};
use phpstan_lint::linter::{Linter, TracingReporter};

pub struct CmdOptions {
    pub settings: Option<PathBuf>,
    pub extra_args: Vec<String>,
    pub no_composer_autoload: bool,
    pub expand: bool,
}

/// Print the command for `file` as a JSON array
pub fn cmd_command(file: &Path, options: CmdOptions) -> Result<()> {
    let mut settings = match &options.settings {
        Some(path) => LinterSettings::from_file(path)?,
        None => LinterSettings::default(),
    };

    if options.no_composer_autoload {
        settings.use_composer_autoload = false;
    }

    if !options.extra_args.is_empty() {
        let mut args = settings.user_args();
        args.extend(options.extra_args);
        settings.args = UserArgs::from(args);
    }

    let linter = Linter::new(TracingReporter);
    let command = linter
        .get_cmd(file, &settings)
        .with_context(|| format!("Failed to build PHPStan command for {}", file.display()))?;

    if command.is_skip() {
        debug!("Skipping {}", file.display());
    }

    let output = if options.expand {
        serde_json::to_string(&command.expand(&settings.user_args(), &file.to_string_lossy()))?
    } else {
        serde_json::to_string(&command)?
    };

    println!("{}", output);
    Ok(())
}
