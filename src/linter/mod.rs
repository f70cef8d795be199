//! PHPStan command construction
//!
//! [`Linter::get_cmd`] is the entry point the editor calls once per lint
//! request. It resolves the project configuration once, builds the command
//! template and then checks the file against `parameters.paths`. An empty
//! [`CommandVector`] means the run should be skipped.

mod quote;
mod report;

pub use quote::{shell_quote, split_args};
pub use report::{RecordingReporter, Report, Reporter, TracingReporter};

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::composer::find_autoload;
use crate::config::{
    ConfigError, LinterSettings, find_configuration, project_level, project_paths,
    user_level_args,
};
use crate::{ARGS_PLACEHOLDER, CommandVector, ConfigFile, FILE_PLACEHOLDER};

/// Analyzer executable and subcommand
pub const PROGRAM: [&str; 2] = ["phpstan", "analyse"];

/// Output options every run needs for the diagnostics regex to apply
pub const OUTPUT_OPTIONS: [&str; 2] = ["--error-format=raw", "--no-progress"];

static AUTOLOAD_OPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-a|--autoload-file)\b").expect("valid autoload option regex"));

/// Builds PHPStan invocations for single files
pub struct Linter<R: Reporter = TracingReporter> {
    reporter: R,
}

impl<R: Reporter> Linter<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Command for `file_path`, or the empty vector when the file is out of
    /// scope or the autoload options conflict.
    pub fn get_cmd(
        &self,
        file_path: &Path,
        settings: &LinterSettings,
    ) -> Result<CommandVector, ConfigError> {
        let config = find_configuration(file_path);

        let command = self.build_command(file_path, config.as_ref(), settings)?;

        if !self.in_scope(file_path, config.as_ref())? {
            debug!("{} is outside parameters.paths, skipping", file_path.display());
            return Ok(CommandVector::skip());
        }

        Ok(command)
    }

    /// Whether `file_path` lies under one of the project's restricted paths.
    ///
    /// Without a configuration or without `parameters.paths` every file is
    /// in scope.
    pub fn in_scope(
        &self,
        file_path: &Path,
        config: Option<&ConfigFile>,
    ) -> Result<bool, ConfigError> {
        let (Some(config), Some(paths)) = (config, project_paths(config)?) else {
            return Ok(true);
        };

        Ok(paths.contains_file(&config.base_dir(), &file_path.to_string_lossy()))
    }

    fn build_command(
        &self,
        file_path: &Path,
        config: Option<&ConfigFile>,
        settings: &LinterSettings,
    ) -> Result<CommandVector, ConfigError> {
        let user_args = settings.user_args();
        let mut opts: Vec<String> = OUTPUT_OPTIONS.iter().map(|s| s.to_string()).collect();

        if let Some(level) = project_level(config)? {
            let overlapping = user_level_args(&user_args);
            if !overlapping.is_empty() {
                self.reporter.warn(&format!(
                    "Project level \"{}\" is passed alongside \"{}\" from \"args\".",
                    level,
                    overlapping.join("\", \"")
                ));
            }
            opts.push(format!("--level={level}"));
        }

        if settings.use_composer_autoload {
            if let Some(autoload) = find_autoload(file_path) {
                let conflicts = autoload_opts(&user_args);
                if !conflicts.is_empty() {
                    self.reporter.error(&format!(
                        "Composer autoload-file conflicts with PHPStan user setting.\n\
                         Disable \"use_composer_autoload\" or remove \"{}\" from \"args\".",
                        conflicts.join("\", and \"")
                    ));
                    self.reporter
                        .notify_failure("phpstan: autoload-file setting conflict");
                    return Ok(CommandVector::skip());
                }

                opts.push(format!(
                    "--autoload-file={}",
                    shell_quote(&autoload.path().to_string_lossy())
                ));
            }
        }

        let mut tokens: Vec<String> = PROGRAM.iter().map(|s| s.to_string()).collect();
        tokens.push(ARGS_PLACEHOLDER.to_string());
        tokens.extend(opts);
        tokens.push("--".to_string());
        tokens.push(FILE_PLACEHOLDER.to_string());

        Ok(CommandVector::new(tokens))
    }
}

/// User arguments that set the autoload file themselves
fn autoload_opts(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| AUTOLOAD_OPT_RE.is_match(arg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoload_opts_matches_short_and_long() {
        let args: Vec<String> = ["-a", "bootstrap.php", "--autoload-file=x", "--level=5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(autoload_opts(&args), vec!["-a", "--autoload-file=x"]);
    }

    #[test]
    fn test_autoload_opts_requires_word_boundary() {
        let args: Vec<String> = ["-ab", "--autoload-filex", "x--autoload-file"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(autoload_opts(&args).is_empty());
    }

    #[test]
    fn test_command_without_project() {
        let linter = Linter::new(RecordingReporter::new());
        let settings = LinterSettings {
            use_composer_autoload: false,
            ..Default::default()
        };

        let cmd = linter
            .build_command(Path::new("/nonexistent/Foo.php"), None, &settings)
            .unwrap();
        assert_eq!(
            cmd.tokens(),
            &[
                "phpstan",
                "analyse",
                "${args}",
                "--error-format=raw",
                "--no-progress",
                "--",
                "${file}"
            ]
        );
        assert!(linter.reporter().reports().is_empty());
    }

    #[test]
    fn test_in_scope_without_config() {
        let linter = Linter::new(RecordingReporter::new());
        assert!(linter.in_scope(Path::new("/anywhere/Foo.php"), None).unwrap());
    }
}
