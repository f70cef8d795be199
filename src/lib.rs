//! phpstan-lint - PHPStan adapter for editor lint frameworks
//!
//! The editor hands over the path of the file being linted plus its linter
//! settings and gets back either a command vector to run or an empty vector
//! meaning "skip this file".
//!
//! ## Pipeline
//!
//! 1. **Config lookup**: nearest `phpstan.neon` / `phpstan.neon.dist` above
//!    the file ([`config::find_configuration`]).
//! 2. **Level**: first `level: <value>` line of that file
//!    ([`config::project_level`]).
//! 3. **Autoload**: nearest `vendor/autoload.php` next to a Composer manifest
//!    ([`composer::find_autoload`]).
//! 4. **Command**: `phpstan analyse ${args} ... -- ${file}`, abandoned on an
//!    autoload option conflict ([`linter::Linter::get_cmd`]).
//! 5. **Scope**: the command is dropped when the file is outside
//!    `parameters.paths` ([`config::project_paths`]).
//!
//! Analyzer output is turned back into [`Diagnostic`]s by [`diagnostics`].

pub mod composer;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod linter;

pub use domain::*;
