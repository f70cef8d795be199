//! Core domain types for phpstan-lint

mod command;
mod diagnostic;
mod project;

pub use command::{ARGS_PLACEHOLDER, CommandVector, FILE_PLACEHOLDER};
pub use diagnostic::{Diagnostic, Severity};
pub use project::{AnalysisLevel, AutoloadFile, ConfigFile, ConfigKind, RestrictedPaths};
