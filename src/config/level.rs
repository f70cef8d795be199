//! Strictness level lookup
//!
//! The project level is taken from the first `level: <value>` line of the
//! configuration file and passed on as an opaque string. The capture stops
//! before the line terminator, so `\r\n` files yield the same value as `\n`
//! files.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ConfigError, read_config};
use crate::{AnalysisLevel, ConfigFile};

static LEVEL_PROJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"level: ([^\r\n]+)").expect("valid project level regex"));

static LEVEL_USER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--level=(.+)").expect("valid user level regex"));

/// Level declared by the project configuration, if any
pub fn project_level(config: Option<&ConfigFile>) -> Result<Option<AnalysisLevel>, ConfigError> {
    let Some(config) = config else {
        return Ok(None);
    };

    let content = read_config(config)?;
    Ok(extract_level(&content))
}

/// First `level: ` capture in `content`, verbatim to the end of its line
pub fn extract_level(content: &str) -> Option<AnalysisLevel> {
    LEVEL_PROJECT_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| AnalysisLevel::new(m.as_str()))
}

/// User arguments that already set a level
pub fn user_level_args(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| LEVEL_USER_RE.is_match(arg))
        .collect()
}
