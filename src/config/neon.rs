//! NEON configuration reading
//!
//! NEON is close enough to YAML that a small text transform makes it
//! parseable by `serde_yaml`:
//!
//! 1. [`sanitize`] drops `#` comment lines and expands tabs to two spaces
//!    (YAML rejects tab indentation but nesting still depends on it).
//! 2. [`parse_document`] parses the result into a plain
//!    mapping/sequence/scalar tree. Tagged values are rejected.
//!
//! Only `parameters.paths` is read from the tree.

use std::path::Path;

use serde_yaml::Value;

use super::{ConfigError, read_config};
use crate::{ConfigFile, RestrictedPaths};

/// Make NEON text digestible for the YAML parser.
///
/// Line endings are preserved, so text without tabs or comment lines comes
/// back byte-identical.
///
/// Lines end at `\n` only (`\r\n` included). A lone `\r` is not a line
/// break, so in classic Mac text only a `#` at the very start of the file
/// drops anything, and it drops everything up to the first `\n`.
pub fn sanitize(content: &str) -> String {
    let mut sanitized = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        if line.starts_with('#') {
            continue;
        }
        if line.contains('\t') {
            sanitized.push_str(&line.replace('\t', "  "));
        } else {
            sanitized.push_str(line);
        }
    }

    sanitized
}

/// Parse sanitized text into a structured document.
///
/// Whitespace-only input is an empty (`Null`) document.
///
/// Repeated mapping keys (two `parameters:` blocks, say) are a parse error
/// rather than last-one-wins, so neither block's `paths` is silently lost.
pub fn parse_document(path: &Path, sanitized: &str) -> Result<Value, ConfigError> {
    if sanitized.trim().is_empty() {
        return Ok(Value::Null);
    }

    let document: Value = serde_yaml::from_str(sanitized).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    reject_tags(path, &document)?;
    Ok(document)
}

/// Restricted paths declared under `parameters.paths`, if any
pub fn project_paths(config: Option<&ConfigFile>) -> Result<Option<RestrictedPaths>, ConfigError> {
    let Some(config) = config else {
        return Ok(None);
    };

    let content = read_config(config)?;
    let document = parse_document(config.path(), &sanitize(&content))?;
    extract_paths(config.path(), &document)
}

/// Pull `parameters.paths` out of a parsed document
pub fn extract_paths(path: &Path, document: &Value) -> Result<Option<RestrictedPaths>, ConfigError> {
    let Some(parameters) = document.get("parameters").filter(|p| p.is_mapping()) else {
        return Ok(None);
    };

    let items = match parameters.get("paths") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Sequence(items)) => items,
        Some(_) => {
            return Err(ConfigError::InvalidPaths {
                path: path.to_path_buf(),
                reason: "expected a list".to_string(),
            });
        }
    };

    let mut paths = Vec::with_capacity(items.len());
    for item in items {
        let entry = match item {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                return Err(ConfigError::InvalidPaths {
                    path: path.to_path_buf(),
                    reason: "entries must be plain strings".to_string(),
                });
            }
        };
        paths.push(entry);
    }

    Ok(Some(RestrictedPaths::new(paths)))
}

fn reject_tags(path: &Path, value: &Value) -> Result<(), ConfigError> {
    match value {
        Value::Tagged(tagged) => Err(ConfigError::UnsupportedTag {
            path: path.to_path_buf(),
            tag: tagged.tag.to_string(),
        }),
        Value::Sequence(items) => items.iter().try_for_each(|item| reject_tags(path, item)),
        Value::Mapping(mapping) => mapping.iter().try_for_each(|(key, value)| {
            reject_tags(path, key)?;
            reject_tags(path, value)
        }),
        _ => Ok(()),
    }
}
