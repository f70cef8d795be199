//! A single problem reported by the analyzer

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Path as printed by the analyzer
    pub file: String,
    /// 1-indexed line number
    pub line: u32,
    pub message: String,
    pub severity: Severity,
}
