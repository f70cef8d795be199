//! Command vector handed back to the editor's lint framework

use serde::Serialize;

/// Placeholder spliced with the user's extra arguments
pub const ARGS_PLACEHOLDER: &str = "${args}";

/// Placeholder replaced with the path of the file being linted
pub const FILE_PLACEHOLDER: &str = "${file}";

/// Ordered invocation tokens
///
/// The empty vector means "skip this run"; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// The "do not run" sentinel
    pub fn skip() -> Self {
        Self(Vec::new())
    }

    pub fn is_skip(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Substitute the framework placeholders.
    ///
    /// `${args}` is replaced by every user argument in order, `${file}` by the
    /// target path. A skipped command stays skipped.
    pub fn expand(&self, args: &[String], file: &str) -> Vec<String> {
        let mut expanded = Vec::with_capacity(self.0.len() + args.len());
        for token in &self.0 {
            match token.as_str() {
                ARGS_PLACEHOLDER => expanded.extend(args.iter().cloned()),
                FILE_PLACEHOLDER => expanded.push(file.to_string()),
                _ => expanded.push(token.clone()),
            }
        }
        expanded
    }
}
