//! Parse command implementation

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use phpstan_lint::diagnostics::parse_output;

/// Convert raw analyzer output into JSON lines
pub fn parse_command(input: Option<&Path>) -> Result<()> {
    let stdout = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read analyzer output: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read analyzer output from stdin")?;
            buf
        }
    };

    for diagnostic in parse_output(&stdout) {
        println!("{}", serde_json::to_string(&diagnostic)?);
    }

    Ok(())
}
