//! Parsing of PHPStan's `--error-format=raw` output
//!
//! Every reported problem is one line of the form `<file>:<line>:<message>`.
//! Informational lines starting with `Note: ` are never diagnostics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Diagnostic, Severity};

const NOTE_PREFIX: &str = "Note: ";

static RAW_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<file>.*):(?P<line>[0-9]+):(?P<message>.+)").expect("valid raw output regex")
});

/// Parse one output line
pub fn parse_line(line: &str) -> Option<Diagnostic> {
    if line.starts_with(NOTE_PREFIX) {
        return None;
    }

    let captures = RAW_LINE_RE.captures(line)?;
    let line_number = captures["line"].parse().ok()?;

    Some(Diagnostic {
        file: captures["file"].to_string(),
        line: line_number,
        message: captures["message"].to_string(),
        severity: Severity::default(),
    })
}

/// Parse the analyzer's whole stdout
pub fn parse_output(stdout: &str) -> Vec<Diagnostic> {
    stdout.lines().filter_map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_line() {
        let diag =
            parse_line("/proj/src/Foo.php:12:Call to an undefined method Foo::bar().").unwrap();
        assert_eq!(diag.file, "/proj/src/Foo.php");
        assert_eq!(diag.line, 12);
        assert_eq!(diag.message, "Call to an undefined method Foo::bar().");
        assert_eq!(diag.severity, Severity::Error);
    }

    #[test]
    fn test_message_with_colons_and_digits() {
        let diag = parse_line("/proj/a.php:7:Method Foo::bar() has no return type: 2 paths.")
            .unwrap();
        assert_eq!(diag.file, "/proj/a.php");
        assert_eq!(diag.line, 7);
        assert_eq!(diag.message, "Method Foo::bar() has no return type: 2 paths.");
    }

    #[test]
    fn test_note_lines_are_skipped() {
        assert!(parse_line("Note: Using configuration file /proj/phpstan.neon:1:x").is_none());
    }

    #[test]
    fn test_non_matching_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line(" [OK] No errors").is_none());
        assert!(parse_line("/proj/a.php:12:").is_none());
    }

    #[test]
    fn test_parse_output() {
        let stdout = "Note: Using configuration file /proj/phpstan.neon.\n\
                      /proj/src/A.php:4:Undefined variable: $a\n\
                      /proj/src/B.php:9:Dead catch.\n";
        let diags = parse_output(stdout);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[1].line, 9);
    }
}
