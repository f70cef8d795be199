//! Shell quoting and splitting helpers.

/// Quote a string for safe shell use.
///
/// Strings made only of characters the shell never interprets are returned
/// unchanged. Anything else is wrapped in single quotes, with embedded single
/// quotes written as `'"'"'`.
///
/// # Example
///
/// ```ignore
/// assert_eq!(shell_quote("/proj/vendor/autoload.php"), "/proj/vendor/autoload.php");
/// assert_eq!(shell_quote("/my proj/x"), "'/my proj/x'");
/// ```
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.chars().all(is_shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c)
}

/// Split a command-line string into words using POSIX shell rules.
///
/// Single quotes are literal, double quotes allow `\"`, `\\`, `\$` and `` \` ``
/// escapes, and a bare backslash escapes the next character. An unterminated
/// quote runs to the end of the input.
pub fn split_args(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                in_word = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' => match chars.peek() {
                            Some(&next @ ('"' | '\\' | '$' | '`')) => {
                                current.push(next);
                                chars.next();
                            }
                            _ => current.push('\\'),
                        },
                        _ => current.push(q),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_quote_safe_path_unchanged() {
        assert_eq!(
            shell_quote("/proj/vendor/autoload.php"),
            "/proj/vendor/autoload.php"
        );
    }

    #[test]
    fn test_shell_quote_spaces() {
        assert_eq!(shell_quote("/my proj/autoload.php"), "'/my proj/autoload.php'");
    }

    #[test]
    fn test_shell_quote_embedded_quote() {
        assert_eq!(shell_quote("it's"), "'it'\"'\"'s'");
    }

    #[test]
    fn test_shell_quote_empty() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_args("  -c  a.neon --no-ansi "), vec!["-c", "a.neon", "--no-ansi"]);
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(
            split_args(r#"--autoload-file='/my proj/a.php' "say \"hi\"" a\ b"#),
            vec!["--autoload-file=/my proj/a.php", "say \"hi\"", "a b"]
        );
    }

    #[test]
    fn test_split_empty_quoted_word() {
        assert_eq!(split_args("a '' b"), vec!["a", "", "b"]);
    }
}
