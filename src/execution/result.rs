//! Execution result types.

use serde::{Deserialize, Serialize};

use crate::output::OutputSanitizer;

/// Outcome of one command.
///
/// `stdout` and `stderr` are `None` when output was not captured, and
/// `Some` (possibly empty) when it was. The exit code is always present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    /// Captured standard output, one trailing newline removed.
    pub stdout: Option<String>,
    /// Captured standard error, one trailing newline removed.
    pub stderr: Option<String>,
    /// Exit code reported by the interpreter.
    pub exit_code: i32,
}

impl CommandResult {
    /// Build a result from raw captured streams.
    pub fn captured(stdout: &[u8], stderr: &[u8], exit_code: i32) -> Self {
        Self {
            stdout: Some(decode(stdout)),
            stderr: Some(decode(stderr)),
            exit_code,
        }
    }

    /// Build a result for a run whose output went to the terminal.
    pub fn uncaptured(exit_code: i32) -> Self {
        Self {
            stdout: None,
            stderr: None,
            exit_code,
        }
    }

    /// Check if the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether stdout and stderr were captured.
    pub fn is_captured(&self) -> bool {
        self.stdout.is_some()
    }

    /// Captured output split on `\n`.
    ///
    /// Every record is kept, including empty ones: `"a\n"` gives
    /// `["a", ""]` and empty output gives `[""]`.
    pub fn lines(&self) -> Option<Vec<&str>> {
        self.stdout.as_deref().map(|out| out.split('\n').collect())
    }

    /// Captured output with terminal escape sequences removed.
    pub fn plain_stdout(&self) -> Option<String> {
        self.stdout.as_deref().map(OutputSanitizer::strip_ansi_str)
    }
}

fn decode(raw: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(raw).into_owned();
    trim_trailing_newline(&mut text);
    text
}

/// Remove exactly one trailing `\n` or `\r\n`.
fn trim_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_trims_one_newline() {
        let result = CommandResult::captured(b"hello\n", b"", 0);
        assert_eq!(result.stdout.as_deref(), Some("hello"));
        assert_eq!(result.stderr.as_deref(), Some(""));
    }

    #[test]
    fn test_captured_keeps_inner_newlines() {
        let result = CommandResult::captured(b"a\n\nb\n\n", b"", 0);
        assert_eq!(result.stdout.as_deref(), Some("a\n\nb\n"));
    }

    #[test]
    fn test_captured_trims_crlf() {
        let result = CommandResult::captured(b"dos\r\n", b"oops\r\n", 1);
        assert_eq!(result.stdout.as_deref(), Some("dos"));
        assert_eq!(result.stderr.as_deref(), Some("oops"));
    }

    #[test]
    fn test_leading_whitespace_preserved() {
        let result = CommandResult::captured(b"  indented  \n", b"", 0);
        assert_eq!(result.stdout.as_deref(), Some("  indented  "));
    }

    #[test]
    fn test_uncaptured_has_no_text() {
        let result = CommandResult::uncaptured(2);
        assert!(result.stdout.is_none());
        assert!(result.stderr.is_none());
        assert!(result.lines().is_none());
        assert!(!result.is_captured());
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn test_lines() {
        let result = CommandResult::captured(b"one\ntwo\nthree\n", b"", 0);
        assert_eq!(result.lines(), Some(vec!["one", "two", "three"]));
    }

    #[test]
    fn test_lines_empty_output() {
        let result = CommandResult::captured(b"", b"", 0);
        assert_eq!(result.lines(), Some(vec![""]));
    }

    #[test]
    fn test_lines_keep_trailing_empty_record() {
        // Only one newline is trimmed, the blank line before it survives.
        let result = CommandResult::captured(b"a\n\n", b"", 0);
        assert_eq!(result.stdout.as_deref(), Some("a\n"));
        assert_eq!(result.lines(), Some(vec!["a", ""]));
    }

    #[test]
    fn test_lines_keep_inner_empty_record() {
        let result = CommandResult::captured(b"a\n\nb\n", b"", 0);
        assert_eq!(result.lines(), Some(vec!["a", "", "b"]));
    }

    #[test]
    fn test_success() {
        assert!(CommandResult::captured(b"", b"", 0).success());
        assert!(!CommandResult::uncaptured(127).success());
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let result = CommandResult::captured(b"ok\xff\n", b"", 0);
        assert_eq!(result.stdout.as_deref(), Some("ok\u{fffd}"));
    }

    #[test]
    fn test_plain_stdout() {
        let result = CommandResult::captured(b"\x1b[32mgreen\x1b[0m\n", b"", 0);
        assert_eq!(result.plain_stdout().as_deref(), Some("green"));
    }

    #[test]
    fn test_serialization_keeps_absence() {
        let json = serde_json::to_string(&CommandResult::uncaptured(0)).unwrap();
        assert!(json.contains("\"stdout\":null"));
        assert!(json.contains("\"exit_code\":0"));
    }
}
