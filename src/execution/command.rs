//! Command request representation.

use std::collections::HashMap;
use std::path::PathBuf;

/// A single command line to run through the interpreter.
///
/// The text is handed to the shell verbatim; quoting and escaping are the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// The command line to execute.
    pub command_line: String,
    /// Whether to capture stdout and stderr instead of inheriting them.
    pub capture_output: bool,
    /// Working directory override (if any).
    pub working_dir: Option<PathBuf>,
    /// Environment variables to set.
    pub env: HashMap<String, String>,
}

impl CommandRequest {
    /// Create a new capturing request for the given command line.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            capture_output: true,
            working_dir: None,
            env: HashMap::new(),
        }
    }

    /// Set whether to capture output.
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// Set the working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add an environment variable.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add multiple environment variables.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.env.insert(k.into(), v.into());
        }
        self
    }

    /// Bytes written to the interpreter's stdin.
    ///
    /// The command and `exit` sit on separate lines so a trailing comment in
    /// the command cannot swallow the `exit`. The shell shares this stdin with
    /// the command, so a command that reads stdin (`cat`, `wc -l`, `read`)
    /// consumes the `exit` line as its input and then sees EOF.
    pub(crate) fn script(&self) -> String {
        format!("{}\nexit\n", self.command_line)
    }
}

impl Default for CommandRequest {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new() {
        let req = CommandRequest::new("ls -la");
        assert_eq!(req.command_line, "ls -la");
        assert!(req.capture_output);
        assert!(req.working_dir.is_none());
        assert!(req.env.is_empty());
    }

    #[test]
    fn test_request_chain() {
        let req = CommandRequest::new("make")
            .capture_output(false)
            .working_dir("/project")
            .env("CC", "clang");

        assert!(!req.capture_output);
        assert_eq!(req.working_dir, Some(PathBuf::from("/project")));
        assert_eq!(req.env.get("CC"), Some(&"clang".to_string()));
    }

    #[test]
    fn test_request_envs() {
        let req = CommandRequest::new("env").envs([("KEY1", "val1"), ("KEY2", "val2")]);
        assert_eq!(req.env.len(), 2);
        assert_eq!(req.env.get("KEY2"), Some(&"val2".to_string()));
    }

    #[test]
    fn test_script_terminates_shell() {
        let req = CommandRequest::new("echo hi # trailing comment");
        assert_eq!(req.script(), "echo hi # trailing comment\nexit\n");
    }
}
