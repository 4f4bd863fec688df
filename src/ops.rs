//! Convenience commands built on [`Shell::execute`].
//!
//! Each operation is a command-line template: the program name, optional
//! flag text, then the arguments, joined by single spaces. Arguments are
//! inserted verbatim, so paths with spaces or shell metacharacters must be
//! quoted by the caller. `~` and globs are expanded by the shell as usual.
//!
//! ```no_run
//! use shell_bridge::{OpKind, Shell, ShellOp};
//!
//! let shell = Shell::new()?;
//! let listing = shell.ls("~", Some("-la"))?;
//! let matches = shell.run_op(&ShellOp::new(OpKind::Grep).flags("-n").arg("TODO").arg("src/lib.rs"))?;
//! # Ok::<(), shell_bridge::ShellError>(())
//! ```

use std::fmt::Display;

use crate::execution::{CommandResult, Shell};
use crate::Result;

/// The supported convenience commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// `ls {flags} {location}`
    Ls,
    /// `cp {flags} {source} {dest}`
    Cp,
    /// `mv {flags} {source} {dest}`
    Mv,
    /// `rm {flags} {path}`
    Rm,
    /// `cat {flags} {path}`
    Cat,
    /// `grep {flags} {pattern} {location}`
    Grep,
    /// `echo {flags} "{text}"`
    Echo,
}

impl OpKind {
    /// Program name the command line starts with.
    pub fn program(self) -> &'static str {
        match self {
            OpKind::Ls => "ls",
            OpKind::Cp => "cp",
            OpKind::Mv => "mv",
            OpKind::Rm => "rm",
            OpKind::Cat => "cat",
            OpKind::Grep => "grep",
            OpKind::Echo => "echo",
        }
    }

    /// Whether the op captures output by default.
    ///
    /// `echo` exists to print, so its output goes to the terminal.
    pub fn captures_output(self) -> bool {
        !matches!(self, OpKind::Echo)
    }
}

/// A convenience command ready to be formatted and run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOp {
    kind: OpKind,
    flags: Option<String>,
    args: Vec<String>,
}

impl ShellOp {
    /// Start building an op with no flags and no arguments.
    pub fn new(kind: OpKind) -> Self {
        Self {
            kind,
            flags: None,
            args: Vec::new(),
        }
    }

    /// Append an argument, stringified with `Display`.
    pub fn arg(mut self, value: impl Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Set the flag text placed right after the program name.
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    /// Set or clear the flag text.
    pub fn maybe_flags(mut self, flags: Option<&str>) -> Self {
        self.flags = flags.map(str::to_string);
        self
    }

    /// Which command this is.
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// Format the command line handed to the interpreter.
    pub fn to_command_line(&self) -> String {
        let mut parts = vec![self.kind.program().to_string()];
        if let Some(flags) = self.flags.as_deref().map(str::trim) {
            if !flags.is_empty() {
                parts.push(flags.to_string());
            }
        }
        match self.kind {
            OpKind::Echo => parts.push(format!("\"{}\"", self.args.join(" "))),
            _ => parts.extend(self.args.iter().cloned()),
        }
        parts.join(" ")
    }
}

impl Shell {
    /// Run a convenience op with its default capture mode.
    pub fn run_op(&self, op: &ShellOp) -> Result<CommandResult> {
        self.execute(&op.to_command_line(), op.kind().captures_output())
    }

    /// `ls` a location.
    pub fn ls(&self, location: impl Display, flags: Option<&str>) -> Result<CommandResult> {
        self.run_op(&ShellOp::new(OpKind::Ls).maybe_flags(flags).arg(location))
    }

    /// Copy `source` to `dest`.
    pub fn cp(
        &self,
        source: impl Display,
        dest: impl Display,
        flags: Option<&str>,
    ) -> Result<CommandResult> {
        self.run_op(
            &ShellOp::new(OpKind::Cp)
                .maybe_flags(flags)
                .arg(source)
                .arg(dest),
        )
    }

    /// Move `source` to `dest`.
    pub fn mv(
        &self,
        source: impl Display,
        dest: impl Display,
        flags: Option<&str>,
    ) -> Result<CommandResult> {
        self.run_op(
            &ShellOp::new(OpKind::Mv)
                .maybe_flags(flags)
                .arg(source)
                .arg(dest),
        )
    }

    /// Remove a path.
    pub fn rm(&self, path: impl Display, flags: Option<&str>) -> Result<CommandResult> {
        self.run_op(&ShellOp::new(OpKind::Rm).maybe_flags(flags).arg(path))
    }

    /// Print a file.
    pub fn cat(&self, path: impl Display, flags: Option<&str>) -> Result<CommandResult> {
        self.run_op(&ShellOp::new(OpKind::Cat).maybe_flags(flags).arg(path))
    }

    /// Search `location` for `pattern`.
    pub fn grep(
        &self,
        pattern: impl Display,
        location: impl Display,
        flags: Option<&str>,
    ) -> Result<CommandResult> {
        self.run_op(
            &ShellOp::new(OpKind::Grep)
                .maybe_flags(flags)
                .arg(pattern)
                .arg(location),
        )
    }

    /// Echo a value to the terminal.
    pub fn echo(&self, value: impl Display, flags: Option<&str>) -> Result<CommandResult> {
        self.run_op(&ShellOp::new(OpKind::Echo).maybe_flags(flags).arg(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_without_flags() {
        let op = ShellOp::new(OpKind::Ls).arg("~");
        assert_eq!(op.to_command_line(), "ls ~");
    }

    #[test]
    fn test_command_line_with_flags() {
        let op = ShellOp::new(OpKind::Cp)
            .flags("-r")
            .arg("src")
            .arg("/tmp/dest");
        assert_eq!(op.to_command_line(), "cp -r src /tmp/dest");
    }

    #[test]
    fn test_blank_flags_are_dropped() {
        let op = ShellOp::new(OpKind::Rm).flags("  ").arg("file");
        assert_eq!(op.to_command_line(), "rm file");
    }

    #[test]
    fn test_grep_argument_order() {
        let op = ShellOp::new(OpKind::Grep)
            .maybe_flags(Some("-i"))
            .arg("export")
            .arg("~/.bashrc");
        assert_eq!(op.to_command_line(), "grep -i export ~/.bashrc");
    }

    #[test]
    fn test_echo_is_quoted() {
        let op = ShellOp::new(OpKind::Echo).flags("-e").arg("a\\tb");
        assert_eq!(op.to_command_line(), "echo -e \"a\\tb\"");
    }

    #[test]
    fn test_display_arguments() {
        let op = ShellOp::new(OpKind::Echo).arg(42);
        assert_eq!(op.to_command_line(), "echo \"42\"");
    }

    #[test]
    fn test_capture_defaults() {
        assert!(OpKind::Cat.captures_output());
        assert!(OpKind::Grep.captures_output());
        assert!(!OpKind::Echo.captures_output());
    }
}
