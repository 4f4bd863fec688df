//! Optional last-result cache over [`Shell`].

use std::sync::Mutex;

use super::command::CommandRequest;
use super::executor::Shell;
use super::result::CommandResult;
use crate::error::ShellError;
use crate::Result;

/// A [`Shell`] that remembers the most recent result.
///
/// This is a convenience for callers that prefer reading `output()` or
/// `exit_code()` after a call over keeping the returned value. The returned
/// [`CommandResult`] stays authoritative. Calls are serialized: the lock is
/// held for the whole run, so the recorded result always belongs to the
/// last call to finish.
#[derive(Debug)]
pub struct RecordingShell {
    shell: Shell,
    last: Mutex<Option<CommandResult>>,
}

impl RecordingShell {
    /// Wrap a shell.
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            last: Mutex::new(None),
        }
    }

    /// The wrapped shell.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run one command line and record its result.
    pub fn execute(&self, command: &str, capture_output: bool) -> Result<CommandResult> {
        self.run(&CommandRequest::new(command).capture_output(capture_output))
    }

    /// Run a prepared request and record its result.
    ///
    /// A failed call clears the recorded result.
    pub fn run(&self, request: &CommandRequest) -> Result<CommandResult> {
        let mut last = self.last.lock().map_err(|_| ShellError::LockPoisoned)?;
        *last = None;
        let result = self.shell.run(request)?;
        *last = Some(result.clone());
        Ok(result)
    }

    /// Result of the last successful call.
    pub fn last(&self) -> Result<Option<CommandResult>> {
        let last = self.last.lock().map_err(|_| ShellError::LockPoisoned)?;
        Ok(last.clone())
    }

    /// Captured stdout of the last call.
    pub fn output(&self) -> Result<Option<String>> {
        Ok(self.last()?.and_then(|r| r.stdout))
    }

    /// Captured stderr of the last call.
    pub fn error_msg(&self) -> Result<Option<String>> {
        Ok(self.last()?.and_then(|r| r.stderr))
    }

    /// Exit code of the last call.
    pub fn exit_code(&self) -> Result<Option<i32>> {
        Ok(self.last()?.map(|r| r.exit_code))
    }
}

impl From<Shell> for RecordingShell {
    fn from(shell: Shell) -> Self {
        Self::new(shell)
    }
}
