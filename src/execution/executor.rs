//! Command execution engine.

use std::io::{self, Read, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::thread;

use tracing::{debug, info, warn};

use super::command::CommandRequest;
use super::result::CommandResult;
use crate::config::Config;
use crate::error::ShellError;
use crate::interpreter::{InterpreterLocator, InterpreterPath};
use crate::Result;

/// Runs command lines through a shell interpreter.
///
/// Every call spawns a fresh interpreter process, so nothing (working
/// directory, variables, aliases) carries over from one call to the next.
/// The only state held is the interpreter path, which makes a `Shell` safe
/// to share between threads.
#[derive(Debug, Clone)]
pub struct Shell {
    interpreter: InterpreterPath,
}

impl Shell {
    /// Locate the host's interpreter and build a shell around it.
    ///
    /// Fails with [`ShellError::NoSupportedShell`] when the host has none.
    pub fn new() -> Result<Self> {
        Self::with_locator(&InterpreterLocator::new())
    }

    /// Build a shell using a customised locator.
    pub fn with_locator(locator: &InterpreterLocator) -> Result<Self> {
        let interpreter = locator.locate()?;
        info!(%interpreter, "shell interpreter resolved");
        Ok(Self { interpreter })
    }

    /// Build a shell around a known interpreter, skipping location.
    pub fn with_interpreter(interpreter: InterpreterPath) -> Self {
        Self { interpreter }
    }

    /// Build a shell from configuration.
    ///
    /// An explicit interpreter path wins; otherwise the locator runs with
    /// the configured compatibility shell paths.
    pub fn from_config(config: &Config) -> Result<Self> {
        let section = &config.interpreter;
        match section.path {
            Some(ref path) => Ok(Self::with_interpreter(InterpreterPath::new(path.clone()))),
            None => Self::with_locator(
                &InterpreterLocator::new()
                    .wsl_path(&section.wsl_path)
                    .cygwin_path(&section.cygwin_path),
            ),
        }
    }

    /// The interpreter every command runs through.
    pub fn interpreter(&self) -> &InterpreterPath {
        &self.interpreter
    }

    /// Run one command line.
    ///
    /// With `capture_output` the child's stdout and stderr are collected into
    /// the result; without it they go straight to this process's streams. A
    /// non-zero exit code is a normal result, not an error.
    pub fn execute(&self, command: &str, capture_output: bool) -> Result<CommandResult> {
        self.run(&CommandRequest::new(command).capture_output(capture_output))
    }

    /// Run a prepared request.
    pub fn run(&self, request: &CommandRequest) -> Result<CommandResult> {
        let mut cmd = Command::new(&self.interpreter);
        cmd.stdin(Stdio::piped());
        if request.capture_output {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }
        if let Some(ref dir) = request.working_dir {
            cmd.current_dir(dir);
        }
        cmd.envs(&request.env);

        let child = cmd.spawn().map_err(|source| ShellError::Spawn {
            interpreter: self.interpreter.to_string(),
            source,
        })?;
        let mut child = ReapOnDrop::new(child);
        debug!(
            pid = child.id(),
            capture = request.capture_output,
            command = %request.command_line,
            "interpreter spawned"
        );

        let script = request.script();
        let result = if request.capture_output {
            run_captured(&mut child, &script)?
        } else {
            let stdin = take_stream(child.inner_mut().stdin.take(), "stdin")?;
            feed(stdin, &script)?;
            CommandResult::uncaptured(exit_code(child.wait()?))
        };

        debug!(exit_code = result.exit_code, "interpreter exited");
        Ok(result)
    }

    /// Run one command line on tokio's blocking pool.
    pub async fn execute_async(
        &self,
        command: impl Into<String>,
        capture_output: bool,
    ) -> Result<CommandResult> {
        let shell = self.clone();
        let command = command.into();
        tokio::task::spawn_blocking(move || shell.execute(&command, capture_output))
            .await
            .map_err(|e| ShellError::Join(e.to_string()))?
    }
}

/// Write the script and drain both pipes at the same time.
///
/// Reading one pipe to the end before the other deadlocks as soon as the
/// child fills the unread pipe's buffer, so each gets its own reader.
fn run_captured(child: &mut ReapOnDrop, script: &str) -> Result<CommandResult> {
    let inner = child.inner_mut();
    let stdin = take_stream(inner.stdin.take(), "stdin")?;
    let stdout = take_stream(inner.stdout.take(), "stdout")?;
    let stderr = take_stream(inner.stderr.take(), "stderr")?;

    let (out, err) = thread::scope(|scope| -> Result<(Vec<u8>, Vec<u8>)> {
        let out_reader = scope.spawn(move || drain(stdout));
        let err_reader = scope.spawn(move || drain(stderr));

        let written = feed(stdin, script);
        let out = out_reader
            .join()
            .map_err(|_| ShellError::ReaderPanicked("stdout"))?;
        let err = err_reader
            .join()
            .map_err(|_| ShellError::ReaderPanicked("stderr"))?;

        written?;
        Ok((out?, err?))
    })?;

    let status = child.wait()?;
    Ok(CommandResult::captured(&out, &err, exit_code(status)))
}

fn take_stream<T>(stream: Option<T>, name: &'static str) -> Result<T> {
    stream.ok_or(ShellError::StreamUnavailable(name))
}

/// Write the script, then close stdin so the shell sees EOF.
fn feed(mut stdin: ChildStdin, script: &str) -> io::Result<()> {
    stdin.write_all(script.as_bytes())?;
    stdin.flush()
}

fn drain(mut stream: impl Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Exit code as the shell would report it.
///
/// Signal deaths map to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

/// Child handle that is killed and reaped if dropped before `wait` returns.
struct ReapOnDrop {
    child: Child,
    reaped: bool,
}

impl ReapOnDrop {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn id(&self) -> u32 {
        self.child.id()
    }

    fn inner_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ReapOnDrop {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        warn!(pid = self.child.id(), "cleaning up interpreter after failed call");
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
