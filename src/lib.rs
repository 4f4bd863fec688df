//! # shell-bridge
//!
//! Run command lines through the system bash and get back the exit code
//! and, optionally, the captured output.
//!
//! On Linux and other Unix-like systems `bash` is taken from `PATH`. On
//! Windows the crate looks for the WSL or Cygwin bash at their well-known
//! install locations and refuses to start if neither is present.
//!
//! ## Features
//!
//! - **Interpreter location**: native bash, WSL bash, or Cygwin bash
//! - **One process per call**: no state leaks between commands
//! - **Deadlock-free capture**: stdout and stderr are drained concurrently
//! - **Convenience ops**: `ls`, `cp`, `mv`, `rm`, `cat`, `grep`, `echo`
//!
//! ## Quick Start
//!
//! ```no_run
//! use shell_bridge::Shell;
//!
//! fn main() -> shell_bridge::Result<()> {
//!     shell_bridge::logging::try_init().ok();
//!
//!     let shell = Shell::new()?;
//!
//!     let result = shell.execute("echo hello", true)?;
//!     assert_eq!(result.stdout.as_deref(), Some("hello"));
//!
//!     // Non-zero exit codes are data, not errors
//!     let result = shell.execute("exit 3", true)?;
//!     assert_eq!(result.exit_code, 3);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod interpreter;
pub mod logging;
pub mod ops;
pub mod output;

// Re-export commonly used types
pub use error::{Result, ShellError};
pub use execution::{CommandRequest, CommandResult, RecordingShell, Shell};
pub use interpreter::{global_interpreter, HostOs, InterpreterLocator, InterpreterPath};
pub use ops::{OpKind, ShellOp};
pub use output::OutputSanitizer;
