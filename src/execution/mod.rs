//! Command execution engine.
//!
//! This module runs command lines through the located interpreter:
//! - One fresh interpreter process per call
//! - Optional capture of stdout and stderr
//! - An async adapter and an optional last-result cache
//!
//! # Example
//!
//! ```no_run
//! use shell_bridge::execution::{CommandRequest, Shell};
//!
//! let shell = Shell::new()?;
//!
//! let result = shell.execute("echo hello", true)?;
//! assert_eq!(result.stdout.as_deref(), Some("hello"));
//!
//! // Let the output go straight to the terminal
//! let result = shell.run(&CommandRequest::new("make").capture_output(false))?;
//! println!("make exited with {}", result.exit_code);
//! # Ok::<(), shell_bridge::ShellError>(())
//! ```

mod command;
mod executor;
mod recording;
mod result;

pub use command::CommandRequest;
pub use executor::Shell;
pub use recording::RecordingShell;
pub use result::CommandResult;
