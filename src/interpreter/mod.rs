//! Shell interpreter location.
//!
//! Every command runs through bash. On Unix-family hosts that is simply
//! `bash` from `PATH`; on Windows a compatibility shell (WSL or Cygwin) is
//! looked up at its well-known install path.
//!
//! # Example
//!
//! ```no_run
//! use shell_bridge::interpreter::InterpreterLocator;
//!
//! let interpreter = InterpreterLocator::new().locate()?;
//! println!("using {interpreter}");
//! # Ok::<(), shell_bridge::ShellError>(())
//! ```

mod locator;

pub use locator::{
    global_interpreter, is_native, HostOs, InterpreterLocator, InterpreterPath, CYGWIN_BASH,
    NATIVE_SHELL, WSL_BASH,
};
