//! Error types for shell-bridge.

use thiserror::Error;

/// Main error type for shell-bridge operations.
///
/// A command that runs and exits non-zero is not an error; it is reported
/// through [`CommandResult::exit_code`](crate::CommandResult::exit_code).
#[derive(Error, Debug)]
pub enum ShellError {
    /// No usable shell interpreter was found on this host.
    #[error("no supported shell environment found")]
    NoSupportedShell,

    /// The interpreter process could not be started.
    #[error("failed to spawn interpreter '{interpreter}': {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on one of the child's standard streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A piped standard stream was not available on the child.
    #[error("child {0} was not piped")]
    StreamUnavailable(&'static str),

    /// A stream reader thread panicked.
    #[error("{0} reader panicked")]
    ReaderPanicked(&'static str),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,

    /// Blocking task failed to complete.
    #[error("blocking task failed: {0}")]
    Join(String),
}

/// Convenience Result type for shell-bridge operations.
pub type Result<T> = std::result::Result<T, ShellError>;
