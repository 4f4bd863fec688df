//! Shell interpreter discovery.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ShellError;
use crate::Result;

/// Interpreter name used on Unix-family hosts, resolved through `PATH`.
pub const NATIVE_SHELL: &str = "bash";

/// Windows Subsystem for Linux bash.
pub const WSL_BASH: &str = r"C:\Windows\System32\bash.exe";

/// Cygwin bash.
pub const CYGWIN_BASH: &str = r"C:\cygwin64\bin\bash.exe";

/// The executable every command is run through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpreterPath(String);

impl InterpreterPath {
    /// Wrap an executable name or path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterpreterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<OsStr> for InterpreterPath {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.0)
    }
}

/// Operating system family of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    /// Linux, macOS, the BSDs and other Unix-like systems.
    Unix,
    /// Microsoft Windows.
    Windows,
    /// Anything else.
    Other,
}

impl HostOs {
    /// Family of the host this binary was built for.
    pub fn current() -> Self {
        if cfg!(unix) {
            HostOs::Unix
        } else if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Other
        }
    }
}

/// Whether the current host has a native Unix shell.
pub fn is_native() -> bool {
    HostOs::current() == HostOs::Unix
}

/// Finds the interpreter to run commands through.
///
/// Candidates are tried in a fixed order and the first usable one wins:
/// the bare `bash` name on Unix-family hosts, then WSL bash, then Cygwin
/// bash on Windows. The only side effect is a file existence check.
#[derive(Clone)]
pub struct InterpreterLocator {
    host: HostOs,
    wsl_path: PathBuf,
    cygwin_path: PathBuf,
    probe: fn(&Path) -> bool,
}

impl InterpreterLocator {
    /// Locator for the current host with the well-known Windows paths.
    pub fn new() -> Self {
        Self {
            host: HostOs::current(),
            wsl_path: PathBuf::from(WSL_BASH),
            cygwin_path: PathBuf::from(CYGWIN_BASH),
            probe: Path::exists,
        }
    }

    /// Pretend to run on another host.
    pub fn host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    /// Override the WSL bash location.
    pub fn wsl_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wsl_path = path.into();
        self
    }

    /// Override the Cygwin bash location.
    pub fn cygwin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cygwin_path = path.into();
        self
    }

    /// Replace the file existence check.
    pub fn probe(mut self, probe: fn(&Path) -> bool) -> Self {
        self.probe = probe;
        self
    }

    /// Whether the configured host has a native Unix shell.
    pub fn is_native(&self) -> bool {
        self.host == HostOs::Unix
    }

    /// Resolve the interpreter.
    pub fn locate(&self) -> Result<InterpreterPath> {
        if self.is_native() {
            debug!(interpreter = NATIVE_SHELL, "native unix host");
            return Ok(InterpreterPath::new(NATIVE_SHELL));
        }

        if self.host == HostOs::Windows {
            for candidate in [&self.wsl_path, &self.cygwin_path] {
                if (self.probe)(candidate) {
                    let path = InterpreterPath::new(candidate.to_string_lossy());
                    info!(interpreter = %path, "found compatibility shell");
                    return Ok(path);
                }
                debug!(candidate = %candidate.display(), "compatibility shell not present");
            }
        }

        Err(ShellError::NoSupportedShell)
    }
}

impl fmt::Debug for InterpreterLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpreterLocator")
            .field("host", &self.host)
            .field("wsl_path", &self.wsl_path)
            .field("cygwin_path", &self.cygwin_path)
            .finish_non_exhaustive()
    }
}

impl Default for InterpreterLocator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_INTERPRETER: OnceLock<Option<InterpreterPath>> = OnceLock::new();

/// Process-wide interpreter, located on first use and cached afterwards.
///
/// Thread-safe. A failed lookup is cached too, so every caller sees the same
/// answer for the lifetime of the process.
pub fn global_interpreter() -> Result<&'static InterpreterPath> {
    GLOBAL_INTERPRETER
        .get_or_init(|| InterpreterLocator::new().locate().ok())
        .as_ref()
        .ok_or(ShellError::NoSupportedShell)
}
