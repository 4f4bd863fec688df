//! Command-line interface for shell-bridge.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command line to run, joined from the positional words.
    pub command: Option<String>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Interpreter to use instead of locating one.
    pub interpreter: Option<String>,
    /// Pass output through instead of capturing it.
    pub no_capture: bool,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
///
/// Everything from the first positional word on belongs to the command, so
/// `shell-bridge ls -la` runs `ls -la`.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);
    let mut words: Vec<String> = Vec::new();

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('i') | Long("interpreter") => {
                result.interpreter = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Long("no-capture") => {
                result.no_capture = true;
            }
            Value(val) => {
                words.push(val.string()?);
                for rest in parser.raw_args()? {
                    words.push(
                        rest.into_string()
                            .map_err(|v| ArgsError::NotUnicode(v.to_string_lossy().into()))?,
                    );
                }
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    if !words.is_empty() {
        result.command = Some(words.join(" "));
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"shell-bridge {version}
Run a command line through the system bash

USAGE:
    shell-bridge [OPTIONS] [--] <COMMAND>...

OPTIONS:
    -c, --config <FILE>        Path to configuration file (JSON)
    -i, --interpreter <PATH>   Interpreter to use instead of locating bash
    -l, --log-level <LVL>      Log level (error, warn, info, debug, trace)
        --no-capture           Let the command write straight to the terminal
    -h, --help                 Print help
    -V, --version              Print version

ENVIRONMENT VARIABLES:
    SHELL_BRIDGE_INTERPRETER   Interpreter path (overrides config)
    SHELL_BRIDGE_LOG_LEVEL     Log level (overrides config)
    RUST_LOG                   Alternative log level setting

Positional words are joined with single spaces, so the caller's quoting
is lost. Pass anything containing spaces, quotes, pipes or redirections
as one single-quoted argument.

EXAMPLES:
    # Capture and print the output of a pipeline
    shell-bridge 'ls -la | head -n 5'

    # Keep inner spacing by quoting the whole command line
    shell-bridge 'echo "a  b"'

    # Run interactively-visible output, exit with the command's status
    shell-bridge --no-capture -- make test
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("shell-bridge {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// A command word was not valid Unicode.
    NotUnicode(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::NotUnicode(word) => write!(f, "command word is not valid unicode: '{}'", word),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        std::iter::once("shell-bridge")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_default_args() {
        let result = parse_args_from(args(&[])).unwrap();
        assert!(result.command.is_none());
        assert!(!result.no_capture);
        assert!(result.interpreter.is_none());
    }

    #[test]
    fn test_single_quoted_command() {
        let result = parse_args_from(args(&["echo hello | tr a-z A-Z"])).unwrap();
        assert_eq!(result.command.as_deref(), Some("echo hello | tr a-z A-Z"));
    }

    #[test]
    fn test_words_after_command_are_not_options() {
        let result = parse_args_from(args(&["ls", "-la", "--color=never"])).unwrap();
        assert_eq!(result.command.as_deref(), Some("ls -la --color=never"));
    }

    #[test]
    fn test_words_lose_inner_spacing() {
        let result = parse_args_from(args(&["echo", "a  b"])).unwrap();
        assert_eq!(result.command.as_deref(), Some("echo a  b"));

        let result = parse_args_from(args(&["echo \"a  b\""])).unwrap();
        assert_eq!(result.command.as_deref(), Some("echo \"a  b\""));
    }

    #[test]
    fn test_double_dash() {
        let result = parse_args_from(args(&["--no-capture", "--", "-x"])).unwrap();
        assert!(result.no_capture);
        assert_eq!(result.command.as_deref(), Some("-x"));
    }

    #[test]
    fn test_interpreter_and_config() {
        let result = parse_args_from(args(&[
            "-i",
            "/bin/sh",
            "--config",
            "/etc/shell-bridge.json",
            "pwd",
        ]))
        .unwrap();
        assert_eq!(result.interpreter.as_deref(), Some("/bin/sh"));
        assert_eq!(result.config, Some(PathBuf::from("/etc/shell-bridge.json")));
        assert_eq!(result.command.as_deref(), Some("pwd"));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args_from(args(&["-h"])).unwrap().help);
        assert!(parse_args_from(args(&["--help"])).unwrap().help);
    }

    #[test]
    fn test_version_flag() {
        assert!(parse_args_from(args(&["-V"])).unwrap().version);
        assert!(parse_args_from(args(&["--version"])).unwrap().version);
    }

    #[test]
    fn test_log_level() {
        let result = parse_args_from(args(&["-l", "debug"])).unwrap();
        assert_eq!(result.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_unknown_option() {
        assert!(parse_args_from(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(parse_args_from(args(&["-i"])).is_err());
    }
}
