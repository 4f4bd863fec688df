//! shell-bridge binary entry point.

use std::process::ExitCode;

use shell_bridge::cli::{self, Args};
use shell_bridge::config::Config;
use shell_bridge::{logging, CommandRequest, Shell};
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'shell-bridge --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::load(args)?;
    let _ = logging::try_init_with_filter(config.log_filter());

    let Some(ref command) = args.command else {
        cli::print_help();
        return Ok(ExitCode::from(2));
    };

    let shell = Shell::from_config(&config)?;
    debug!(interpreter = %shell.interpreter(), "running command");

    let request = CommandRequest::new(command.as_str())
        .capture_output(config.execution.capture_output);
    let result = shell.run(&request)?;

    if let Some(ref out) = result.stdout {
        if !out.is_empty() {
            println!("{}", out);
        }
    }
    if let Some(ref err) = result.stderr {
        if !err.is_empty() {
            eprintln!("{}", err);
        }
    }

    Ok(ExitCode::from(exit_byte(result.exit_code)))
}

/// Map a command's exit code onto this process's exit status byte.
///
/// A negative code means no status was available and counts as failure.
fn exit_byte(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(code) => code,
        Err(_) if code < 0 => 1,
        Err(_) => u8::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_byte() {
        assert_eq!(exit_byte(0), 0);
        assert_eq!(exit_byte(7), 7);
        assert_eq!(exit_byte(255), 255);
        assert_eq!(exit_byte(300), 255);
    }

    #[test]
    fn test_missing_status_is_failure() {
        assert_eq!(exit_byte(-1), 1);
        assert_ne!(exit_byte(i32::MIN), 0);
    }
}
