//! Configuration management for shell-bridge.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::interpreter::{CYGWIN_BASH, WSL_BASH};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interpreter selection.
    pub interpreter: InterpreterSection,
    /// Execution defaults.
    pub execution: ExecutionSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Interpreter configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterSection {
    /// Explicit interpreter; skips location when set.
    pub path: Option<String>,
    /// Where to look for WSL bash on Windows.
    pub wsl_path: String,
    /// Where to look for Cygwin bash on Windows.
    pub cygwin_path: String,
}

impl Default for InterpreterSection {
    fn default() -> Self {
        Self {
            path: None,
            wsl_path: WSL_BASH.to_string(),
            cygwin_path: CYGWIN_BASH.to_string(),
        }
    }
}

/// Execution configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSection {
    /// Capture stdout/stderr instead of passing them through.
    pub capture_output: bool,
}

impl Default for ExecutionSection {
    fn default() -> Self {
        Self {
            capture_output: true,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace) or a full filter directive.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("SHELL_BRIDGE_INTERPRETER").filter(|p| !p.is_empty()) {
            self.interpreter.path = Some(path);
        }

        if let Some(level) = var("SHELL_BRIDGE_LOG_LEVEL").or_else(|| var("RUST_LOG")) {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref path) = args.interpreter {
            self.interpreter.path = Some(path.clone());
        }

        if args.no_capture {
            self.execution.capture_output = false;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();
        config.apply_args(args);

        Ok(config)
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.interpreter.path.is_none());
        assert_eq!(config.interpreter.wsl_path, WSL_BASH);
        assert_eq!(config.interpreter.cygwin_path, CYGWIN_BASH);
        assert!(config.execution.capture_output);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "interpreter": {
                "path": "/usr/local/bin/bash"
            },
            "execution": {
                "capture_output": false
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.interpreter.path.as_deref(),
            Some("/usr/local/bin/bash")
        );
        assert_eq!(config.interpreter.wsl_path, WSL_BASH); // Default
        assert!(!config.execution.capture_output);
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/shell-bridge.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHELL_BRIDGE_INTERPRETER", "/opt/bash"),
            ("SHELL_BRIDGE_LOG_LEVEL", "debug"),
            ("RUST_LOG", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.interpreter.path.as_deref(), Some("/opt/bash"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_rust_log_fallback() {
        let mut config = Config::default();
        config.apply_vars(|key| (key == "RUST_LOG").then(|| "info".to_string()));
        assert_eq!(config.logging.level, "info");
        assert!(config.interpreter.path.is_none());
    }

    #[test]
    fn test_empty_interpreter_env_ignored() {
        let mut config = Config::default();
        config.apply_vars(|key| (key == "SHELL_BRIDGE_INTERPRETER").then(String::new));
        assert!(config.interpreter.path.is_none());
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            interpreter: Some("/bin/bash".to_string()),
            no_capture: true,
            log_level: Some("trace".to_string()),
            ..Args::default()
        };

        config.apply_args(&args);

        assert_eq!(config.interpreter.path.as_deref(), Some("/bin/bash"));
        assert!(!config.execution.capture_output);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_string_pretty(&Config::default()).unwrap();
        assert!(json.contains("\"wsl_path\""));
        assert!(json.contains("\"capture_output\""));
    }
}
