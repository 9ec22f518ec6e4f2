//! Riff Config - Pure configuration data structures
//!
//! This crate contains only data structures and their JSON loading, no global
//! state. It serves as the shared configuration vocabulary across all Riff
//! playground crates.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; `silent` is accepted as an alias of `error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Global default level
    pub level: LogLevel,
    /// Lexer level (None means use `level`)
    pub lexer: Option<LogLevel>,
}

impl LogConfig {
    /// Effective level of the lexer target
    pub fn lexer_level(&self) -> LogLevel {
        self.lexer.unwrap_or(self.level)
    }
}

/// Lexer configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Mode name or MIME type the document is bound to
    pub mode: String,
    /// Merge adjacent tokens of equal kind before handing them out
    pub coalesce: bool,
}

/// External interpreter invocation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Interpreter executable
    pub program: String,
    /// Flag that introduces the program text
    pub eval_flag: String,
    /// Flag that switches the interpreter into disassembly
    pub disassemble_flag: String,
    /// Flag that prints the interpreter version
    pub version_flag: String,
}

/// Top level playground configuration (`riff.json`)
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub log: LogConfig,
    pub lexer: LexerConfig,
    pub interpreter: InterpreterConfig,
}

impl PlaygroundConfig {
    /// Parse configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            lexer: None,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            mode: "riff".to_string(),
            coalesce: false,
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: "riff".to_string(),
            eval_flag: "-e".to_string(),
            disassemble_flag: "-l".to_string(),
            version_flag: "-v".to_string(),
        }
    }
}
