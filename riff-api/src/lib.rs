//! Riff API - Highlighting entry points and the interpreter boundary
//!
//! Provides:
//! - Config driven highlighting (mode lookup, optional run coalescing)
//! - Resumable highlighting from a host-saved state stack
//! - The interpreter execution boundary and the playground runner
//!
//! For CLI convenience, this crate provides a global configuration singleton.
//! For library use, prefer passing `LexerConfig` explicitly.

use tracing::debug;

pub mod config;
pub mod error;
pub mod interpreter;
pub mod playground;

pub use config::{config as get_config, init as init_config, is_initialized, try_config};
pub use error::{ApiError, InterpreterError};
pub use interpreter::{ExecMode, Interpreter, OutputBuffer, OutputSink, ProcessInterpreter};
pub use playground::{Playground, RunReport};

// Re-export config types from riff_config
pub use riff_config::{
    ConfigError, InterpreterConfig, LexerConfig, LogConfig, LogLevel, PlaygroundConfig,
};

// Re-export core types
pub use riff_core;
pub use riff_core::riff::{RiffLineScan, RiffStack, RiffToken};
pub use riff_core::{coalesce, find_mode, LexState, LineIndex, Mode, SourcePosition, TokenKind};

/// Highlighting result for one piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Name of the mode that produced the tokens
    pub mode: &'static str,
    pub tokens: Vec<RiffToken>,
    /// Stack at the end of the text, to be handed back for the next chunk
    pub stack: RiffStack,
}

/// Highlight text from a fresh state
pub fn highlight(source: &str, config: &LexerConfig) -> Result<Highlight, ApiError> {
    highlight_from(source, config, None)
}

/// Highlight text continuing from a saved stack
pub fn highlight_from(
    source: &str,
    config: &LexerConfig,
    stack: Option<RiffStack>,
) -> Result<Highlight, ApiError> {
    let mode = find_mode(&config.mode)?;
    debug!(target: "riff::lexer", mode = mode.name(), len = source.len(), "Highlighting");

    let scan = mode.scan(source, stack);
    let tokens = if config.coalesce {
        coalesce(&scan.tokens)
    } else {
        scan.tokens
    };

    Ok(Highlight {
        mode: mode.name(),
        tokens,
        stack: scan.stack,
    })
}

/// Highlight text line by line, as an editor redraw would
pub fn highlight_lines(source: &str, config: &LexerConfig) -> Result<Vec<RiffLineScan>, ApiError> {
    let mode = find_mode(&config.mode)?;
    let mut lines = mode.scan_lines(source, None);
    if config.coalesce {
        for line in &mut lines {
            line.tokens = coalesce(&line.tokens);
        }
    }
    Ok(lines)
}

/// Rebuild a stack from saved states (bottom first)
pub fn restore_stack(states: Vec<LexState>) -> Result<RiffStack, ApiError> {
    Ok(RiffStack::try_from(states)?)
}
