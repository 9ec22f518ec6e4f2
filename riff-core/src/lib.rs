//! Riff Core - Syntax core (pure logic, no IO)
//!
//! Contains the generic rule-driven lexer kit, the Riff mode built on top of
//! it, and the registry that binds modes to names and MIME types.
//!
//! Scanning is total: every input produces a token stream covering it
//! exactly, so nothing in the scanning path returns an error.

pub mod kit;
pub mod registry;
pub mod riff;

// Re-export common types
pub use kit::lexer::{
    coalesce, Action, LineIndex, LineScan, Lexer, Rule, RuleError, RuleTable, Scan,
    SourcePosition, Span, StackError, StateStack, Token,
};
pub use registry::{find_mode, registry, Mode, ModeError, ModeRegistry};
pub use riff::{LexState, TokenKind};
