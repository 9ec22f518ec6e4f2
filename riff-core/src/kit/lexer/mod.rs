//! 规则驱动的状态机词法分析器
//!
//! 设计目标：
//! - 规则即数据：每个状态一张有序规则表，先匹配者胜出（不是最长匹配）
//! - 全函数：任意输入都能终止，token 无缝覆盖整个输入
//! - 可恢复：调用方保存状态栈，逐行/分块继续扫描

pub mod lexer;
pub mod position;
pub mod rule;
pub mod stack;
pub mod token;
pub mod types;

pub use lexer::{LineScan, Lexer, Scan};
pub use position::{LineIndex, SourcePosition};
pub use rule::{rule, Action, Rule, RuleError, RuleSpec, RuleTable, RuleTableBuilder};
pub use stack::{StackError, StateStack};
pub use token::{coalesce, Span, Token};
pub use types::{StateTrait, TokenKindTrait};
