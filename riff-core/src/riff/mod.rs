//! Riff 语言模式
//!
//! 在通用规则执行器之上定义 Riff 的 token 类型、词法状态和规则表。
//!
//! ```
//! use riff_core::riff::{self, TokenKind};
//!
//! let scan = riff::scan("1/2", None);
//! let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Number, TokenKind::Operator, TokenKind::Number]);
//! ```

pub mod literals;
pub mod rules;
pub mod state;
pub mod token_kind;

use once_cell::sync::Lazy;

use crate::kit::lexer::{LineScan, Lexer, RuleTable, Scan, StateStack, Token};

pub use state::LexState;
pub use token_kind::TokenKind;

/// 模式名称
pub const MODE_NAME: &str = "riff";

/// 模式绑定的 MIME 类型
pub const MIME_TYPE: &str = "text/x-riff";

pub type RiffToken = Token<TokenKind>;
pub type RiffStack = StateStack<LexState>;
pub type RiffScan = Scan<LexState, TokenKind>;
pub type RiffLineScan = LineScan<LexState, TokenKind>;

/// 编译一次，全局共享；模式都是常量，构建失败即为程序错误
pub static RULES: Lazy<RuleTable<LexState, TokenKind>> =
    Lazy::new(|| rules::build_rule_table().expect("built-in Riff rule table must compile"));

/// Riff 词法分析器
pub fn lexer() -> Lexer<'static, LexState, TokenKind> {
    Lexer::new(&RULES)
}

/// 扫描一段 Riff 源码
pub fn scan(input: &str, initial: Option<RiffStack>) -> RiffScan {
    lexer().scan(input, initial)
}

/// 逐行扫描 Riff 源码
pub fn scan_lines(input: &str, initial: Option<RiffStack>) -> Vec<RiffLineScan> {
    lexer().scan_lines(input, initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        scan(input, None)
            .tokens
            .iter()
            .map(|t| (t.kind, t.text(input)))
            .collect()
    }

    #[test]
    fn test_basic_statement() {
        assert_eq!(
            lex("local x = abs(-1);"),
            vec![
                (TokenKind::Keyword, "local"),
                (TokenKind::PlainText, " "),
                (TokenKind::Identifier, "x"),
                (TokenKind::PlainText, " "),
                (TokenKind::Operator, "="),
                (TokenKind::PlainText, " "),
                (TokenKind::Builtin, "abs"),
                (TokenKind::Operator, "("),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "1"),
                (TokenKind::Operator, ")"),
                (TokenKind::Operator, ";"),
            ]
        );
    }

    #[test]
    fn test_final_state_after_value() {
        assert_eq!(scan("x", None).stack.top(), LexState::Infix);
        assert_eq!(scan("x;", None).stack.top(), LexState::Start);
        assert_eq!(scan("return", None).stack.top(), LexState::Start);
    }
}
