//! Riff Token 类型定义
//!
//! 封闭枚举，是样式层（类型 → 视觉样式）消费的唯一词汇表

use serde::{Deserialize, Serialize};

use crate::kit::lexer::TokenKindTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Comment,
    String,
    Char,
    RegexLiteral,
    Number,
    Operator,
    Builtin,
    Atom,
    Keyword,
    Identifier,
    /// 字符串/字符字面量内的转义序列和格式说明符
    Attribute,
    PlainText,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::RegexLiteral,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Builtin,
        TokenKind::Atom,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Attribute,
        TokenKind::PlainText,
    ];

    /// 稳定的小写名称（与序列化结果一致）
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::RegexLiteral => "regex_literal",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Builtin => "builtin",
            TokenKind::Atom => "atom",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Attribute => "attribute",
            TokenKind::PlainText => "plain_text",
        }
    }
}

impl TokenKindTrait for TokenKind {
    fn plain_text() -> Self {
        TokenKind::PlainText
    }
}
