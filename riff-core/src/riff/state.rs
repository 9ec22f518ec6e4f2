//! Riff 词法状态

use serde::{Deserialize, Serialize};

use crate::kit::lexer::StateTrait;

/// 词法状态
///
/// `Start` 期待操作数，`Infix` 期待运算符；两者的区别决定 `/` 是除号还是正则开头
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexState {
    Start,
    Infix,
    Comment,
    String,
    Char,
    RegexLiteral,
}

impl LexState {
    /// 与序列化形式一致的名称
    pub fn name(&self) -> &'static str {
        match self {
            LexState::Start => "start",
            LexState::Infix => "infix",
            LexState::Comment => "comment",
            LexState::String => "string",
            LexState::Char => "char",
            LexState::RegexLiteral => "regex_literal",
        }
    }
}

impl From<LexState> for usize {
    fn from(state: LexState) -> usize {
        state as usize
    }
}

impl StateTrait for LexState {
    fn all() -> &'static [Self] {
        &[
            LexState::Start,
            LexState::Infix,
            LexState::Comment,
            LexState::String,
            LexState::Char,
            LexState::RegexLiteral,
        ]
    }

    fn base() -> Self {
        LexState::Start
    }

    fn is_push_only(self) -> bool {
        self == LexState::Comment
    }
}
