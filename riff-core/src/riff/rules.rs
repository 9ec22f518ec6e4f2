//! Riff 规则表
//!
//! `/` 的歧义靠状态解决：`Start` 期待操作数，`/` 开启正则字面量；
//! `Infix` 期待运算符，`/` 是除号。`Start` 中产生值的 token（数字、标识符、
//! 内置函数、`null`、字符串/字符/正则的结束）转到 `Infix`；`Infix` 中除空白、
//! 注释外的 token 一律回到 `Start`。右括号在两个状态下都转到 `Infix`。
//! 引导语句的关键字不转到 `Infix`：它们后面跟的是值。

use crate::kit::lexer::{rule, Action, RuleError, RuleSpec, RuleTable};

use super::literals;
use super::state::LexState;
use super::token_kind::TokenKind;

type Spec = RuleSpec<LexState, TokenKind>;

const BUILTINS: &str = concat!(
    r"(?:abs|atan|ceil|cos|exp|int|log|sin|sqrt|tan",
    r"|rand|srand",
    r"|byte|char|fmt|hex|lower|num|split|type|upper)\b",
);

const KEYWORDS: &str = concat!(
    r"(?:break|continue|exit|fn|local|print|return",
    r"|elif|else|if",
    r"|do|for|loop|while",
    r"|in)\b",
);

const IDENTIFIER: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// 多字符运算符在前
const OPERATORS: &str = concat!(
    r"\*\*=?|<<=?|>>=?|&&|\|\||\+\+|--|!~",
    r"|[-+*%&|^<>=!]=",
    r"|[-+*%&|^~!<>=?:#.,;]|[(\[{}]",
);

/// 行内完整的正则字面量：开头、正文（支持 `\/`）、结尾与标志
const REGEX_LITERAL: &str = r"/(?:\\.|[^\\/\n])*/[A-Za-z]*";

/// 行内没有结尾的正则：吃到行尾，换行及后续内容由 RegexLiteral 状态接手
const REGEX_OPENER: &str = r"/(?:\\.|[^\\/\n])*";

/// 空白与换行分开：除换行规则外没有规则会跨行，逐行扫描与整段扫描结果一致
const WHITESPACE: &str = r"[^\S\n]+";

const LINE_COMMENT: &str = r"//[^\n]*";

/// 兜底：匹配一个非换行字符，换行处为空匹配（执行器强制前进一格）
const ANY: &str = ".?";

/// 空白、换行与注释：不改变 Start/Infix
fn trivia() -> Vec<Spec> {
    vec![
        rule(WHITESPACE, TokenKind::PlainText, Action::Stay),
        rule(r"\n", TokenKind::PlainText, Action::Stay),
        rule(LINE_COMMENT, TokenKind::Comment, Action::Stay),
        rule(r"/\*", TokenKind::Comment, Action::Push(LexState::Comment)),
    ]
}

/// 操作数位置与运算符位置共享的规则
///
/// `value` 是产生值的 token 的转移，`next` 是其余 token 的转移：
/// 在 `Start` 中分别为转到 `Infix` 与保持，在 `Infix` 中都回到 `Start`
fn operand_rules(value: Action<LexState>, next: Action<LexState>) -> Vec<Spec> {
    let closer = Action::GoTo(LexState::Infix);

    let mut rules = vec![
        rule("\"", TokenKind::String, Action::GoTo(LexState::String)),
        rule("'", TokenKind::Char, Action::GoTo(LexState::Char)),
    ];
    rules.extend(
        literals::NUMBERS
            .iter()
            .map(|pattern| rule(*pattern, TokenKind::Number, value)),
    );
    rules.extend([
        // 必须在 FRACTION 之后：FRACTION 要求点后是数字，不会与 `..` 冲突
        rule(r"\.\.", TokenKind::Operator, next),
        rule(BUILTINS, TokenKind::Builtin, value),
        rule(r"null\b", TokenKind::Atom, value),
        rule(KEYWORDS, TokenKind::Keyword, next),
        rule(IDENTIFIER, TokenKind::Identifier, value),
        rule(r"[)\]]", TokenKind::Operator, closer),
        rule(OPERATORS, TokenKind::Operator, next),
        rule(ANY, TokenKind::PlainText, next),
    ]);
    rules
}

fn start_rules() -> Vec<Spec> {
    let mut rules = trivia();
    rules.extend([
        rule(REGEX_LITERAL, TokenKind::RegexLiteral, Action::GoTo(LexState::Infix)),
        rule(REGEX_OPENER, TokenKind::RegexLiteral, Action::GoTo(LexState::RegexLiteral)),
    ]);
    rules.extend(operand_rules(Action::GoTo(LexState::Infix), Action::Stay));
    rules
}

fn infix_rules() -> Vec<Spec> {
    let start = Action::GoTo(LexState::Start);
    let mut rules = trivia();
    rules.extend([
        rule("/=", TokenKind::Operator, start),
        rule("/", TokenKind::Operator, start),
    ]);
    rules.extend(operand_rules(start, start));
    rules
}

/// 块注释可嵌套：`/*` 压栈，`*/` 出栈回到调用者状态
fn comment_rules() -> Vec<Spec> {
    vec![
        rule(r"/\*", TokenKind::Comment, Action::Push(LexState::Comment)),
        rule(r"\*/", TokenKind::Comment, Action::Pop),
        rule(r"[^/*\n]+", TokenKind::Comment, Action::Stay),
        rule(ANY, TokenKind::Comment, Action::Stay),
    ]
}

fn string_rules() -> Vec<Spec> {
    vec![
        rule(literals::FORMAT_SPEC, TokenKind::Attribute, Action::Stay),
        rule(literals::ESCAPE, TokenKind::Attribute, Action::Stay),
        rule(literals::UNICODE_ESCAPE, TokenKind::Attribute, Action::Stay),
        rule("\"", TokenKind::String, Action::GoTo(LexState::Infix)),
        rule(r#"[^"\\%\n]+"#, TokenKind::String, Action::Stay),
        rule(ANY, TokenKind::String, Action::Stay),
    ]
}

fn char_rules() -> Vec<Spec> {
    vec![
        rule(literals::ESCAPE, TokenKind::Attribute, Action::Stay),
        rule(literals::UNICODE_ESCAPE, TokenKind::Attribute, Action::Stay),
        rule("'", TokenKind::Char, Action::GoTo(LexState::Infix)),
        rule(r"[^'\\\n]+", TokenKind::Char, Action::Stay),
        rule(ANY, TokenKind::Char, Action::Stay),
    ]
}

/// 跨行、跨块继续的正则字面量，直到未转义的 `/` 与标志
///
/// 换行单独成一个 token，其余规则都不跨行
fn regex_rules() -> Vec<Spec> {
    vec![
        rule(
            r"(?:\\.|[^\\/\n])*/[A-Za-z]*",
            TokenKind::RegexLiteral,
            Action::GoTo(LexState::Infix),
        ),
        rule(r"(?:\\.|[^\\/\n])+", TokenKind::RegexLiteral, Action::Stay),
        rule(r"\n", TokenKind::RegexLiteral, Action::Stay),
        rule(ANY, TokenKind::RegexLiteral, Action::Stay),
    ]
}

/// 构建完整的 Riff 规则表
pub fn build_rule_table() -> Result<RuleTable<LexState, TokenKind>, RuleError> {
    RuleTable::builder()
        .state(LexState::Start, start_rules())
        .state(LexState::Infix, infix_rules())
        .state(LexState::Comment, comment_rules())
        .state(LexState::String, string_rules())
        .state(LexState::Char, char_rules())
        .state(LexState::RegexLiteral, regex_rules())
        .build()
}
