//! 状态机执行器
//!
//! 一个通用循环：取栈顶状态的规则表，第一条匹配的规则产出 token，
//! 然后执行它的转移动作。空匹配与无匹配都强制前进一个字符，保证终止。

use tracing::{debug, trace};

use super::rule::{Action, Rule, RuleTable};
use super::stack::StateStack;
use super::token::{Span, Token};
use super::types::{StateTrait, TokenKindTrait};

/// 一次扫描的结果
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<S, K> {
    pub tokens: Vec<Token<K>>,
    /// 扫描结束时的状态栈，可交给下一次扫描继续
    pub stack: StateStack<S>,
}

/// 逐行扫描中一行的结果
#[derive(Debug, Clone, PartialEq)]
pub struct LineScan<S, K> {
    /// 行号，0-based
    pub line: usize,
    /// 该行（含换行符）在输入中的区间
    pub span: Span,
    /// 使用绝对偏移的 token
    pub tokens: Vec<Token<K>>,
    /// 行尾的状态栈
    pub stack: StateStack<S>,
}

/// 规则驱动的词法分析器
pub struct Lexer<'t, S, K> {
    table: &'t RuleTable<S, K>,
}

impl<'t, S, K> Lexer<'t, S, K>
where
    S: StateTrait,
    K: TokenKindTrait,
{
    pub fn new(table: &'t RuleTable<S, K>) -> Self {
        Self { table }
    }

    /// 扫描整段输入
    ///
    /// `initial` 为空时从只含栈底状态的新栈开始
    pub fn scan(&self, input: &str, initial: Option<StateStack<S>>) -> Scan<S, K> {
        let mut stack = initial.unwrap_or_default();
        let mut tokens = Vec::new();
        let mut offset = 0;

        trace!(target: "riff::lexer", len = input.len(), stack = ?stack.as_slice(), "Scanning input");

        while offset < input.len() {
            let rest = &input[offset..];
            let state = stack.top();

            let (kind, len, action) = match self.select(state, rest) {
                Some((rule, 0)) => {
                    // 空匹配：强制消费一个字符
                    let len = unit_len(rest);
                    trace!(target: "riff::lexer", ?state, offset, "Empty match, forcing one unit");
                    (rule.kind(), len, rule.action())
                }
                Some((rule, len)) => (rule.kind(), len, rule.action()),
                None => {
                    debug!(target: "riff::lexer", ?state, offset, "No rule matched, consuming one unit");
                    (K::plain_text(), unit_len(rest), Action::Stay)
                }
            };

            let span = Span::new(offset, offset + len);
            trace!(target: "riff::lexer",
                ?state,
                ?kind,
                start = span.start,
                end = span.end,
                "Produced token"
            );
            tokens.push(Token::new(kind, span));
            offset = span.end;

            match action {
                Action::Push(next) => {
                    debug!(target: "riff::lexer", from = ?state, to = ?next, depth = stack.depth() + 1, "Push state")
                }
                Action::Pop => {
                    debug!(target: "riff::lexer", from = ?state, depth = stack.depth(), "Pop state")
                }
                _ => {}
            }
            stack.apply(action);
        }

        Scan { tokens, stack }
    }

    /// 逐行扫描，行与行之间传递状态栈
    ///
    /// 每行包含其换行符；token 偏移换算为整段输入的绝对偏移
    pub fn scan_lines(&self, input: &str, initial: Option<StateStack<S>>) -> Vec<LineScan<S, K>> {
        let mut stack = initial.unwrap_or_default();
        let mut offset = 0;
        let mut lines = Vec::new();

        for (line, text) in input.split_inclusive('\n').enumerate() {
            let scan = self.scan(text, Some(stack));
            let tokens = scan
                .tokens
                .into_iter()
                .map(|token| Token::new(token.kind, token.span.shift(offset)))
                .collect();

            stack = scan.stack.clone();
            lines.push(LineScan {
                line,
                span: Span::new(offset, offset + text.len()),
                tokens,
                stack: scan.stack,
            });
            offset += text.len();
        }

        lines
    }

    /// 当前状态中第一条能匹配的规则及其匹配长度
    fn select(&self, state: S, rest: &str) -> Option<(&'t Rule<S, K>, usize)> {
        self.table
            .rules(state)
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule, len)))
    }
}

/// 一个输入单位：下一个字符的 UTF-8 长度
fn unit_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}
