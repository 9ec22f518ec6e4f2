//! Token 列表的文本/JSON 渲染

use riff_core::riff::{RiffLineScan, RiffStack, RiffToken};
use riff_core::{LineIndex, TokenKind};
use serde::Serialize;

/// 一个 token 的可读形式
#[derive(Debug, Serialize)]
pub struct TokenRow<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub utf16_column: usize,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LineReport<'a> {
    pub line: usize,
    pub tokens: Vec<TokenRow<'a>>,
    pub stack: &'a RiffStack,
}

pub fn rows<'a>(source: &'a str, index: &LineIndex, tokens: &[RiffToken]) -> Vec<TokenRow<'a>> {
    tokens
        .iter()
        .map(|token| {
            let pos = index.position(source, token.span.start);
            TokenRow {
                kind: token.kind,
                start: token.span.start,
                end: token.span.end,
                line: pos.line,
                column: pos.column,
                utf16_column: pos.utf16_column,
                text: token.text(source),
            }
        })
        .collect()
}

pub fn line_reports<'a>(
    source: &'a str,
    index: &LineIndex,
    lines: &'a [RiffLineScan],
) -> Vec<LineReport<'a>> {
    lines
        .iter()
        .map(|line| LineReport {
            line: line.line + 1,
            tokens: rows(source, index, &line.tokens),
            stack: &line.stack,
        })
        .collect()
}

/// `line:col kind "lexeme"`
pub fn format_row(row: &TokenRow<'_>) -> String {
    format!("{}:{} {} {:?}", row.line, row.column, row.kind.name(), row.text)
}

/// `[start, comment]`
pub fn format_stack(stack: &RiffStack) -> String {
    let names: Vec<String> = stack
        .as_slice()
        .iter()
        .map(|state| state.name().to_string())
        .collect();
    format!("[{}]", names.join(", "))
}
