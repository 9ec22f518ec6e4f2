//! 测试辅助工具
//!
//! 扫描 Riff 源码并把结果转换成便于断言的形式

#![allow(dead_code)]

use riff_core::riff::{self, RiffScan, RiffStack};
use riff_core::{LexState, TokenKind};

/// 为当前测试初始化简单日志（仅打印到控制台）
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// 从新栈扫描
pub fn scan(input: &str) -> RiffScan {
    riff::scan(input, None)
}

/// (类型, 词素) 列表
pub fn lex(input: &str) -> Vec<(TokenKind, &str)> {
    scan(input)
        .tokens
        .iter()
        .map(|t| (t.kind, t.text(input)))
        .collect()
}

/// 只看类型
pub fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input).tokens.iter().map(|t| t.kind).collect()
}

/// 扫描后的栈顶状态
pub fn final_state(input: &str) -> LexState {
    scan(input).stack.top()
}

/// 由状态列表构造栈（第一个元素是栈底）
pub fn stack_of(states: &[LexState]) -> RiffStack {
    RiffStack::try_from(states.to_vec()).expect("non-empty state list")
}

/// token 区间首尾相接并覆盖整个输入，拼接词素得到原文
pub fn assert_total(input: &str) {
    let scan = scan(input);
    let mut offset = 0;
    let mut rebuilt = String::new();
    for token in &scan.tokens {
        assert_eq!(token.span.start, offset, "gap or overlap in {input:?}");
        assert!(!token.span.is_empty(), "empty token in {input:?}");
        rebuilt.push_str(token.text(input));
        offset = token.span.end;
    }
    assert_eq!(offset, input.len(), "input not fully covered: {input:?}");
    assert_eq!(rebuilt, input);
}
