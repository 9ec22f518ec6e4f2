//! Token 与区间

use serde::Serialize;
use std::ops::Range;

/// 输入中的字节区间 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// 平移整个区间（分块扫描时换算为绝对偏移）
    pub fn shift(&self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }
}

/// Token：类型加区间，不保存文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<K> {
    pub kind: K,
    pub span: Span,
}

impl<K> Token<K> {
    pub fn new(kind: K, span: Span) -> Self {
        Self { kind, span }
    }

    /// 从原始输入中取出词素
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.range()]
    }
}

/// 合并相邻且类型相同的 token
///
/// 编辑器渲染时连续同类 span 会被当成一段，这里给出同样的视图
pub fn coalesce<K: Copy + PartialEq>(tokens: &[Token<K>]) -> Vec<Token<K>> {
    let mut runs: Vec<Token<K>> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match runs.last_mut() {
            Some(last) if last.kind == token.kind && last.span.end == token.span.start => {
                last.span.end = token.span.end;
            }
            _ => runs.push(*token),
        }
    }
    runs
}
