//! 模式注册表
//!
//! 文档类型注册表按名称或 MIME 类型选择词法模式。

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::kit::lexer::{LineScan, Lexer, RuleTable, Scan, StateStack};
use crate::riff::{self, LexState, TokenKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown mode or MIME type '{0}'")]
    Unknown(String),
}

/// 一个已注册的词法模式
#[derive(Debug, Clone, Copy)]
pub struct Mode {
    name: &'static str,
    mime: &'static str,
    table: &'static RuleTable<LexState, TokenKind>,
}

impl Mode {
    pub fn new(
        name: &'static str,
        mime: &'static str,
        table: &'static RuleTable<LexState, TokenKind>,
    ) -> Self {
        Self { name, mime, table }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn lexer(&self) -> Lexer<'static, LexState, TokenKind> {
        Lexer::new(self.table)
    }

    pub fn scan(
        &self,
        input: &str,
        initial: Option<StateStack<LexState>>,
    ) -> Scan<LexState, TokenKind> {
        self.lexer().scan(input, initial)
    }

    pub fn scan_lines(
        &self,
        input: &str,
        initial: Option<StateStack<LexState>>,
    ) -> Vec<LineScan<LexState, TokenKind>> {
        self.lexer().scan_lines(input, initial)
    }
}

/// 名称/MIME → 模式
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: HashMap<&'static str, Mode>,
    mimes: HashMap<&'static str, &'static str>,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册模式，同时绑定它的 MIME 类型
    pub fn register(&mut self, mode: Mode) {
        debug!(target: "riff::registry", name = mode.name, mime = mode.mime, "Registering mode");
        self.mimes.insert(mode.mime, mode.name);
        self.modes.insert(mode.name, mode);
    }

    /// 为已有模式追加 MIME 别名
    pub fn define_mime(&mut self, mime: &'static str, name: &'static str) {
        self.mimes.insert(mime, name);
    }

    /// 按名称或 MIME 类型查找
    pub fn get(&self, key: &str) -> Result<&Mode, ModeError> {
        self.modes
            .get(key)
            .or_else(|| self.mimes.get(key).and_then(|name| self.modes.get(name)))
            .ok_or_else(|| ModeError::Unknown(key.to_string()))
    }

    /// 已注册的模式名（排序）
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

static REGISTRY: Lazy<ModeRegistry> = Lazy::new(|| {
    let mut registry = ModeRegistry::new();
    registry.register(Mode::new(riff::MODE_NAME, riff::MIME_TYPE, &riff::RULES));
    registry
});

/// 内置模式的全局注册表
pub fn registry() -> &'static ModeRegistry {
    &REGISTRY
}

/// 在全局注册表中查找模式
pub fn find_mode(key: &str) -> Result<&'static Mode, ModeError> {
    registry().get(key)
}
