//! API 错误类型
//!
//! 扫描本身不会失败；这里的错误只来自模式查找、状态栈恢复、配置加载和解释器调用。

use std::io;
use thiserror::Error;

pub use riff_config::ConfigError;
pub use riff_core::{ModeError, StackError};

/// Riff API 错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 未知的模式名或 MIME 类型
    #[error("{0}")]
    Mode(#[from] ModeError),

    /// 宿主交回的状态栈不合法
    #[error("{0}")]
    Stack(#[from] StackError),

    /// 配置加载失败
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// 全局配置重复初始化
    #[error("global configuration is already initialized")]
    AlreadyInitialized,
}

impl ApiError {
    /// 错误来源名称
    pub fn phase(&self) -> &'static str {
        match self {
            ApiError::Mode(_) => "mode",
            ApiError::Stack(_) => "stack",
            ApiError::Config(_) | ApiError::AlreadyInitialized => "config",
        }
    }
}

/// 解释器调用错误
///
/// 由 `Playground` 记录后吞掉，不会影响高亮
#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error("cannot start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("interpreter I/O failed: {0}")]
    Io(#[from] io::Error),

    /// 进程没有退出码（例如被信号终止）
    #[error("interpreter terminated without an exit status")]
    Terminated,

    #[error("interpreter unavailable: {0}")]
    Unavailable(String),
}
