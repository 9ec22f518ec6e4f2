//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 按目标（词法、注册表、playground、CLI）分别控制级别。

use riff_config::{LogConfig, LogLevel};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 配置级别 → tracing 级别
pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 各目标的过滤规则
pub fn targets(log_config: &LogConfig) -> Targets {
    let global = to_level(log_config.level);
    Targets::new()
        .with_default(global)
        .with_target("riff::lexer", to_level(log_config.lexer_level()))
        .with_target("riff::registry", global)
        .with_target("riff::playground", global)
        .with_target("riff::cli", global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 日志写到 stderr，stdout 留给命令输出；指定文件时同时追加写入文件
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = targets(log_config);
    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    if let Some(path) = file {
        let file_handle = OpenOptions::new().create(true).append(true).open(path)?;
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(console_layer).init();
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
