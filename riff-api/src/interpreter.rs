//! 解释器执行边界
//!
//! 高亮与执行互不依赖：解释器的输出走旁路的 `OutputSink`，
//! 返回值只有退出码。

use riff_config::InterpreterConfig;
use std::io::{self, BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

use crate::error::InterpreterError;

/// 执行模式（整数值即解释器入口的 mode 参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExecMode {
    /// 只输出字节码反汇编
    Disassemble = 0,
    /// 运行程序
    Execute = 1,
}

impl ExecMode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ExecMode::Disassemble),
            1 => Some(ExecMode::Execute),
            _ => None,
        }
    }
}

/// 输出旁路
pub trait OutputSink {
    /// 标准输出的一行（不含换行符）
    fn print(&mut self, text: &str);
    /// 标准错误的一行（不含换行符）
    fn print_err(&mut self, text: &str);
}

/// 文本累加器：两个通道写入同一个缓冲区，每行追加 `\n`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl OutputSink for OutputBuffer {
    fn print(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn print_err(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }
}

/// Riff 解释器
pub trait Interpreter {
    /// 解释器版本字符串
    fn version(&self) -> Result<String, InterpreterError>;

    /// 执行程序，输出写入 `sink`，返回退出码
    fn execute(
        &self,
        mode: ExecMode,
        source: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<i32, InterpreterError>;
}

/// 以子进程方式调用外部 `riff` 可执行文件
#[derive(Debug, Clone)]
pub struct ProcessInterpreter {
    config: InterpreterConfig,
}

impl ProcessInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn program(&self) -> &str {
        &self.config.program
    }

    /// 命令行参数：反汇编标志（可选）、求值标志、程序文本
    pub fn args(&self, mode: ExecMode, source: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if mode == ExecMode::Disassemble {
            args.push(self.config.disassemble_flag.clone());
        }
        args.push(self.config.eval_flag.clone());
        args.push(source.to_string());
        args
    }

    fn spawn_error(&self, source: std::io::Error) -> InterpreterError {
        InterpreterError::Spawn {
            program: self.config.program.clone(),
            source,
        }
    }
}

impl Interpreter for ProcessInterpreter {
    fn version(&self) -> Result<String, InterpreterError> {
        let output = Command::new(&self.config.program)
            .arg(&self.config.version_flag)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_version(&stdout).ok_or_else(|| {
            InterpreterError::Unavailable(format!(
                "'{} {}' printed no version",
                self.config.program, self.config.version_flag
            ))
        })
    }

    fn execute(
        &self,
        mode: ExecMode,
        source: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<i32, InterpreterError> {
        debug!(target: "riff::playground", program = %self.config.program, ?mode, "Spawning interpreter");

        let mut child = Command::new(&self.config.program)
            .args(self.args(mode, source))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // stderr 在另一个线程里收集，避免两个管道互相阻塞
        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut bytes = Vec::new();
                pipe.read_to_end(&mut bytes).map(|_| bytes)
            })
        });

        // 读错误先记下：无论如何都要收完 stderr 并回收子进程
        let mut failure: Option<InterpreterError> = None;
        if let Some(stdout) = child.stdout.take() {
            if let Err(e) = stream_lines(stdout, sink) {
                failure = Some(e.into());
            }
        }

        if let Some(handle) = stderr {
            match handle.join() {
                Ok(Ok(bytes)) => {
                    for line in String::from_utf8_lossy(&bytes).lines() {
                        sink.print_err(line);
                    }
                }
                Ok(Err(e)) => {
                    failure.get_or_insert(e.into());
                }
                Err(_) => {
                    failure.get_or_insert(InterpreterError::Unavailable(
                        "stderr reader panicked".to_string(),
                    ));
                }
            }
        }

        let status = child.wait()?;
        if let Some(e) = failure {
            debug!(target: "riff::playground", error = %e, "Interpreter output incomplete");
            return Err(e);
        }
        status.code().ok_or(InterpreterError::Terminated)
    }
}

/// 逐行转发标准输出；非 UTF-8 字节按替换字符解码
fn stream_lines<R: Read>(reader: R, sink: &mut dyn OutputSink) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        sink.print(&String::from_utf8_lossy(&line));
    }
}

/// 版本输出第一行的最后一个词，例如 `riff 0.4.1` → `0.4.1`
fn parse_version(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .and_then(|line| line.split_whitespace().last())
        .map(str::to_string)
}
