//! Playground runner
//!
//! Wraps an [`Interpreter`] the way the browser playground drives the
//! compiled interpreter: the version is detected once up front, every run
//! starts from an empty output buffer, interpreter failures never escape,
//! and the wall time of each run is reported next to the version.

use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::interpreter::{ExecMode, Interpreter, OutputBuffer};

/// Result of one playground run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Everything the program printed, stdout and stderr interleaved by line
    pub output: String,
    /// Exit code, absent when the interpreter failed or was terminated
    pub exit_code: Option<i32>,
    /// Wall time of the run
    pub elapsed: Duration,
}

impl RunReport {
    /// Metrics line, e.g. `riff 0.4.1 / 0.012s`
    pub fn metrics(&self, version: &str) -> String {
        let seconds = self.elapsed.as_millis() as f64 / 1000.0;
        format!("riff {} / {}s", version, seconds)
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Interpreter session with a shared output buffer
pub struct Playground<I> {
    interpreter: I,
    version: String,
    output: OutputBuffer,
}

impl<I: Interpreter> Playground<I> {
    /// Create a playground, detecting the interpreter version once
    pub fn new(interpreter: I) -> Self {
        let version = match interpreter.version() {
            Ok(version) => {
                info!(target: "riff::playground", %version, "Riff interpreter version detected");
                version
            }
            Err(e) => {
                error!(target: "riff::playground", error = %e, "Error detecting Riff interpreter version");
                String::new()
            }
        };

        Self {
            interpreter,
            version,
            output: OutputBuffer::new(),
        }
    }

    /// Detected interpreter version (empty if detection failed)
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Output of the last run
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    /// Run a program
    pub fn run(&mut self, mode: ExecMode, source: &str) -> RunReport {
        self.output.clear();
        debug!(target: "riff::playground", ?mode, len = source.len(), "Running program");

        let start = Instant::now();
        let exit_code = match self.interpreter.execute(mode, source, &mut self.output) {
            Ok(code) => Some(code),
            Err(e) => {
                warn!(target: "riff::playground", error = %e, "Interpreter run failed");
                None
            }
        };
        let elapsed = start.elapsed();

        info!(target: "riff::playground",
            ?exit_code,
            elapsed_ms = elapsed.as_millis() as u64,
            "Run finished"
        );

        RunReport {
            output: self.output.as_str().to_string(),
            exit_code,
            elapsed,
        }
    }

    /// Metrics line for a report of this playground
    pub fn metrics(&self, report: &RunReport) -> String {
        report.metrics(&self.version)
    }
}
