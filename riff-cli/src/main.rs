//! Riff Playground CLI - Command line interface
//!
//! Token dump for the Riff lexer and a runner for the external interpreter.
//! All settings come from `riff.json`; command flags override them.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod logging;
mod output;

use crate::logging::LogFormat;
use crate::output::{format_row, format_stack, line_reports, rows};
use riff_api::{
    get_config, highlight, highlight_lines, init_config, ExecMode, LexerConfig, LineIndex,
    LogLevel, Playground, PlaygroundConfig, ProcessInterpreter,
};

#[derive(Parser)]
#[command(
    name = "riff-playground",
    about = "Riff playground - syntax token dump and interpreter runner",
    version
)]
struct Cli {
    /// Configuration file path (missing file means defaults)
    #[arg(long, global = true, value_name = "CONFIG", default_value = "riff.json")]
    config: PathBuf,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level: "silent", "error", "warn", "info", "debug", "trace" (overrides the config)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a source file
    Tokens {
        file: PathBuf,
        /// Emit JSON instead of text rows
        #[arg(long)]
        json: bool,
        /// Scan line by line and report the stack after each line
        #[arg(long)]
        lines: bool,
        /// Merge adjacent tokens of the same kind
        #[arg(long)]
        coalesce: bool,
        /// Mode name or MIME type (overrides the config)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Run a source file through the interpreter
    Run {
        file: PathBuf,
        /// Print the bytecode disassembly instead of executing
        #[arg(long)]
        disassemble: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(name) = &cli.log_level {
        match LogLevel::parse(name) {
            Some(level) => config.log.level = level,
            None => {
                eprintln!("Error: Unknown log level '{}'", name);
                process::exit(1);
            }
        }
    }

    if let Err(e) = logging::init_with_file(&config.log, cli.log_format, cli.log_file.as_ref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        process::exit(1);
    }
    debug!(target: "riff::cli", config = %cli.config.display(), "Configuration loaded");

    // Initialize API config (global singleton for convenience)
    if let Err(e) = init_config(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let code = match cli.command {
        Command::Tokens {
            file,
            json,
            lines,
            coalesce,
            mode,
        } => {
            let lexer = LexerConfig {
                mode: mode.unwrap_or_else(|| get_config().lexer.mode.clone()),
                coalesce: coalesce || get_config().lexer.coalesce,
            };
            handle_tokens(&file, &lexer, json, lines)
        }
        Command::Run { file, disassemble } => {
            let mode = if disassemble {
                ExecMode::Disassemble
            } else {
                ExecMode::Execute
            };
            handle_run(&file, mode)
        }
    };

    process::exit(code);
}

/// Load the config file; a missing file falls back to defaults
fn load_config(path: &Path) -> Result<PlaygroundConfig, String> {
    if !path.exists() {
        return Ok(PlaygroundConfig::default());
    }
    PlaygroundConfig::load(path).map_err(|e| e.to_string())
}

fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read source file '{}': {}", path.display(), e))
}

fn handle_tokens(path: &Path, lexer: &LexerConfig, json: bool, by_line: bool) -> i32 {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let index = LineIndex::new(&source);

    let rendered = if by_line {
        highlight_lines(&source, lexer).map(|lines| {
            let reports = line_reports(&source, &index, &lines);
            if json {
                to_json(&reports)
            } else {
                let mut text = String::new();
                for report in &reports {
                    for row in &report.tokens {
                        text.push_str(&format_row(row));
                        text.push('\n');
                    }
                    text.push_str(&format!(
                        "-- line {} stack {}\n",
                        report.line,
                        format_stack(report.stack)
                    ));
                }
                text
            }
        })
    } else {
        highlight(&source, lexer).map(|result| {
            let rows = rows(&source, &index, &result.tokens);
            if json {
                to_json(&serde_json::json!({
                    "mode": result.mode,
                    "tokens": rows,
                    "stack": result.stack,
                }))
            } else {
                let mut text = String::new();
                for row in &rows {
                    text.push_str(&format_row(row));
                    text.push('\n');
                }
                text.push_str(&format!("-- stack {}\n", format_stack(&result.stack)));
                text
            }
        })
    };

    match rendered {
        Ok(text) => {
            print!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_run(path: &Path, mode: ExecMode) -> i32 {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let interpreter = ProcessInterpreter::new(get_config().interpreter.clone());
    info!(target: "riff::cli", program = interpreter.program(), ?mode, "Starting run");

    let mut playground = Playground::new(interpreter);
    let report = playground.run(mode, &source);

    print!("{}", report.output);
    println!("{}", playground.metrics(&report));

    report.exit_code.unwrap_or(1)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(mut text) => {
            text.push('\n');
            text
        }
        Err(e) => format!("{{\"error\":\"{}\"}}\n", e),
    }
}
