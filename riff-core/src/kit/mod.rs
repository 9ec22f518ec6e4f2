//! 通用工具集

pub mod lexer;
