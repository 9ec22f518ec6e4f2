//! 字面量子扫描器的模式
//!
//! 数字、转义序列、格式说明符。都是普通正则，由规则表按顺序使用，
//! 规则表负责锚定到当前位置。

/// 二进制整数，`_` 可出现在数字之间
pub const BINARY_INT: &str = r"\b0[bB][01_]*";

/// 十六进制浮点数：可选小数部分，可选 `p` 指数
pub const HEX_FLOAT: &str =
    r"\b0[xX][0-9A-Fa-f_]*\.?[0-9A-Fa-f][0-9A-Fa-f_]*(?:[pP][+-]?[0-9][0-9_]*)?";

/// 十进制浮点数/整数：整数部分、小数点、指数都可选，但至少一个数字
pub const DECIMAL_FLOAT: &str = r"\b(?:[0-9][0-9_]*)?\.?[0-9][0-9_]*(?:[eE][+-]?[0-9][0-9_]*)?";

/// 只有小数部分的形式（`.5`）；要求点后紧跟数字，所以不会吞掉 `..`
pub const FRACTION: &str = r"\.[0-9][0-9_]*(?:[eE][+-]?[0-9][0-9_]*)?";

pub const HEX_INT: &str = r"\b0[xX][0-9A-Fa-f_]*";

pub const DECIMAL_INT: &str = r"\b[0-9][0-9_]*";

/// 数字规则，按优先级排列
pub const NUMBERS: [&str; 6] = [
    BINARY_INT,
    HEX_FLOAT,
    DECIMAL_FLOAT,
    FRACTION,
    HEX_INT,
    DECIMAL_INT,
];

/// 单字符转义、`\xHH` 字节转义、`\ddd` 八进制转义
pub const ESCAPE: &str = r#"\\[\\abefnrtv'"]|\\x[0-9A-Fa-f]{1,2}|\\[0-7]{1,3}"#;

/// `\uHHHH` 与 `\UHHHHHHHH`
pub const UNICODE_ESCAPE: &str = r"\\u[0-9A-Fa-f]{1,4}|\\U[0-9A-Fa-f]{1,8}";

/// printf 风格格式说明符：`%` + 标志 + 宽度 + 精度 + 转换字母
pub const FORMAT_SPEC: &str =
    r"%%|%[-+ 0]*(?:\*|[0-9]*)?(?:\.(?:[0-9]*|\*)?)?[aAcdeEfFgGiosxX]";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn anchored(pattern: &str) -> Regex {
        Regex::new(&format!("^(?:{pattern})")).unwrap()
    }

    fn matched<'a>(pattern: &str, input: &'a str) -> Option<&'a str> {
        anchored(pattern).find(input).map(|m| m.as_str())
    }

    #[test]
    fn test_binary() {
        assert_eq!(matched(BINARY_INT, "0b1010_0101;"), Some("0b1010_0101"));
        assert_eq!(matched(BINARY_INT, "0B12"), Some("0B1"));
    }

    #[test]
    fn test_hex_float() {
        assert_eq!(matched(HEX_FLOAT, "0x1.8p3"), Some("0x1.8p3"));
        assert_eq!(matched(HEX_FLOAT, "0x.8P-2"), Some("0x.8P-2"));
        assert_eq!(matched(HEX_FLOAT, "0xff+1"), Some("0xff"));
    }

    #[test]
    fn test_decimal_float() {
        assert_eq!(matched(DECIMAL_FLOAT, "3.14"), Some("3.14"));
        assert_eq!(matched(DECIMAL_FLOAT, "1e10"), Some("1e10"));
        assert_eq!(matched(DECIMAL_FLOAT, "6.02E+23"), Some("6.02E+23"));
        assert_eq!(matched(DECIMAL_FLOAT, "1_000.5"), Some("1_000.5"));
        // `1..5` 中只取 `1`
        assert_eq!(matched(DECIMAL_FLOAT, "1..5"), Some("1"));
    }

    #[test]
    fn test_decimal_float_needs_word_boundary() {
        assert_eq!(matched(DECIMAL_FLOAT, "..5"), None);
        assert_eq!(matched(DECIMAL_FLOAT, ".5"), None);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(matched(FRACTION, ".5e-3"), Some(".5e-3"));
        assert_eq!(matched(FRACTION, ".."), None);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(matched(ESCAPE, r"\n"), Some(r"\n"));
        assert_eq!(matched(ESCAPE, r#"\""#), Some(r#"\""#));
        assert_eq!(matched(ESCAPE, r"\x4g"), Some(r"\x4"));
        assert_eq!(matched(ESCAPE, r"\x41"), Some(r"\x41"));
        assert_eq!(matched(ESCAPE, r"\1234"), Some(r"\123"));
        assert_eq!(matched(ESCAPE, r"\8"), None);
        assert_eq!(matched(ESCAPE, r"\q"), None);
        assert_eq!(matched(UNICODE_ESCAPE, r"\u00e9!"), Some(r"\u00e9"));
        assert_eq!(matched(UNICODE_ESCAPE, r"\U0001F600"), Some(r"\U0001F600"));
    }

    #[test]
    fn test_format_spec() {
        assert_eq!(matched(FORMAT_SPEC, "%d"), Some("%d"));
        assert_eq!(matched(FORMAT_SPEC, "%%"), Some("%%"));
        assert_eq!(matched(FORMAT_SPEC, "%-08.3f"), Some("%-08.3f"));
        assert_eq!(matched(FORMAT_SPEC, "%*.*s"), Some("%*.*s"));
        assert_eq!(matched(FORMAT_SPEC, "% x"), Some("% x"));
        assert_eq!(matched(FORMAT_SPEC, "%y"), None);
    }
}
