//! 可恢复扫描测试：逐行扫描、分块扫描、状态栈序列化

mod common;

use common::{init_test_logger, scan, stack_of};
use riff_core::riff::{self, RiffStack};
use riff_core::{find_mode, LexState, StackError, TokenKind};

const PROGRAM: &str = "local s = \"a%d\\n\";
/* outer /* inner */
still comment */ x = y / 2;
r = /a\\/b/i
t = /open
print(s, 0x1.8p3, 1..5) // done
";

#[test]
fn test_scan_lines_matches_whole_scan() {
    init_test_logger();
    let whole = scan(PROGRAM);
    let lines = riff::scan_lines(PROGRAM, None);

    assert_eq!(lines.len(), PROGRAM.lines().count());
    let joined: Vec<_> = lines.iter().flat_map(|l| l.tokens.iter().copied()).collect();
    assert_eq!(joined, whole.tokens);
    assert_eq!(lines.last().map(|l| l.stack.clone()), Some(whole.stack));
}

#[test]
fn test_scan_lines_reports_stack_per_line() {
    let lines = riff::scan_lines(PROGRAM, None);
    assert_eq!(lines[0].stack.top(), LexState::Start);
    // 第二行停在嵌套注释的外层
    assert_eq!(
        lines[1].stack.as_slice(),
        &[LexState::Start, LexState::Comment]
    );
    assert_eq!(lines[2].stack.depth(), 1);
    // 行内未闭合的正则延续到下一行，在下一个 `/` 处结束
    assert_eq!(lines[4].stack.top(), LexState::RegexLiteral);
    assert_eq!(lines[5].tokens[0].kind, TokenKind::RegexLiteral);
    assert_eq!(
        lines[5].tokens[0].text(PROGRAM),
        "print(s, 0x1.8p3, 1..5) /"
    );
}

#[test]
fn test_line_spans_cover_input() {
    let lines = riff::scan_lines(PROGRAM, None);
    let mut offset = 0;
    for line in &lines {
        assert_eq!(line.span.start, offset);
        for token in &line.tokens {
            assert!(token.span.start >= line.span.start && token.span.end <= line.span.end);
        }
        offset = line.span.end;
    }
    assert_eq!(offset, PROGRAM.len());
}

#[test]
fn test_chunked_scan_carries_stack() {
    let first = riff::scan("x = /* note", None);
    assert_eq!(first.stack.top(), LexState::Comment);

    let second = riff::scan(" */ y", Some(first.stack));
    assert_eq!(second.tokens[0].kind, TokenKind::Comment);
    assert_eq!(second.stack.top(), LexState::Infix);
}

#[test]
fn test_regex_continues_across_chunks() {
    let first = riff::scan("/ab", None);
    assert_eq!(first.stack.top(), LexState::RegexLiteral);

    let input = "c/g + 1";
    let second = riff::scan(input, Some(first.stack));
    assert_eq!(second.tokens[0].kind, TokenKind::RegexLiteral);
    assert_eq!(second.tokens[0].text(input), "c/g");
    assert_eq!(second.tokens[2].kind, TokenKind::Operator);
}

#[test]
fn test_resume_inside_infix() {
    // 同一个 `/`，起始状态不同含义不同
    let from_start = riff::scan("/2/", None);
    assert_eq!(from_start.tokens[0].kind, TokenKind::RegexLiteral);

    let from_infix = riff::scan("/2/", Some(stack_of(&[LexState::Infix])));
    assert_eq!(from_infix.tokens[0].kind, TokenKind::Operator);
    assert_eq!(from_infix.tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_stack_json_round_trip() {
    let scan = riff::scan("f(x) /* a /* b", None);
    let json = serde_json::to_string(&scan.stack).unwrap();
    assert_eq!(json, r#"["infix","comment","comment"]"#);

    let restored: RiffStack = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, scan.stack);

    let rest = riff::scan(" */ */ / 2", Some(restored));
    // 两次出栈回到 Infix，`/` 是除号，`2` 又把栈底换成 Infix
    assert_eq!(rest.stack, stack_of(&[LexState::Infix]));
    assert!(rest
        .tokens
        .iter()
        .any(|t| t.kind == TokenKind::Operator));
}

#[test]
fn test_empty_stack_is_rejected() {
    let result: Result<RiffStack, _> = serde_json::from_str("[]");
    let err = result.unwrap_err();
    assert!(err.to_string().contains(&StackError::Empty.to_string()));
}

#[test]
fn test_comment_bottom_is_rejected() {
    let result: Result<RiffStack, _> = serde_json::from_str(r#"["comment"]"#);
    assert!(result.is_err());
    assert_eq!(
        RiffStack::try_from(vec![LexState::Comment, LexState::Comment]),
        Err(StackError::PushOnlyBottom("Comment".to_string()))
    );

    // 注释压在其他状态之上是正常的保存形式
    let nested: RiffStack = serde_json::from_str(r#"["start","comment"]"#).unwrap();
    assert_eq!(riff::scan("*/ 1", Some(nested)).stack.top(), LexState::Infix);
}

#[test]
fn test_mode_lookup_scans_like_riff() {
    let mode = find_mode("text/x-riff").unwrap();
    assert_eq!(mode.scan(PROGRAM, None), scan(PROGRAM));
}
