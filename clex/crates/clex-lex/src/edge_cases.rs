//! Edge case tests for clex-lex

use crate::{reconstruct, scan, scan_all, LexErrorKind, ScanConfig, Scanner, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::Eof)
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(kinds("").is_empty());
}

#[test]
fn test_edge_whitespace_only() {
    let tokens = scan(" \n\t ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span.line, 2);
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(kinds("x"), vec![TokenKind::Ident]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let source = format!("int {} = 1;", name);
    let tokens = scan(&source).unwrap();
    assert_eq!(tokens[1].lexeme, name);
}

#[test]
fn test_edge_underscore_alone() {
    assert_eq!(kinds("_"), vec![TokenKind::Ident]);
}

#[test]
fn test_edge_no_spaces() {
    assert_eq!(kinds("a=b+c*2;").len(), 8);
}

#[test]
fn test_edge_nested_delimiters() {
    let t = kinds("((()))");
    assert_eq!(t.len(), 6);
}

#[test]
fn test_edge_zero_leading_float() {
    assert_eq!(kinds("0.5"), vec![TokenKind::Float(0.5)]);
}

#[test]
fn test_edge_member_access_after_identifier() {
    let t = kinds("s.x");
    assert_eq!(t.len(), 3);
}

#[test]
fn test_edge_char_literal_containing_double_quote() {
    let tokens = scan("'\"'").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Char);
}

#[test]
fn test_edge_string_containing_comment_markers() {
    let tokens = scan("\"/* not a comment */ // nor this\"").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Str);
}

#[test]
fn test_edge_comment_containing_quote() {
    assert!(kinds("/* \" */ // '").is_empty());
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = scan("int a;\r\nint b;\r\n").unwrap();
    assert_eq!(tokens[3].span.line, 2);
    assert_eq!(tokens[3].span.column, 1);
}

#[test]
fn test_edge_nul_character_unrecognized() {
    let err = scan("a\0b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('\0'));
}

#[test]
fn test_edge_unsupported_symbols() {
    for c in ['@', '#', '$', '`', '~', '^', '?', '&', '|', '\\'] {
        let err = scan(&c.to_string()).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter(c));
    }
}

#[test]
fn test_edge_unrecognized_position() {
    let err = scan("a = @b;").unwrap_err();
    assert_eq!(err.span.start, 4);
    assert_eq!((err.span.line, err.span.column), (1, 5));
}

#[test]
fn test_edge_collect_every_error_kind() {
    let source = "@ 3. 'ab' \"open /* never";
    let output = scan_all(source);
    let kinds: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LexErrorKind::UnrecognizedCharacter('@'),
            LexErrorKind::MalformedNumber,
            LexErrorKind::MalformedCharLiteral,
            LexErrorKind::UnterminatedString,
        ]
    );
    assert_eq!(output.reconstruct(), source);
}

#[test]
fn test_edge_collect_unterminated_comment() {
    let output = scan_all("x /* y");
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedComment);
    assert_eq!(output.token_count(), 1);
    assert_eq!(output.reconstruct(), "x /* y");
}

#[test]
fn test_edge_collect_adjacent_errors() {
    let output = scan_all("@@x");
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.errors[1].span.start, 1);
    assert_eq!(output.tokens[0].leading, "@@");
}

#[test]
fn test_edge_unicode_inside_string_and_comment() {
    let source = "string s = \"编译器\"; // コメント\n";
    let tokens = scan(source).unwrap();
    assert_eq!(tokens[3].lexeme, "\"编译器\"");
    assert_eq!(tokens[4].span.column, 17);
    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn test_edge_unicode_identifiers_opt_in() {
    let source = "int 变量 = 1;";
    assert!(scan(source).is_err());
    let config = ScanConfig::default().with_unicode_identifiers(true);
    let count = Scanner::with_config(source, config)
        .map(|t| t.unwrap())
        .filter(|t| t.kind == TokenKind::Ident)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_edge_max_int_then_overflow() {
    assert_eq!(
        kinds("18446744073709551615"),
        vec![TokenKind::Int(u64::MAX)]
    );
    assert!(scan("99999999999999999999").is_err());
}
