//! Property tests: losslessness, termination and determinism.

use clex_lex::{
    reconstruct, scan, scan_all, scan_with, Operator, Punct, ScanConfig, Scanner, TokenKind,
};
use proptest::prelude::*;

fn lexeme() -> impl Strategy<Value = String> {
    let symbols: Vec<String> = Operator::ALL
        .iter()
        .map(|op| op.as_str().to_string())
        .chain(Punct::ALL.iter().map(|p| p.as_str().to_string()))
        .collect();
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,9}",
        "[0-9]{1,4}\\.[0-9]{1,4}([eE][+-]?[0-9]{1,2})?",
        "'([a-zA-Z0-9 ]|\\\\[ntr0'\\\\]|\\\\x[0-9a-f]{2})'",
        "\"([a-zA-Z0-9 ,.!/*]|\\\\[n\"\\\\])*\"",
        proptest::sample::select(symbols),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t\n]{1,3}",
        Just(" /* note */ ".to_string()),
        Just(" // line\n".to_string()),
        Just("\r\n".to_string()),
    ]
}

fn program() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec((lexeme(), separator()), 0..40).prop_map(|pieces| {
        let source = pieces.iter().map(|(l, s)| format!("{l}{s}")).collect();
        let lexemes = pieces.into_iter().map(|(l, _)| l).collect();
        (lexemes, source)
    })
}

proptest! {
    #[test]
    fn valid_programs_scan_losslessly((lexemes, source) in program()) {
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(reconstruct(&tokens), source.clone());
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));

        let scanned: Vec<&str> = tokens.iter().filter(|t| !t.is_eof()).map(|t| t.lexeme).collect();
        prop_assert_eq!(scanned, lexemes.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn spans_match_lexemes((_, source) in program()) {
        let tokens = scan(&source).unwrap();
        let mut previous_end = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.slice(&source), Some(token.lexeme));
            prop_assert!(token.span.start >= previous_end);
            previous_end = token.span.end;
        }
    }

    #[test]
    fn collect_mode_is_lossless_on_any_input(source in "\\PC{0,120}") {
        let output = scan_all(&source);
        prop_assert_eq!(output.reconstruct(), source.as_str());
        prop_assert_eq!(output.tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn collect_mode_is_lossless_on_ascii_noise(source in "[ -~\t\n]{0,200}") {
        let output = scan_all(&source);
        prop_assert_eq!(output.reconstruct(), source.clone());
        prop_assert!(output.errors.len() <= source.len());
    }

    #[test]
    fn fail_fast_agrees_with_collect(source in "[ -~\n]{0,80}") {
        let collected = scan_all(&source);
        match scan(&source) {
            Ok(tokens) => {
                prop_assert!(collected.is_ok());
                prop_assert_eq!(tokens, collected.tokens);
            },
            Err(err) => prop_assert_eq!(Some(err), collected.errors.first().copied()),
        }
    }

    #[test]
    fn scanning_is_deterministic(source in "[ -~\n]{0,80}") {
        let config = ScanConfig::collect();
        prop_assert_eq!(scan_with(&source, &config), scan_with(&source, &config));

        let mut scanner = Scanner::with_config(&source, config);
        let first: Vec<_> = scanner.by_ref().collect();
        scanner.restart();
        let second: Vec<_> = scanner.by_ref().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn integers_keep_their_value(value in any::<u64>()) {
        let source = value.to_string();
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Int(value));
    }
}
