//! String and character literal lexing.
//!
//! Both literal kinds keep their quotes and escapes in the lexeme. Escapes
//! are only stepped over here, never decoded.

use crate::error::{LexErrorKind, Result};
use crate::lexer::{Scanner, State};
use crate::token::TokenKind;
use crate::unicode::is_octal_digit;

impl<'src> Scanner<'src> {
    /// Lexes a string literal.
    ///
    /// Runs to the first unescaped `"`. Newlines may appear inside. If the
    /// input ends first the error points at the opening quote and the
    /// whole rest of the source is consumed.
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind> {
        self.state = State::InStringLiteral;
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(TokenKind::Str);
                },
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }
    }

    /// Lexes a character literal.
    ///
    /// Exactly one character or escape sequence must sit between the
    /// quotes. An empty or multi-character literal is rejected after its
    /// closing quote. A literal cut short by a newline or the end of input
    /// is rejected up to that point, leaving the newline unconsumed.
    pub(crate) fn lex_char(&mut self) -> Result<TokenKind> {
        self.state = State::InCharLiteral;
        self.cursor.advance();

        let mut units = 0usize;
        let mut bad_escape = false;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::MalformedCharLiteral));
            }
            match self.cursor.current_char() {
                '\n' => return Err(self.error(LexErrorKind::MalformedCharLiteral)),
                '\'' => {
                    self.cursor.advance();
                    break;
                },
                '\\' => {
                    bad_escape |= !self.skip_escape();
                    units += 1;
                },
                _ => {
                    self.cursor.advance();
                    units += 1;
                },
            }
        }

        if units == 1 && !bad_escape {
            Ok(TokenKind::Char)
        } else {
            Err(self.error(LexErrorKind::MalformedCharLiteral))
        }
    }

    /// Steps over one escape sequence starting at `\`.
    ///
    /// Handles `\` + one character, `\x` + hex digits and `\` + up to three
    /// octal digits. A newline after the backslash is left in place.
    /// Returns false for a `\x` with no hex digits.
    fn skip_escape(&mut self) -> bool {
        self.cursor.advance();
        match self.cursor.current_char() {
            '\n' => {},
            'x' => {
                self.cursor.advance();
                if !self.cursor.current_char().is_ascii_hexdigit() {
                    return false;
                }
                self.cursor.eat_while(|c| c.is_ascii_hexdigit());
            },
            c if is_octal_digit(c) => {
                for _ in 0..3 {
                    if !is_octal_digit(self.cursor.current_char()) {
                        break;
                    }
                    self.cursor.advance();
                }
            },
            _ => self.cursor.advance(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ScanConfig;
    use crate::error::{LexError, LexErrorKind};
    use crate::token::{Token, TokenKind};
    use crate::Scanner;
    use clex_util::Span;

    fn lex_one(source: &str) -> Result<Token<'_>, LexError> {
        Scanner::new(source).next_token()
    }

    #[test]
    fn test_simple_string() {
        let token = lex_one("\"Hello World\"").unwrap();
        assert_eq!(token.kind, TokenKind::Str);
        assert_eq!(token.lexeme, "\"Hello World\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lex_one("\"\"").unwrap().lexeme, "\"\"");
    }

    #[test]
    fn test_string_escapes_kept_raw() {
        let token = lex_one(r#""a\"b\\" x"#).unwrap();
        assert_eq!(token.lexeme, r#""a\"b\\""#);
    }

    #[test]
    fn test_string_spans_lines() {
        let mut scanner = Scanner::new("\"one\ntwo\" x");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.lexeme, "\"one\ntwo\"");
        let x = scanner.next_token().unwrap();
        assert_eq!((x.span.line, x.span.column), (2, 6));
    }

    #[test]
    fn test_unterminated_string_points_at_quote() {
        let source = "a = \"unterminated";
        let mut scanner = Scanner::new(source);
        scanner.next_token().unwrap();
        scanner.next_token().unwrap();
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.span, Span::new(4, source.len(), 1, 5));
    }

    #[test]
    fn test_escaped_quote_at_end_is_unterminated() {
        let err = lex_one("\"abc\\\"").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn test_character() {
        let token = lex_one("'A'").unwrap();
        assert_eq!(token.kind, TokenKind::Char);
        assert_eq!(token.lexeme, "'A'");
    }

    #[test]
    fn test_character_escapes() {
        for source in [r"'\n'", r"'\''", r"'\\'", r"'\0'", r"'\x41'", r"'\101'", r"'\7'"] {
            let token = lex_one(source).unwrap();
            assert_eq!(token.kind, TokenKind::Char, "{source}");
            assert_eq!(token.lexeme, source);
        }
    }

    #[test]
    fn test_non_ascii_character() {
        assert_eq!(lex_one("'é'").unwrap().kind, TokenKind::Char);
    }

    #[test]
    fn test_empty_character_literal() {
        let err = lex_one("''").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedCharLiteral);
        assert_eq!(err.span, Span::new(0, 2, 1, 1));
    }

    #[test]
    fn test_multi_character_literal() {
        let err = lex_one("'ab' x").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedCharLiteral);
        assert_eq!(err.span, Span::new(0, 4, 1, 1));

        // Four octal digits are one escape plus one character.
        assert!(lex_one(r"'\1234'").is_err());
    }

    #[test]
    fn test_hex_escape_needs_digits() {
        let err = lex_one(r"'\x'").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedCharLiteral);
        assert_eq!(err.span, Span::new(0, 4, 1, 1));

        assert!(lex_one(r"'\xg'").is_err());
        assert_eq!(lex_one(r"'\xF'").unwrap().kind, TokenKind::Char);

        let mut scanner = Scanner::with_config(r"'\x' y", ScanConfig::collect());
        assert!(scanner.next_token().is_err());
        let y = scanner.next_token().unwrap();
        assert_eq!(y.lexeme, "y");
        assert_eq!(y.leading, r"'\x' ");
    }

    #[test]
    fn test_unterminated_character_stops_before_newline() {
        let mut scanner = Scanner::with_config("'a\nb", ScanConfig::collect());
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedCharLiteral);
        assert_eq!(err.span, Span::new(0, 2, 1, 1));
        let b = scanner.next_token().unwrap();
        assert_eq!(b.lexeme, "b");
        assert_eq!(b.leading, "'a\n");
    }

    #[test]
    fn test_unterminated_character_at_end() {
        assert_eq!(
            lex_one("'x").unwrap_err().span,
            Span::new(0, 2, 1, 1)
        );
        assert_eq!(lex_one("'\\").unwrap_err().kind, LexErrorKind::MalformedCharLiteral);
    }
}
