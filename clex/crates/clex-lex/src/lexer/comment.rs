//! Whitespace and comment skipping.
//!
//! Everything skipped here ends up in the `leading` text of the next token.

use crate::error::{LexErrorKind, Result};
use crate::lexer::{Scanner, State};
use crate::unicode::{is_whitespace, BOM};

impl<'src> Scanner<'src> {
    /// Skips whitespace and comments.
    ///
    /// Called before every token. A byte-order mark at the very start of
    /// the source is skipped too when the configuration allows it.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.config().skip_bom && self.cursor.position() == 0 {
                self.cursor.match_char(BOM);
            }
        }

        loop {
            if self.cursor.is_at_end() {
                break;
            }
            match self.cursor.current_char() {
                c if is_whitespace(c) => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek_char(1) == '*' => self.skip_block_comment()?,
                _ => break,
            }
        }

        self.state = State::Start;
        Ok(())
    }

    /// Skips `//` up to, not including, the end of the line.
    fn skip_line_comment(&mut self) {
        self.state = State::InComment;
        self.cursor.advance_n(2);
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a `/* ... */` comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> Result<()> {
        self.state = State::InComment;
        self.mark_token_start();
        self.cursor.advance_n(2);

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return Ok(());
            }
            self.cursor.advance();
        }

        Err(self.error(LexErrorKind::UnterminatedComment))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ScanConfig;
    use crate::error::LexErrorKind;
    use crate::token::TokenKind;
    use crate::Scanner;
    use clex_util::Span;

    #[test]
    fn test_skip_whitespace() {
        let token = Scanner::new(" \t\r\n\x0B\x0Chello").next_token().unwrap();
        assert_eq!(token.lexeme, "hello");
        assert_eq!(token.leading, " \t\r\n\x0B\x0C");
    }

    #[test]
    fn test_skip_line_comment() {
        let mut scanner = Scanner::new("// comment\nhello");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.lexeme, "hello");
        assert_eq!(token.leading, "// comment\n");
        assert_eq!(token.span.line, 2);
    }

    #[test]
    fn test_line_comment_at_end() {
        let eof = Scanner::new("x // done").nth(1).unwrap().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.leading, " // done");
    }

    #[test]
    fn test_skip_block_comment() {
        let token = Scanner::new("/* a\n * b */hello").next_token().unwrap();
        assert_eq!(token.lexeme, "hello");
        assert_eq!(token.leading, "/* a\n * b */");
        assert_eq!((token.span.line, token.span.column), (2, 8));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let mut scanner = Scanner::new("/* outer /* inner */ x */");
        assert_eq!(scanner.next_token().unwrap().lexeme, "x");
        assert_eq!(
            scanner.next_token().unwrap().kind,
            TokenKind::Operator(crate::token::Operator::Multiply)
        );
    }

    #[test]
    fn test_slash_star_slash_is_open() {
        let err = Scanner::new("/*/ x").next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut scanner = Scanner::with_config("a /* never closed", ScanConfig::collect());
        scanner.next_token().unwrap();
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(err.span, Span::new(2, 17, 1, 3));
        let eof = scanner.next_token().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.leading, " /* never closed");
    }

    #[test]
    fn test_division_is_not_comment() {
        let mut scanner = Scanner::new("a / b");
        scanner.next_token().unwrap();
        assert_eq!(
            scanner.next_token().unwrap().kind,
            TokenKind::Operator(crate::token::Operator::Divide)
        );
    }

    #[test]
    fn test_bom_skipped() {
        let token = Scanner::new("\u{FEFF}int").next_token().unwrap();
        assert_eq!(token.lexeme, "int");
        assert_eq!(token.leading, "\u{FEFF}");
        assert_eq!(token.span.column, 2);
    }

    #[test]
    fn test_bom_rejected_when_disabled() {
        let config = ScanConfig {
            skip_bom: false,
            ..ScanConfig::default()
        };
        let err = Scanner::with_config("\u{FEFF}int", config).next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('\u{FEFF}'));
    }

    #[test]
    fn test_bom_only_at_start() {
        let mut scanner = Scanner::new("a\u{FEFF}");
        scanner.next_token().unwrap();
        assert!(scanner.next_token().is_err());
    }
}
