//! Number literal lexing.
//!
//! Decimal integers and floats only:
//!
//! - Integer: `0`, `42`, `007`
//! - Float: `3.14`, `0.5e-3`, `1e10`

use crate::error::{LexError, LexErrorKind, Result};
use crate::lexer::{Scanner, State};
use crate::token::TokenKind;

impl<'src> Scanner<'src> {
    /// Lexes a number literal.
    ///
    /// A `.` after the digits must be followed by a digit, and an exponent
    /// marker by optional sign and at least one digit. Anything else is a
    /// [`LexErrorKind::MalformedNumber`] covering the text consumed so far.
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind> {
        self.state = State::InNumber;
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut is_float = false;

        if self.cursor.match_char('.') {
            self.state = State::InNumberFraction;
            if !self.cursor.current_char().is_ascii_digit() {
                return Err(self.error(LexErrorKind::MalformedNumber));
            }
            self.cursor.eat_while(|c| c.is_ascii_digit());
            is_float = true;
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.state = State::InNumberFraction;
            self.lex_exponent()?;
            is_float = true;
        }

        let text = self.cursor.slice_from(self.token_start.position);
        if is_float {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(TokenKind::Float(value)),
                _ => Err(self.error(LexErrorKind::MalformedNumber)),
            }
        } else {
            text.parse::<u64>()
                .map(TokenKind::Int)
                .map_err(|_| self.error(LexErrorKind::MalformedNumber))
        }
    }

    /// Lexes `[eE][+-]?digits`.
    fn lex_exponent(&mut self) -> Result<()> {
        self.eat_exponent_marker();
        if !self.cursor.current_char().is_ascii_digit() {
            return Err(self.error(LexErrorKind::MalformedNumber));
        }
        self.cursor.eat_while(|c| c.is_ascii_digit());
        Ok(())
    }

    /// Consumes `[eE][+-]?`.
    fn eat_exponent_marker(&mut self) {
        self.cursor.advance();
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
    }

    /// Rejects a fraction with no integer part, such as `.5`.
    ///
    /// Consumes the `.`, the digits and any exponent so that collect mode
    /// resumes after the whole literal.
    pub(crate) fn lex_leading_dot(&mut self) -> LexError {
        self.state = State::InNumberFraction;
        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.eat_exponent_marker();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        self.error(LexErrorKind::MalformedNumber)
    }
}
