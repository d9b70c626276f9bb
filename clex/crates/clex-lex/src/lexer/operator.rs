//! Operator and punctuation lexing.
//!
//! Operators and punctuation share one table. The longest entry matching
//! at the cursor wins, so `<=` is never split into `<` and `=`.

use crate::lexer::{Scanner, State};
use crate::token::{symbol_from_str, TokenKind, MAX_SYMBOL_LEN};

impl<'src> Scanner<'src> {
    /// Lexes an operator or punctuation mark by maximal munch.
    ///
    /// Returns `None` without consuming anything if no table entry matches.
    pub(crate) fn lex_symbol(&mut self) -> Option<TokenKind> {
        self.state = State::InOperator;
        let rest = self.cursor.remaining();

        for len in (1..=MAX_SYMBOL_LEN).rev() {
            let Some(candidate) = rest.get(..len) else {
                continue;
            };
            if let Some(kind) = symbol_from_str(candidate) {
                self.cursor.advance_n(len);
                return Some(kind);
            }
        }
        None
    }
}
