//! Identifier and keyword lexing.

use crate::lexer::{Scanner, State};
use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::{is_ascii_ident_continue, is_ident_continue};

impl<'src> Scanner<'src> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the longest run of identifier characters, then checks the
    /// keyword table. Keywords match case-sensitively and only as whole
    /// words, so `ifx` is an identifier.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.state = State::InIdentifier;
        if self.config().unicode_identifiers {
            self.cursor.eat_while(is_ident_continue);
        } else {
            self.cursor.eat_while(is_ascii_ident_continue);
        }

        let text = self.cursor.slice_from(self.token_start.position);
        keyword_from_ident(text).map_or(TokenKind::Ident, TokenKind::Keyword)
    }
}
