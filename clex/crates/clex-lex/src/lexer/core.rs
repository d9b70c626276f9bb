//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, its state machine and the
//! dispatch on the first character of each token.

use clex_util::Span;
use tracing::{debug, trace};

use crate::config::{ErrorMode, ScanConfig};
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, LexErrorKind, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ascii_ident_start, is_ident_start};

/// States of the scanning state machine.
///
/// `Start` is the initial state and `Done` the terminal one. Every other
/// state returns to `Start` once its token is emitted or its trivia is
/// skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens
    Start,
    /// Reading an identifier or keyword
    InIdentifier,
    /// Reading the integer part of a number
    InNumber,
    /// Reading the fraction or exponent of a number
    InNumberFraction,
    /// Reading a character literal
    InCharLiteral,
    /// Reading a string literal
    InStringLiteral,
    /// Reading an operator or punctuation mark
    InOperator,
    /// Skipping a comment
    InComment,
    /// End of input emitted, or stopped by an error
    Done,
}

/// Maximal-munch scanner for the C subset.
///
/// The scanner pulls one token at a time from a borrowed source. It is
/// restartable and deterministic: scanning the same source again yields
/// the same tokens.
///
/// # Example
///
/// ```
/// use clex_lex::Scanner;
///
/// let names: Vec<_> = Scanner::new("int a=10;")
///     .map(|token| token.map(|t| t.name()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     names,
///     ["INT", "IDENTIFIER", "ASSIGN", "INTEGER_LITERAL", "SEMICOLON", "EOF"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Scanner options.
    config: ScanConfig,

    /// Current state of the state machine.
    pub(crate) state: State,

    /// Byte offset where the pending trivia begins.
    trivia_start: usize,

    /// Position of the first character of the current token.
    pub(crate) token_start: CursorSnapshot,

    /// Errors reported so far.
    error_count: usize,

    /// Set when the error limit skipped unscanned input.
    truncated: bool,

    /// Whether the byte-order mark has been checked.
    pub(crate) bom_checked: bool,

    /// Set once the iterator has nothing more to yield.
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(source: &'src str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            state: State::Start,
            trivia_start: 0,
            token_start: CursorSnapshot::START,
            error_count: 0,
            truncated: false,
            bom_checked: false,
            exhausted: false,
        }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token. After
    /// an error in fail-fast mode the scanner is `Done` and also returns
    /// EOF; that token's `leading` holds the unscanned rest of the source.
    pub fn next_token(&mut self) -> Result<Token<'src>> {
        if self.state == State::Done {
            return Ok(self.eof_token());
        }

        match self.scan_token() {
            Ok(token) => {
                trace!(
                    name = token.name(),
                    lexeme = token.lexeme,
                    span = %token.span,
                    "token"
                );
                Ok(token)
            },
            Err(err) => {
                self.error_count += 1;
                debug!(kind = %err.kind, span = %err.span, "lexical error");
                match self.config.error_mode {
                    ErrorMode::FailFast => {
                        self.cursor.advance_to_end();
                        self.state = State::Done;
                    },
                    ErrorMode::Collect => {
                        if self.error_count >= self.config.max_errors {
                            debug!(errors = self.error_count, "error limit reached");
                            self.truncated = !self.cursor.is_at_end();
                            self.cursor.advance_to_end();
                        }
                        self.state = State::Start;
                    },
                }
                Err(err)
            },
        }
    }

    /// Rewinds to the beginning of the source.
    pub fn restart(&mut self) {
        self.cursor.restore(CursorSnapshot::START);
        self.state = State::Start;
        self.trivia_start = 0;
        self.token_start = CursorSnapshot::START;
        self.error_count = 0;
        self.truncated = false;
        self.bom_checked = false;
        self.exhausted = false;
    }

    /// Current state of the state machine.
    pub fn state(&self) -> State {
        self.state
    }

    /// The scanner's configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The source being scanned.
    pub fn source(&self) -> &'src str {
        self.cursor.source()
    }

    /// Number of errors reported since the last restart.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns true if reaching `max_errors` left part of the source unscanned.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn scan_token(&mut self) -> Result<Token<'src>> {
        self.skip_whitespace_and_comments()?;
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return Ok(self.eof_token());
        }

        let kind = match self.cursor.current_char() {
            c if self.is_identifier_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number()?,
            '.' if self.cursor.peek_char(1).is_ascii_digit() => {
                return Err(self.lex_leading_dot());
            },
            '\'' => self.lex_char()?,
            '"' => self.lex_string()?,
            c => match self.lex_symbol() {
                Some(kind) => kind,
                None => {
                    self.cursor.advance();
                    return Err(self.error(LexErrorKind::UnrecognizedCharacter(c)));
                },
            },
        };

        Ok(self.emit(kind))
    }

    fn is_identifier_start(&self, c: char) -> bool {
        if self.config.unicode_identifiers {
            is_ident_start(c)
        } else {
            is_ascii_ident_start(c)
        }
    }

    /// Records the current position as the start of the next lexeme.
    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.snapshot();
    }

    /// Span from the token start to the current position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start.position,
            self.cursor.position(),
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Builds an error covering the text consumed since the token start.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_span())
    }

    /// Finishes the current token and returns to `Start`.
    fn emit(&mut self, kind: TokenKind) -> Token<'src> {
        let source = self.cursor.source();
        let start = self.token_start.position;
        let token = Token::new(
            kind,
            self.cursor.slice_from(start),
            &source[self.trivia_start..start],
            self.token_span(),
        );
        self.trivia_start = self.cursor.position();
        self.state = State::Start;
        token
    }

    /// EOF token carrying the trailing trivia. Moves to `Done`.
    fn eof_token(&mut self) -> Token<'src> {
        self.mark_token_start();
        self.state = State::Start;
        let token = self.emit(TokenKind::Eof);
        self.state = State::Done;
        token
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>>;

    /// Yields tokens up to and including EOF. In fail-fast mode the
    /// sequence also ends right after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_token();
        match &item {
            Ok(token) if token.is_eof() => self.exhausted = true,
            Err(_) if self.config.error_mode == ErrorMode::FailFast => self.exhausted = true,
            _ => {},
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
