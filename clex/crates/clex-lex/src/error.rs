//! Lexical errors.
//!
//! Every error carries the [`Span`] of the rejected text. The line and
//! column point at its first character, e.g. the opening quote of an
//! unterminated string.

use clex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// The kinds of lexical error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// End of input reached inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Empty, multi-character or unterminated character literal.
    #[error("malformed character literal")]
    MalformedCharLiteral,

    /// Dangling `.` or exponent, leading `.`, or a value out of range.
    #[error("malformed number")]
    MalformedNumber,

    /// End of input reached inside a block comment.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

impl LexErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnrecognizedCharacter(_) => DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexErrorKind::MalformedCharLiteral => DiagnosticCode::E_LEX_MALFORMED_CHAR,
            LexErrorKind::MalformedNumber => DiagnosticCode::E_LEX_MALFORMED_NUMBER,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
        }
    }

    fn help(&self) -> &'static str {
        match self {
            LexErrorKind::UnrecognizedCharacter(_) => "remove the character or put it in a string",
            LexErrorKind::UnterminatedString => "add a closing `\"`",
            LexErrorKind::MalformedCharLiteral => {
                "a character literal holds exactly one character or escape"
            },
            LexErrorKind::MalformedNumber => {
                "write digits on both sides of `.` and after an exponent marker"
            },
            LexErrorKind::UnterminatedComment => "add a closing `*/`",
        }
    }
}

/// A lexical error and where it happened.
///
/// # Example
///
/// ```
/// use clex_lex::{scan, LexErrorKind};
///
/// let err = scan("a = @b;").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('@'));
/// assert_eq!((err.span.line, err.span.column), (1, 5));
/// assert_eq!(err.to_string(), "unrecognized character '@' at 1:5");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// What went wrong
    pub kind: LexErrorKind,
    /// The rejected text
    pub span: Span,
}

impl LexError {
    /// Create an error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Stable diagnostic code, `E1001` through `E1005`.
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Render as a diagnostic without source context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.builder().build()
    }

    /// Render as a diagnostic with the offending line of `source` attached.
    pub fn to_diagnostic_with_source(&self, source: &str) -> Diagnostic {
        let builder = self.builder();
        match SourceSnippet::from_source(source, self.span) {
            Some(snippet) => builder.snippet(snippet).build(),
            None => builder.build(),
        }
    }

    fn builder(&self) -> DiagnosticBuilder {
        DiagnosticBuilder::error(self.kind.to_string())
            .code(self.code())
            .span(self.span)
            .help(self.kind.help())
    }
}

/// Result type alias using [`LexError`].
pub type Result<T> = std::result::Result<T, LexError>;
