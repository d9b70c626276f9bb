//! Whole-source scanning.
//!
//! [`scan`] stops at the first error. [`scan_all`] and [`scan_with`] run the
//! scanner to the end and hand back every token and every error in a
//! [`ScanOutput`].

use clex_util::Handler;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::LexError;
use crate::lexer::Scanner;
use crate::token::Token;

/// Scans `source` and stops at the first error.
///
/// On success the tokens end with exactly one EOF token.
///
/// # Example
///
/// ```
/// use clex_lex::{scan, LexErrorKind};
///
/// let tokens = scan("a==5").unwrap();
/// let names: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
/// assert_eq!(names, ["IDENTIFIER(a)", "OPERATOR(EQUAL)", "INTEGER_LITERAL(5)", "EOF"]);
///
/// assert_eq!(scan("3.").unwrap_err().kind, LexErrorKind::MalformedNumber);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(source).collect()
}

/// Scans `source` collecting every error.
///
/// # Example
///
/// ```
/// use clex_lex::scan_all;
///
/// let source = "a = @b; c = 'xy';";
/// let output = scan_all(source);
/// assert_eq!(output.errors.len(), 2);
/// assert_eq!(output.reconstruct(), source);
/// ```
pub fn scan_all(source: &str) -> ScanOutput<'_> {
    scan_with(source, &ScanConfig::collect())
}

/// Scans `source` with the given configuration.
///
/// In fail-fast mode the output holds the tokens before the first error and
/// that error, with no EOF token.
pub fn scan_with<'src>(source: &'src str, config: &ScanConfig) -> ScanOutput<'src> {
    let mut output = ScanOutput::new(source);
    let mut scanner = Scanner::with_config(source, config.clone());
    for item in scanner.by_ref() {
        match item {
            Ok(token) => output.tokens.push(token),
            Err(err) => output.errors.push(err),
        }
    }
    output.truncated = scanner.is_truncated();
    debug!(
        tokens = output.token_count(),
        errors = output.errors.len(),
        truncated = output.truncated,
        "scan finished"
    );
    output
}

/// Joins the `leading` and `lexeme` text of `tokens` in order.
///
/// For a complete token stream, EOF included, this is the scanned source.
pub fn reconstruct(tokens: &[Token<'_>]) -> String {
    let len = tokens.iter().map(|t| t.leading.len() + t.lexeme.len()).sum();
    tokens.iter().fold(String::with_capacity(len), |mut out, t| {
        out.push_str(t.leading);
        out.push_str(t.lexeme);
        out
    })
}

/// Tokens and errors from one run over a source.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutput<'src> {
    /// Scanned tokens in source order
    pub tokens: Vec<Token<'src>>,
    /// Errors in source order
    pub errors: Vec<LexError>,
    source: &'src str,
    truncated: bool,
}

impl<'src> ScanOutput<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            tokens: Vec::new(),
            errors: Vec::new(),
            source,
            truncated: false,
        }
    }

    /// The scanned source.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Number of recognized tokens, EOF not included.
    pub fn token_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_eof()).count()
    }

    /// Returns true if the error limit stopped the scan before the end.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns true if no error was reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The tokens, or every error if there was at least one.
    pub fn into_result(self) -> Result<Vec<Token<'src>>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    /// Joins the `leading` and `lexeme` text of all tokens.
    pub fn reconstruct(&self) -> String {
        reconstruct(&self.tokens)
    }

    /// Emits one diagnostic per error, with the offending source line.
    ///
    /// A truncated scan is followed by a warning at the last error.
    pub fn emit_diagnostics(&self, handler: &Handler) {
        for err in &self.errors {
            handler.emit_diagnostic(err.to_diagnostic_with_source(self.source));
        }
        if let Some(last) = self.errors.last().filter(|_| self.truncated) {
            handler
                .build_warning(
                    last.span,
                    format!("scanning stopped after {} errors", self.errors.len()),
                )
                .note("the rest of the source was not scanned")
                .help("raise `max_errors` to report more errors")
                .emit(handler);
        }
    }
}
