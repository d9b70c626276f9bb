//! clex-lex - Maximal-munch scanner for a small C subset
//!
//! This crate turns source text into a stream of classified tokens:
//! keywords, identifiers, integer/float/char/string literals, operators and
//! punctuation, ending in a single EOF token. Whitespace and comments are
//! skipped but kept on each token as `leading` trivia, so the token stream
//! always rebuilds the exact source.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{scan, Category, Scanner};
//!
//! let source = "char c='A';";
//! let tokens = scan(source).unwrap();
//! let shown: Vec<_> = tokens.iter().map(|t| t.to_string()).collect();
//! assert_eq!(
//!     shown,
//!     [
//!         "KEYWORD(CHAR)",
//!         "IDENTIFIER(c)",
//!         "OPERATOR(ASSIGN)",
//!         "CHAR_LITERAL('A')",
//!         "PUNCTUATION(SEMICOLON)",
//!         "EOF",
//!     ]
//! );
//!
//! // Or pull tokens one at a time
//! let mut scanner = Scanner::new(source);
//! assert_eq!(scanner.next_token().unwrap().category(), Category::Keyword);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, keyword, operator and punctuation definitions
//! - [`lexer`] - The scanner and its state machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//! - [`error`] - Lexical errors
//! - [`config`] - Scanner options
//! - [`scan`](mod@scan) - Whole-source helpers
//!
//! # Errors
//!
//! By default scanning stops at the first error. With
//! [`ErrorMode::Collect`] the scanner reports the error, skips the rejected
//! text and continues; the rejected text becomes part of the next token's
//! trivia.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod scan;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, ErrorMode, ScanConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};
pub use lexer::{Scanner, State};
pub use scan::{reconstruct, scan, scan_all, scan_with, ScanOutput};
pub use token::{
    keyword_from_ident, symbol_from_str, Category, Keyword, Operator, Punct, Token, TokenKind,
};

use static_assertions::assert_impl_all;

// Scanners and tokens move freely between threads; the tables are shared.
assert_impl_all!(Scanner<'static>: Send, Sync, Clone);
assert_impl_all!(Token<'static>: Copy, Send, Sync);
assert_impl_all!(TokenKind: Copy, Send, Sync);
assert_impl_all!(LexError: std::error::Error, Send, Sync);
assert_impl_all!(ScanConfig: Send, Sync);
