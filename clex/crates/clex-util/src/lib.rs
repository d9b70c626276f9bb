//! clex-util - Foundation types for the clex scanner
//!
//! This crate holds the pieces every phase around the scanner shares:
//!
//! - [`Span`] - byte range plus line/column of a piece of source text
//! - [`Diagnostic`], [`DiagnosticBuilder`], [`DiagnosticCode`], [`Level`] -
//!   structured error reports
//! - [`Handler`] - a sink that collects diagnostics for batch reporting
//!
//! # Example
//!
//! ```
//! use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;

use static_assertions::assert_impl_all;

// Spans and finished diagnostics travel between threads with their tokens.
assert_impl_all!(Span: Copy, Send, Sync);
assert_impl_all!(Diagnostic: Clone, Send, Sync);
assert_impl_all!(DiagnosticCode: Copy, Send, Sync);
