//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// highlighted column range.
///
/// # Examples
///
/// ```
/// use clex_util::SourceSnippet;
///
/// let snippet = SourceSnippet::new("a = @b;", 1, 5, 6);
/// assert_eq!(snippet.format(), "  1 | a = @b;\n    |     ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Cut the line containing `span.start` out of `source`.
    ///
    /// The highlight ends at the span end or at the end of the line,
    /// whichever comes first. Returns `None` when the span is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::{SourceSnippet, Span};
    ///
    /// let source = "int a;\na = \"open";
    /// let snippet = SourceSnippet::from_source(source, Span::new(11, 16, 2, 5)).unwrap();
    /// assert_eq!(snippet.line, "a = \"open");
    /// assert_eq!(snippet.start_column, 5);
    /// assert_eq!(snippet.end_column, 10);
    /// ```
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.start > source.len() || !source.is_char_boundary(span.start) {
            return None;
        }
        let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[span.start..]
            .find('\n')
            .map_or(source.len(), |i| span.start + i);
        let line = source[line_start..line_end].trim_end_matches('\r');

        let start_column = span.column as usize;
        let highlighted_end = span.end.clamp(span.start, line_end);
        let width = source
            .get(span.start..highlighted_end)
            .map_or(0, |s| s.chars().count());

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width.max(1),
        })
    }

    /// Format the snippet as a numbered source line with a caret underline
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Fluent builder for [`Diagnostic`]s
///
/// # Examples
///
/// ```
/// use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .help("remove the character")
///     .emit(&handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start a diagnostic of the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
