//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the source with the human-readable
//! line/column of its first character.
//!
//! # Examples
//!
//! ```
//! use clex_util::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), `end` exclusive
/// - Line and column numbers of `start` (1-based, columns count characters)
///
/// # Examples
///
/// ```
/// use clex_util::Span;
///
/// // A span covering bytes 4..6 on the first line
/// let span = Span::new(4, 6, 1, 5);
/// assert_eq!(span.len(), 2);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the source text covered by this span.
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::Span;
    ///
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(span.slice("int a = 10;"), Some("a"));
    /// assert_eq!(Span::new(4, 50, 1, 5).slice("int a"), None);
    /// ```
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
