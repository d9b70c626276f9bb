//! Character cursor for traversing source code.
//!
//! The [`Cursor`] keeps the read position of the scanner. It steps over
//! UTF-8 characters and tracks the line and column of the next character
//! for error reporting.

/// A cursor for traversing source code character by character.
///
/// End of input reads as `'\0'`; use [`Cursor::is_at_end`] to tell it
/// apart from a NUL character in the source.
///
/// # Example
///
/// ```
/// use clex_lex::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return '\0';
        };
        if b < 128 {
            return b as char;
        }
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return;
        };

        // Fast path for ASCII
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.remaining(), "abc");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Moves to the end of the source, keeping line and column in step.
    pub fn advance_to_end(&mut self) {
        while !self.is_at_end() {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use clex_lex::Cursor;
    ///
    /// let mut cursor = Cursor::new("x1");
    /// assert!(cursor.match_char('x'));
    /// assert!(!cursor.match_char('x'));
    /// assert_eq!(cursor.current_char(), '1');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position, line and column.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl CursorSnapshot {
    /// Snapshot of a fresh cursor.
    pub const START: CursorSnapshot = CursorSnapshot {
        position: 0,
        line: 1,
        column: 1,
    };
}
