//! Diagnostic codes for categorizing scanner errors.
//!
//! # Examples
//!
//! ```
//! use clex_util::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is zero-padded to four digits
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Format the code as a string, e.g. `E1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// A character that starts no token
    pub const E_LEX_UNRECOGNIZED_CHAR: Self = Self::new("E", 1001);
    /// A string literal missing its closing quote
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// A character literal that is empty, too long, or unterminated
    pub const E_LEX_MALFORMED_CHAR: Self = Self::new("E", 1003);
    /// A numeric literal with a dangling `.` or exponent, or an overflow
    pub const E_LEX_MALFORMED_NUMBER: Self = Self::new("E", 1004);
    /// A block comment missing its closing `*/`
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
