//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use clex_util::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Warning.to_string(), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the input was rejected
    Error,
    /// A warning; the input was accepted or only partly scanned
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true for [`Level::Warning`]
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Lowercase name used when rendering
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_level_predicates() {
        assert!(Level::Error.is_error());
        assert!(!Level::Error.is_warning());
        assert!(Level::Warning.is_warning());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warning);
    }
}
