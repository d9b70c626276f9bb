//! Character classes used by the scanner.
//!
//! Identifiers are ASCII by default. The Unicode variants are used when
//! `ScanConfig::unicode_identifiers` is set.

/// Byte-order mark that may prefix a UTF-8 source.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// ASCII-only identifier start: `[a-zA-Z_]`.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('Z'));
/// assert!(!is_ascii_ident_start('α'));
/// ```
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ASCII-only identifier continuation: `[a-zA-Z0-9_]`.
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace skipped between tokens: space, `\t`, `\n`, `\r`, `\v`, `\f`.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Checks if a character is an octal digit.
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_ascii_ident_start(c));
            assert!(is_ident_start(c));
        }
        for c in ['0', '9', '$', '@', ' '] {
            assert!(!is_ascii_ident_start(c));
            assert!(!is_ident_start(c));
        }
    }

    #[test]
    fn test_ident_continue() {
        for c in ['a', 'Z', '_', '0', '9'] {
            assert!(is_ascii_ident_continue(c));
            assert!(is_ident_continue(c));
        }
        assert!(!is_ascii_ident_continue('+'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_ident_start('é'));
        assert!(is_ident_start('日'));
        assert!(is_ident_continue('β'));
        assert!(!is_ascii_ident_start('é'));
        assert!(!is_ascii_ident_continue('日'));
    }

    #[test]
    fn test_bom_is_not_an_identifier() {
        assert!(!is_ident_start(BOM));
        assert!(!is_whitespace(BOM));
    }

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\n', '\r', '\x0B', '\x0C'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\0'));
        assert!(!is_whitespace('\u{2003}'));
    }

    #[test]
    fn test_octal_digit() {
        assert!(is_octal_digit('0'));
        assert!(is_octal_digit('7'));
        assert!(!is_octal_digit('8'));
        assert!(!is_octal_digit('a'));
    }
}
