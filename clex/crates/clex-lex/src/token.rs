//! Token definitions for the clex scanner.
//!
//! A [`Token`] pairs a strongly typed [`TokenKind`] with the exact source
//! text it was cut from. Keywords, operators and punctuation each get their
//! own enum so that no numeric category codes are needed anywhere.
//!
//! The keyword and symbol tables are built once on first use and are
//! read-only afterwards.

use std::fmt;
use std::sync::LazyLock;

use clex_util::Span;
use rustc_hash::FxHashMap;

/// Reserved words of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `char`
    Char,
    /// `string`
    String,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `main`
    Main,
    /// `printf`
    Printf,
    /// `scanf`
    Scanf,
    /// `break`
    Break,
    /// `continue`
    Continue,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Keyword; 15] = [
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::For,
        Keyword::Int,
        Keyword::Float,
        Keyword::Char,
        Keyword::String,
        Keyword::Return,
        Keyword::Void,
        Keyword::Main,
        Keyword::Printf,
        Keyword::Scanf,
        Keyword::Break,
        Keyword::Continue,
    ];

    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Int => "int",
            Keyword::Float => "float",
            Keyword::Char => "char",
            Keyword::String => "string",
            Keyword::Return => "return",
            Keyword::Void => "void",
            Keyword::Main => "main",
            Keyword::Printf => "printf",
            Keyword::Scanf => "scanf",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
        }
    }

    /// Symbolic name, e.g. `INT`.
    pub fn name(self) -> &'static str {
        match self {
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::While => "WHILE",
            Keyword::For => "FOR",
            Keyword::Int => "INT",
            Keyword::Float => "FLOAT",
            Keyword::Char => "CHAR",
            Keyword::String => "STRING",
            Keyword::Return => "RETURN",
            Keyword::Void => "VOID",
            Keyword::Main => "MAIN",
            Keyword::Printf => "PRINTF",
            Keyword::Scanf => "SCANF",
            Keyword::Break => "BREAK",
            Keyword::Continue => "CONTINUE",
        }
    }
}

/// Operators recognized by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl Operator {
    /// Every operator.
    pub const ALL: [Operator; 17] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
        Operator::Assign,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::Greater,
        Operator::LessEqual,
        Operator::GreaterEqual,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Increment,
        Operator::Decrement,
    ];

    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Assign => "=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Not => "!",
            Operator::Increment => "++",
            Operator::Decrement => "--",
        }
    }

    /// Symbolic name, e.g. `ASSIGN`.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Plus => "PLUS",
            Operator::Minus => "MINUS",
            Operator::Multiply => "MULTIPLY",
            Operator::Divide => "DIVIDE",
            Operator::Modulo => "MODULO",
            Operator::Assign => "ASSIGN",
            Operator::Equal => "EQUAL",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::Less => "LESS",
            Operator::Greater => "GREATER",
            Operator::LessEqual => "LESS_EQUAL",
            Operator::GreaterEqual => "GREATER_EQUAL",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Increment => "INCREMENT",
            Operator::Decrement => "DECREMENT",
        }
    }
}

/// Punctuation (delimiters and separators).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
}

impl Punct {
    /// Every punctuation mark.
    pub const ALL: [Punct; 10] = [
        Punct::LeftBrace,
        Punct::RightBrace,
        Punct::LeftBracket,
        Punct::RightBracket,
        Punct::LeftParen,
        Punct::RightParen,
        Punct::Semicolon,
        Punct::Comma,
        Punct::Dot,
        Punct::Colon,
    ];

    /// Source spelling of the punctuation mark.
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::LeftBrace => "{",
            Punct::RightBrace => "}",
            Punct::LeftBracket => "[",
            Punct::RightBracket => "]",
            Punct::LeftParen => "(",
            Punct::RightParen => ")",
            Punct::Semicolon => ";",
            Punct::Comma => ",",
            Punct::Dot => ".",
            Punct::Colon => ":",
        }
    }

    /// Symbolic name, e.g. `SEMICOLON`.
    pub fn name(self) -> &'static str {
        match self {
            Punct::LeftBrace => "LEFT_BRACE",
            Punct::RightBrace => "RIGHT_BRACE",
            Punct::LeftBracket => "LEFT_BRACKET",
            Punct::RightBracket => "RIGHT_BRACKET",
            Punct::LeftParen => "LEFT_PAREN",
            Punct::RightParen => "RIGHT_PAREN",
            Punct::Semicolon => "SEMICOLON",
            Punct::Comma => "COMMA",
            Punct::Dot => "DOT",
            Punct::Colon => "COLON",
        }
    }
}

/// Coarse token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved word
    Keyword,
    /// User-defined name
    Identifier,
    /// Decimal integer constant
    IntegerLiteral,
    /// Decimal floating-point constant
    FloatLiteral,
    /// Single-quoted character constant
    CharLiteral,
    /// Double-quoted string constant
    StringLiteral,
    /// Arithmetic, comparison, logical or assignment operator
    Operator,
    /// Delimiter or separator
    Punctuation,
    /// End of input
    Eof,
}

impl Category {
    /// Category name as it appears in token reports.
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "KEYWORD",
            Category::Identifier => "IDENTIFIER",
            Category::IntegerLiteral => "INTEGER_LITERAL",
            Category::FloatLiteral => "FLOAT_LITERAL",
            Category::CharLiteral => "CHAR_LITERAL",
            Category::StringLiteral => "STRING_LITERAL",
            Category::Operator => "OPERATOR",
            Category::Punctuation => "PUNCTUATION",
            Category::Eof => "EOF",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a token is. Only numeric literals carry a value.
///
/// Character and string literals carry no decoded value; their text,
/// quotes and escapes included, is the token's lexeme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// A reserved word
    Keyword(Keyword),
    /// An identifier
    Ident,
    /// An integer literal with its value
    Int(u64),
    /// A floating-point literal with its value
    Float(f64),
    /// A character literal
    Char,
    /// A string literal
    Str,
    /// An operator
    Operator(Operator),
    /// Punctuation
    Punct(Punct),
    /// End of input
    Eof,
}

impl TokenKind {
    /// The category this kind belongs to.
    pub fn category(&self) -> Category {
        match self {
            TokenKind::Keyword(_) => Category::Keyword,
            TokenKind::Ident => Category::Identifier,
            TokenKind::Int(_) => Category::IntegerLiteral,
            TokenKind::Float(_) => Category::FloatLiteral,
            TokenKind::Char => Category::CharLiteral,
            TokenKind::Str => Category::StringLiteral,
            TokenKind::Operator(_) => Category::Operator,
            TokenKind::Punct(_) => Category::Punctuation,
            TokenKind::Eof => Category::Eof,
        }
    }

    /// Symbolic name. Identifiers and literals use their category name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => kw.name(),
            TokenKind::Operator(op) => op.name(),
            TokenKind::Punct(p) => p.name(),
            other => other.category().name(),
        }
    }
}

/// A scanned token.
///
/// `leading` holds the text skipped before the token (whitespace, comments
/// and, when errors are collected, rejected text). Joining `leading` and
/// `lexeme` over a whole token stream, EOF included, gives back the source.
///
/// # Example
///
/// ```
/// use clex_lex::{Category, Scanner};
///
/// let mut scanner = Scanner::new("  int");
/// let token = scanner.next_token().unwrap();
/// assert_eq!(token.category(), Category::Keyword);
/// assert_eq!(token.name(), "INT");
/// assert_eq!(token.leading, "  ");
/// assert_eq!(token.to_string(), "KEYWORD(INT)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    /// What the token is
    pub kind: TokenKind,
    /// Exact source text of the token
    pub lexeme: &'src str,
    /// Trivia between the previous token and this one
    pub leading: &'src str,
    /// Location of the lexeme
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a token.
    pub fn new(kind: TokenKind, lexeme: &'src str, leading: &'src str, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            leading,
            span,
        }
    }

    /// The token's category.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// The token's symbolic name, e.g. `INT`, `ASSIGN` or `IDENTIFIER`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Value of an integer literal.
    pub fn int_value(&self) -> Option<u64> {
        match self.kind {
            TokenKind::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Value of a floating-point literal.
    pub fn float_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Float(value) => Some(value),
            _ => None,
        }
    }
}

/// `CATEGORY(detail)`: keywords, operators and punctuation show their
/// symbolic name, everything else its lexeme. EOF prints as `EOF`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Keyword(_) | TokenKind::Operator(_) | TokenKind::Punct(_) => {
                write!(f, "{}({})", self.category(), self.name())
            },
            _ => write!(f, "{}({})", self.category(), self.lexeme),
        }
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, Keyword>> =
    LazyLock::new(|| Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect());

static SYMBOLS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let operators = Operator::ALL
        .iter()
        .map(|&op| (op.as_str(), TokenKind::Operator(op)));
    let puncts = Punct::ALL
        .iter()
        .map(|&p| (p.as_str(), TokenKind::Punct(p)));
    operators.chain(puncts).collect()
});

/// Length in bytes of the longest operator or punctuation mark.
pub const MAX_SYMBOL_LEN: usize = 2;

/// Looks up a keyword by its spelling.
///
/// # Example
///
/// ```
/// use clex_lex::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("while"), Some(Keyword::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    KEYWORDS.get(ident).copied()
}

/// Looks up an operator or punctuation mark by its exact spelling.
pub fn symbol_from_str(text: &str) -> Option<TokenKind> {
    SYMBOLS.get(text).copied()
}
