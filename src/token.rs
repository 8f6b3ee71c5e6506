use std::fmt;

use serde::Serialize;

/// Source location for error reporting.
///
/// `offset` is a byte offset into the input. `line` and `column` are
/// 1-based; columns count code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// End of input. Returned forever once reached.
    Eof,
    /// A character that cannot start any token.
    Illegal,
    /// Identifier such as `my_value` or `$ref`.
    Ident,
    /// Run of decimal digits.
    Number,
    /// Single-quoted string (`'...'`).
    String,
    /// Backtick template (`` `...` ``).
    Template,
    True,
    False,
    Null,
    /// `=`
    Assign,
    /// `,`
    Comma,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    // The remaining punctuation is lexed but not used by any grammar rule.
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    Dot,
    /// `!`
    Bang,
    /// `+`
    Plus,
}

impl TokenKind {
    /// Map a single punctuation character to its kind.
    #[must_use]
    pub const fn punctuation(ch: char) -> Option<Self> {
        let kind = match ch {
            '=' => Self::Assign,
            ',' => Self::Comma,
            '{' => Self::LBrace,
            '}' => Self::RBrace,
            '[' => Self::LBracket,
            ']' => Self::RBracket,
            '(' => Self::LParen,
            ')' => Self::RParen,
            '.' => Self::Dot,
            '!' => Self::Bang,
            '+' => Self::Plus,
            _ => return None,
        };
        Some(kind)
    }

    /// Resolve an identifier to a keyword kind, or `Ident`.
    #[must_use]
    pub fn lookup_ident(ident: &str) -> Self {
        match ident {
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            _ => Self::Ident,
        }
    }

    /// Whether the kind is a fixed punctuation character.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::Comma
                | Self::LBrace
                | Self::RBrace
                | Self::LBracket
                | Self::RBracket
                | Self::LParen
                | Self::RParen
                | Self::Dot
                | Self::Bang
                | Self::Plus
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "end of input",
            Self::Illegal => "illegal character",
            Self::Ident => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Template => "template",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Null => "'null'",
            Self::Assign => "'='",
            Self::Comma => "','",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Dot => "'.'",
            Self::Bang => "'!'",
            Self::Plus => "'+'",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, text, and source location.
///
/// For strings and templates `text` is the raw content between the
/// delimiters; for every other kind it is the matched source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
