use std::fmt;
use std::mem;

use crate::ast::{Assign, Block, Expr, File, Statement};
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A statement was expected but the token cannot start one.
    ExpectedStatement { found: TokenKind, text: String },
    /// The token cannot start an expression.
    UnexpectedToken { found: TokenKind, text: String },
    /// A block or array opens deeper than `MAX_NESTING` levels.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedStatement { found, text } => {
                write!(f, "expected a statement, got {}", Found(*found, text))
            }
            Self::UnexpectedToken { found, text } => {
                write!(
                    f,
                    "unexpected token in expression: {}",
                    Found(*found, text)
                )
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "nesting deeper than {limit} levels")
            }
        }
    }
}

/// Token kind plus its text when the kind alone is ambiguous.
struct Found<'a>(TokenKind, &'a str);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TokenKind::Illegal | TokenKind::Ident | TokenKind::Number => {
                write!(f, "{} '{}'", self.0, self.1)
            }
            kind => write!(f, "{kind}"),
        }
    }
}

/// Diagnostic produced during parsing. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Best-effort tree plus every diagnostic found while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub file: File,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    /// Whether the parse produced no diagnostics.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Treat any diagnostic as a failure.
    pub fn into_result(self) -> Result<File, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.file)
        } else {
            Err(self.errors)
        }
    }
}

/// Deepest combined nesting of blocks and arrays the parser descends
/// into. Anything below is skipped up to its matching close.
pub const MAX_NESTING: usize = 256;

/// Parse YCL source text into a tree and its diagnostics.
///
/// Parsing never stops early: malformed statements are skipped one
/// token at a time and malformed values are replaced by `Expr::Null`.
#[must_use]
pub fn parse(input: &str) -> Parsed {
    let parsed = Parser::new(input).parse();
    tracing::trace!(
        statements = parsed.file.statements.len(),
        diagnostics = parsed.errors.len(),
        "parsed input"
    );
    parsed
}

/// Recursive-descent parser with one token of lookahead.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
    // Set while skipping tokens after a failed statement so a run of
    // garbage is reported once.
    recovering: bool,
    depth: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            recovering: false,
            depth: 0,
        }
    }

    /// Parse the whole input and hand back the tree with its diagnostics.
    #[must_use]
    pub fn parse(mut self) -> Parsed {
        let file = self.parse_file();
        Parsed {
            file,
            errors: self.errors,
        }
    }

    /// Parse statements until end of input.
    pub fn parse_file(&mut self) -> File {
        File {
            statements: self.parse_statements(None),
        }
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Move the current token's text out and step past it.
    fn take_current(&mut self) -> String {
        let text = mem::take(&mut self.current.text);
        self.advance();
        text
    }

    /// `(statement ","?)*` up to end of input or the `closing` token,
    /// which is left in place.
    fn parse_statements(&mut self, closing: Option<TokenKind>) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) && closing.is_none_or(|kind| !self.current_is(kind))
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            } else {
                self.skip_unexpected();
            }

            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }

        statements
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        if !self.current_is(TokenKind::Ident) {
            return None;
        }

        match self.peek.kind {
            TokenKind::Assign => {
                self.recovering = false;
                let name = self.take_current();
                self.advance(); // skip =
                let value = self.parse_expr();
                Some(Statement::Assign(Assign { name, value }))
            }
            TokenKind::LBrace => {
                self.recovering = false;
                let name = self.take_current();
                if !self.enter(TokenKind::LBrace, TokenKind::RBrace) {
                    return Some(Statement::Block(Block {
                        name,
                        body: Vec::new(),
                    }));
                }
                self.advance(); // skip {
                let body = self.parse_statements(Some(TokenKind::RBrace));
                self.depth -= 1;
                // A missing } at end of input is tolerated.
                if self.current_is(TokenKind::RBrace) {
                    self.advance();
                }
                Some(Statement::Block(Block { name, body }))
            }
            _ => None,
        }
    }

    fn skip_unexpected(&mut self) {
        if !self.recovering {
            self.recovering = true;
            self.record(ParseErrorKind::ExpectedStatement {
                found: self.current.kind,
                text: self.current.text.clone(),
            });
        }
        self.advance();
    }

    fn parse_expr(&mut self) -> Expr {
        match self.current.kind {
            TokenKind::String => Expr::String(self.take_current()),
            TokenKind::Template => Expr::Template(self.take_current()),
            TokenKind::Number => Expr::Number(self.take_current()),
            TokenKind::Ident => Expr::Ident(self.take_current()),
            TokenKind::True | TokenKind::False => {
                let value = self.current_is(TokenKind::True);
                self.advance();
                Expr::Bool(value)
            }
            TokenKind::Null => {
                self.advance();
                Expr::Null
            }
            TokenKind::LBracket => self.parse_array(),
            found => {
                self.record(ParseErrorKind::UnexpectedToken {
                    found,
                    text: self.current.text.clone(),
                });
                self.advance();
                Expr::Null
            }
        }
    }

    fn parse_array(&mut self) -> Expr {
        if !self.enter(TokenKind::LBracket, TokenKind::RBracket) {
            return Expr::Null;
        }
        self.advance(); // skip [
        let mut elements = Vec::new();

        while !self.current_is(TokenKind::RBracket) && !self.current_is(TokenKind::Eof) {
            elements.push(self.parse_expr());
            if self.current_is(TokenKind::Comma) {
                self.advance();
            }
        }

        if self.current_is(TokenKind::RBracket) {
            self.advance();
        }
        self.depth -= 1;

        Expr::Array(elements)
    }

    /// Step one level deeper at the `open` token. Past `MAX_NESTING` the
    /// whole group is reported once and skipped, and `false` comes back.
    fn enter(&mut self, open: TokenKind, close: TokenKind) -> bool {
        if self.depth < MAX_NESTING {
            self.depth += 1;
            return true;
        }

        self.record(ParseErrorKind::NestingTooDeep { limit: MAX_NESTING });
        let mut open_groups = 0usize;
        while !self.current_is(TokenKind::Eof) {
            if self.current_is(open) {
                open_groups += 1;
            } else if self.current_is(close) {
                open_groups -= 1;
            }
            self.advance();
            if open_groups == 0 {
                break;
            }
        }
        false
    }

    fn record(&mut self, kind: ParseErrorKind) {
        let span = self.current.span;
        tracing::debug!(line = span.line, column = span.column, "{kind}");
        self.errors.push(ParseError { kind, span });
    }
}
