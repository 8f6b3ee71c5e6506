use std::iter::FusedIterator;

use crate::token::{Span, Token, TokenKind};

/// Tokenize a YCL source string into every token before end of input.
///
/// The lexer never fails: characters that cannot start a token come
/// back as `TokenKind::Illegal` and are diagnosed by the parser.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// On-demand tokenizer over a borrowed source string.
///
/// `next_token` returns `TokenKind::Eof` once the input is exhausted
/// and keeps returning it on every further call. The `Iterator` impl
/// stops at end of input instead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let start = if input.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };
        Self {
            input,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let span = self.span();
        let Some(ch) = self.peek() else {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                span,
            };
        };

        if let Some(kind) = TokenKind::punctuation(ch) {
            self.advance();
            return self.token_since(kind, span);
        }

        match ch {
            '\'' => self.read_quoted(TokenKind::String, '\'', span),
            '`' => self.read_quoted(TokenKind::Template, '`', span),
            c if is_ident_start(c) => self.read_identifier(span),
            c if is_digit(c) => self.read_number(span),
            _ => {
                self.advance();
                self.token_since(TokenKind::Illegal, span)
            }
        }
    }

    const fn span(&self) -> Span {
        Span {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    fn token_since(&self, kind: TokenKind, span: Span) -> Token {
        Token {
            kind,
            text: self.input[span.offset..self.pos].to_string(),
            span,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => self.advance(),
                Some('/') if self.peek_at(1) == Some('/') => {
                    while self.peek().is_some_and(|ch| ch != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Read a string or template body. A backslash takes the next
    /// character along verbatim; nothing is unescaped. Reaching end of
    /// input closes the literal.
    fn read_quoted(&mut self, kind: TokenKind, delimiter: char, span: Span) -> Token {
        self.advance(); // opening delimiter
        let start = self.pos;

        while let Some(ch) = self.peek() {
            if ch == delimiter {
                break;
            }
            if ch == '\\' {
                self.advance();
                if self.peek().is_none() {
                    break;
                }
            }
            self.advance();
        }

        let text = self.input[start..self.pos].to_string();
        if self.peek() == Some(delimiter) {
            self.advance();
        }

        Token { kind, text, span }
    }

    fn read_identifier(&mut self, span: Span) -> Token {
        self.advance();
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        let kind = TokenKind::lookup_ident(&self.input[span.offset..self.pos]);
        self.token_since(kind, span)
    }

    fn read_number(&mut self, span: Span) -> Token {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }
        self.token_since(TokenKind::Number, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_ident_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic() || is_digit(ch)
}

/// Any Unicode numeric character, so `٣` and `３` count as digits.
fn is_digit(ch: char) -> bool {
    ch.is_numeric()
}
