//! Lexer edge cases.

use ycl::{Lexer, TokenKind, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn lex_only_whitespace() {
    assert!(tokenize("   \t  \n\r\n  ").is_empty());
}

#[test]
fn lex_only_comments() {
    assert!(tokenize("// one\n   // two\n//three").is_empty());
}

#[test]
fn lex_comment_without_space() {
    assert_eq!(kinds("a=1//c\nb=2").len(), 6);
}

#[test]
fn lex_unicode_whitespace() {
    // no-break space and em space are whitespace too
    assert_eq!(kinds("a\u{00A0}=\u{2003}1"), kinds("a = 1"));
}

#[test]
fn lex_block_tokens() {
    assert_eq!(
        kinds("obj { a = [1, 'x'] }"),
        vec![
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::LBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::String,
            TokenKind::RBracket,
            TokenKind::RBrace,
        ]
    );
}

// -----------------------------------------------------------
// Identifiers and numbers.
// -----------------------------------------------------------

#[test]
fn lex_identifier_forms() {
    let tokens = tokenize("_private $var café x1_2");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["_private", "$var", "café", "x1_2"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
}

#[test]
fn lex_dollar_only_starts_identifiers() {
    // `$` is accepted at the start but does not continue an identifier
    let tokens = tokenize("a$b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "a");
    assert_eq!(tokens[1].text, "$b");
}

#[test]
fn lex_number_then_identifier() {
    let tokens = tokenize("12ab");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "12");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].text, "ab");
}

#[test]
fn lex_unicode_digit_starts_number() {
    let tokens = tokenize("١٢٣,");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "١٢٣");
    assert_eq!(tokens[1].kind, TokenKind::Comma);
}

#[test]
fn lex_unicode_digit_continues_identifier() {
    let tokens = tokenize("port٣ = ８０");
    assert_eq!(
        kinds("port٣ = ８０"),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Number]
    );
    assert_eq!(tokens[0].text, "port٣");
    assert_eq!(tokens[2].text, "８０");
}

#[test]
fn lex_no_sign_or_fraction() {
    assert_eq!(
        kinds("-3.14"),
        vec![
            TokenKind::Illegal,
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Number,
        ]
    );
}

#[test]
fn lex_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("TRUE Null false"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::False]
    );
}

// -----------------------------------------------------------
// Strings and templates.
// -----------------------------------------------------------

#[test]
fn lex_empty_string_and_template() {
    let tokens = tokenize("'' ``");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "");
    assert_eq!(tokens[1].kind, TokenKind::Template);
    assert_eq!(tokens[1].text, "");
}

#[test]
fn lex_string_spans_lines() {
    let tokens = tokenize("'line1\nline2' next");
    assert_eq!(tokens[0].text, "line1\nline2");
    assert_eq!(tokens[1].span.line, 2);
}

#[test]
fn lex_escaped_backslash_before_quote() {
    // `\\` is an escaped backslash, so the following quote closes
    let tokens = tokenize(r"'a\\' b");
    assert_eq!(tokens[0].text, r"a\\");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
}

#[test]
fn lex_escaped_backtick_in_template() {
    let tokens = tokenize(r"`a\`b`");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, r"a\`b");
}

#[test]
fn lex_other_quote_inside_literal() {
    let tokens = tokenize("'say `hi`' `it's`");
    assert_eq!(tokens[0].text, "say `hi`");
    assert_eq!(tokens[1].text, "it's");
}

#[test]
fn lex_comment_marker_inside_string() {
    let tokens = tokenize("'http://example.com'");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "http://example.com");
}

#[test]
fn lex_unterminated_template() {
    let tokens = tokenize("`open $(x)");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Template);
    assert_eq!(tokens[0].text, "open $(x)");
}

// -----------------------------------------------------------
// Illegal characters and positions.
// -----------------------------------------------------------

#[test]
fn lex_illegal_characters_one_at_a_time() {
    let tokens = tokenize("??#");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Illegal));
    assert_eq!(tokens[2].text, "#");
}

#[test]
fn lex_token_span_offsets_are_bytes() {
    let tokens = tokenize("ü = 1");
    assert_eq!(tokens[1].span.offset, 3);
    assert_eq!(tokens[1].span.column, 3);
}

#[test]
fn lex_crlf_line_numbers() {
    let tokens = tokenize("a\r\nb");
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
}

#[test]
fn lex_eof_token_position() {
    let mut lexer = Lexer::new("a\n");
    lexer.next_token();
    let eof = lexer.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.text, "");
    assert_eq!((eof.span.line, eof.span.column, eof.span.offset), (2, 1, 2));
}

#[test]
fn lex_iterator_is_fused() {
    let mut lexer = Lexer::new("x");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}
