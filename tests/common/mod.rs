#![allow(dead_code)]

use ycl::{Expr, File, Statement, format, parse};

/// Parse input that must produce no diagnostics.
pub fn parse_clean(input: &str) -> File {
    let parsed = parse(input);
    assert!(
        parsed.errors.is_empty(),
        "unexpected diagnostics: {:?}\n--- input ---\n{input}",
        parsed.errors
    );
    parsed.file
}

/// Value of the only statement, which must be an assignment.
pub fn single_value(input: &str) -> Expr {
    let file = parse_clean(input);
    assert_eq!(file.statements.len(), 1, "input: {input}");
    match file.statements.into_iter().next() {
        Some(Statement::Assign(assign)) => assign.value,
        other => panic!("expected one assignment, got {other:?}"),
    }
}

/// Format then parse, asserting the tree comes back unchanged.
pub fn assert_tree_roundtrip(original: &File) {
    let formatted = format(original);
    let parsed = parse(&formatted);
    assert!(
        parsed.errors.is_empty(),
        "formatted output has diagnostics: {:?}\n--- formatted ---\n{formatted}",
        parsed.errors
    );
    assert_eq!(
        original, &parsed.file,
        "tree mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Parse then format, asserting canonical input is reproduced exactly.
pub fn roundtrip(input: &str) {
    let file = parse_clean(input);
    let output = format(&file);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}
