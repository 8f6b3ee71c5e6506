//! Human-readable rendering of a parsed tree, one node per line.

use std::fmt::Write as _;

use crate::ast::{File, Statement};

/// Render every statement as `Assign name = value` or
/// `Block name { ... }`, indenting nested bodies by two spaces.
#[must_use]
pub fn dump(file: &File) -> String {
    let mut out = String::new();
    for statement in &file.statements {
        dump_statement(&mut out, statement, 0);
    }
    out
}

fn dump_statement(out: &mut String, statement: &Statement, depth: usize) {
    let pad = "  ".repeat(depth);
    match statement {
        Statement::Assign(assign) => {
            let _ = writeln!(out, "{pad}Assign {} = {}", assign.name, assign.value);
        }
        Statement::Block(block) => {
            let _ = writeln!(out, "{pad}Block {} {{", block.name);
            for inner in &block.body {
                dump_statement(out, inner, depth + 1);
            }
            let _ = writeln!(out, "{pad}}}");
        }
    }
}
