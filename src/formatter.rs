//! Pretty-printer that serializes a YCL tree back into canonical text.
//!
//! Produces tab-indented output, one statement per line, with blank
//! lines separating blocks from their neighbours.

use std::fmt::{self, Write as _};

use crate::ast::{Expr, File, Statement};

/// Format a `File` into YCL source text.
///
/// String and template contents are written back verbatim, so any
/// tree produced by the parser re-parses to the same tree.
#[must_use]
pub fn format(file: &File) -> String {
    let mut out = String::new();
    format_statements(&mut out, &file.statements, 0);

    if !out.ends_with('\n') {
        out.push('\n');
    }

    out
}

/// Format statements with blank lines around blocks.
fn format_statements(out: &mut String, statements: &[Statement], indent: usize) {
    let mut prev_was_block = false;

    for (i, statement) in statements.iter().enumerate() {
        let is_block = matches!(statement, Statement::Block(_));

        if i > 0 && (is_block || prev_was_block) {
            out.push('\n');
        }

        format_statement(out, statement, indent);
        prev_was_block = is_block;
    }
}

fn format_statement(out: &mut String, statement: &Statement, indent: usize) {
    let prefix = "\t".repeat(indent);
    out.push_str(&prefix);

    match statement {
        Statement::Assign(assign) => {
            let _ = writeln!(out, "{} = {}", assign.name, assign.value);
        }
        Statement::Block(block) if block.body.is_empty() => {
            let _ = writeln!(out, "{} {{}}", block.name);
        }
        Statement::Block(block) => {
            let _ = writeln!(out, "{} {{", block.name);
            format_statements(out, &block.body, indent + 1);
            out.push_str(&prefix);
            out.push_str("}\n");
        }
    }
}

/// Renders the value in YCL literal syntax.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(raw) => write!(f, "'{raw}'"),
            Self::Template(raw) => write!(f, "`{raw}`"),
            Self::Number(text) | Self::Ident(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Array(elements) => {
                f.write_char('[')?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_char(']')
            }
        }
    }
}
