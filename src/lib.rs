//! YCL tokenizer, error-tolerant parser, and formatter.
//!
//! YCL is a small declarative configuration language made of
//! assignments, nested named blocks, and literal values. Parsing never
//! aborts: the result is always a tree plus every diagnostic found.
//!
//! # Quick start
//!
//! ## Parse and inspect
//!
//! ```
//! use ycl::{Expr, Statement, parse};
//!
//! let parsed = parse("name = 'YCL', server { port = 8080 }");
//! assert!(parsed.is_ok());
//! assert_eq!(parsed.file.statements.len(), 2);
//! assert_eq!(
//!     parsed.file.statements[0],
//!     Statement::assign("name", Expr::string("YCL")),
//! );
//! ```
//!
//! ## Build and format
//!
//! ```
//! use ycl::{Block, Expr, File, format};
//!
//! let file = File::new()
//!     .assign("greeting", Expr::template("Hello $(user.name)"))
//!     .block(Block::new("server").assign("port", 8080u64));
//!
//! let output = format(&file);
//! assert!(output.contains("\tport = 8080"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod dump;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use ast::{Assign, Block, Expr, File, Statement};
pub use dump::dump;
pub use formatter::format;
pub use lexer::{Lexer, tokenize};
pub use parser::{MAX_NESTING, ParseError, ParseErrorKind, Parsed, Parser, parse};
pub use token::{Span, Token, TokenKind};

/// Failure to obtain source text. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A stream could not be read to the end or was not UTF-8.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a file and parse its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Parsed, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading source file");
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&source))
}

/// Buffer a whole stream and parse it.
pub fn parse_reader(mut reader: impl Read) -> Result<Parsed, Error> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    tracing::debug!(bytes = source.len(), "read source stream");
    Ok(parse(&source))
}
