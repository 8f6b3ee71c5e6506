use serde::Serialize;

/// Complete YCL document: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    pub statements: Vec<Statement>,
}

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// `name = value`
    Assign(Assign),
    /// `name { ... }`
    Block(Block),
}

/// Named scalar binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assign {
    pub name: String,
    pub value: Expr,
}

/// Named scope holding nested statements. The body may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub name: String,
    pub body: Vec<Statement>,
}

/// Literal value or identifier reference.
///
/// `String` and `Template` hold the raw source text between the
/// delimiters. Escape sequences keep their backslash and template
/// placeholders such as `$(a.b)` are left uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Single-quoted string (`'...'`).
    String(String),
    /// Backtick template (`` `...` ``).
    Template(String),
    /// Integer literal, kept as its digit text.
    Number(String),
    Bool(bool),
    Null,
    /// `[a, b, ...]`, possibly empty and heterogeneous.
    Array(Vec<Self>),
    /// Bare identifier used as a value.
    Ident(String),
}

impl Statement {
    /// Name bound by the statement.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Assign(assign) => &assign.name,
            Self::Block(block) => &block.name,
        }
    }

    #[must_use]
    pub const fn as_assign(&self) -> Option<&Assign> {
        match self {
            Self::Assign(assign) => Some(assign),
            Self::Block(_) => None,
        }
    }

    #[must_use]
    pub const fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            Self::Assign(_) => None,
        }
    }
}

impl Expr {
    /// Short lowercase name of the variant, e.g. `"array"`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Template(_) => "template",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Ident(_) => "ident",
        }
    }
}
