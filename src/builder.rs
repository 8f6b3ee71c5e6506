use crate::ast::{Assign, Block, Expr, File, Statement};

impl File {
    /// Create a new empty file.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append any statement.
    #[must_use]
    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Append a `name = value` assignment.
    #[must_use]
    pub fn assign(self, name: &str, value: impl Into<Expr>) -> Self {
        self.statement(Statement::assign(name, value))
    }

    /// Append a nested block.
    #[must_use]
    pub fn block(self, block: Block) -> Self {
        self.statement(Statement::Block(block))
    }
}

impl Block {
    /// Create a new block with an empty body.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            body: Vec::new(),
        }
    }

    /// Append any statement to the body.
    #[must_use]
    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    /// Append a `name = value` assignment to the body.
    #[must_use]
    pub fn assign(self, name: &str, value: impl Into<Expr>) -> Self {
        self.statement(Statement::assign(name, value))
    }

    /// Append a nested block to the body.
    #[must_use]
    pub fn block(self, block: Self) -> Self {
        self.statement(Statement::Block(block))
    }
}

impl Statement {
    #[must_use]
    pub fn assign(name: &str, value: impl Into<Expr>) -> Self {
        Self::Assign(Assign {
            name: name.to_string(),
            value: value.into(),
        })
    }
}

impl Expr {
    /// Single-quoted string holding `raw` exactly as it would appear
    /// between the quotes.
    #[must_use]
    pub fn string(raw: &str) -> Self {
        Self::String(raw.to_string())
    }

    /// Backtick template holding `raw` verbatim.
    #[must_use]
    pub fn template(raw: &str) -> Self {
        Self::Template(raw.to_string())
    }

    #[must_use]
    pub fn number(text: &str) -> Self {
        Self::Number(text.to_string())
    }

    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.to_string())
    }

    #[must_use]
    pub fn array(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Array(elements.into_iter().collect())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for Expr {
    fn from(value: u64) -> Self {
        Self::Number(value.to_string())
    }
}

impl From<Vec<Self>> for Expr {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}

impl From<Block> for Statement {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}
