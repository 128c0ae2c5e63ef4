// AST (Abstract Syntax Tree) definitions for the cppy translator

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Primitive types a declaration may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    String,
    Char,
    Bool,
}

impl PrimitiveType {
    /// Lower-case type name as written in source
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::String => "string",
            PrimitiveType::Char => "char",
            PrimitiveType::Bool => "bool",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // not x
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Decimal digits, never with a leading zero unless the value is 0
    Int(String),
    Float(f64),
    /// Raw text between the quotes, escapes untouched
    Str(String),
    Bool(bool),
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal, SourceLocation),
    Identifier(String, SourceLocation),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },
}

/// One `elif (cond) { ... }` arm of a conditional
#[derive(Debug, Clone, PartialEq)]
pub struct ElifBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `[type] name [= init];`
    Declaration {
        var_type: Option<PrimitiveType>,
        name: String,
        init: Option<Expr>,
        location: SourceLocation,
    },

    /// `if (..) {..} [elif (..) {..}]* [else {..}]`
    Conditional {
        condition: Expr,
        then_branch: Vec<Stmt>,
        elif_branches: Vec<ElifBranch>,
        else_branch: Option<Vec<Stmt>>,
        location: SourceLocation,
    },

    /// `while (..) {..}`
    Loop {
        condition: Expr,
        body: Vec<Stmt>,
        location: SourceLocation,
    },

    Print {
        expr: Expr,
        location: SourceLocation,
    },

    /// `read(a, b, ...);` with targets in emission order
    Read {
        targets: Vec<String>,
        location: SourceLocation,
    },
}

/// Top-level program: a non-empty ordered list of statements
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
