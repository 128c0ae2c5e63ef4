//! cppy source code parser
//!
//! This module transforms cppy source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, syntax errors, token helpers
//! - `statements` / `expressions`: the grammar productions
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Types: `int`, `float`, `string`, `char`, `bool` (declaration only, never checked)
//! - Statements: declarations/assignments, `if`/`elif`/`else`, `while`,
//!   `print(expr);`, `read(a, b, ...);`
//! - Expressions: arithmetic with `^` for power, comparisons, `and`/`or`/`not`
//! - Comments: `//` to end of line
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
