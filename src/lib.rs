//! # Introduction
//!
//! cppyc translates programs in cppy, a small C-like teaching language, into
//! Python 3 source. It is a classic compiler front end: a lexer, a recursive
//! descent parser producing an AST, a flat symbol table, and a printer that
//! emits the target text.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Token dump
//! Source → Lexer → Parser → AST → PythonPrinter (+ SymbolTable) → Python
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST.
//! 2. [`dump`]: classifies every token for the `value -> category` listing.
//! 3. [`symbols`]: identifier → declared type, steering `read` conversions.
//! 4. [`codegen`]: indentation formatter and Python printer.
//! 5. [`driver`]: output naming and artifact writing for the binary.
//!
//! Each call to [`compile`] owns its own [`symbols::SymbolTable`], so
//! independent compilations never share state.

pub mod codegen;
pub mod driver;
pub mod dump;
pub mod parser;
pub mod symbols;

use codegen::indent::INDENT_UNIT;
use codegen::PythonPrinter;
use parser::lexer::{LexError, Lexer};
use parser::parse::{ParseError, Parser};
use symbols::SymbolTable;
use thiserror::Error;
use tracing::{debug, info, Level};

/// Emission settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Prefix added once per nesting level
    pub indent_unit: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent_unit: INDENT_UNIT.to_string(),
        }
    }
}

impl CompileOptions {
    /// Indent with `width` spaces per level
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(width),
        }
    }
}

/// Everything a successful compilation produces
#[derive(Debug, Clone)]
pub struct Compilation {
    /// `value -> category` lines, one per token
    pub token_dump: String,
    /// Generated Python module, header included
    pub python: String,
    /// Characters the lexer reported and skipped
    pub diagnostics: Vec<LexError>,
    /// Final state of this compilation's symbol table
    pub symbols: SymbolTable,
}

/// A failed compilation. Lexical diagnostics travel with the syntax error,
/// since a skipped character is often what caused it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("{error}")]
    Syntax {
        error: ParseError,
        /// Characters the lexer reported and skipped before the parse failed
        diagnostics: Vec<LexError>,
    },
}

impl CompileError {
    pub fn diagnostics(&self) -> &[LexError] {
        match self {
            CompileError::Syntax { diagnostics, .. } => diagnostics,
        }
    }
}

/// Translate one cppy compilation unit.
///
/// Lexes the source twice: once for the token dump, once for the parser.
/// Lexical errors never fail the compilation; the first syntax error does,
/// and then nothing is produced. Either way the lexical diagnostics are
/// returned.
pub fn compile(source: &str, options: &CompileOptions) -> Result<Compilation, CompileError> {
    let mut dump_lexer = Lexer::new(source);
    let token_dump = dump::render_dump(&mut dump_lexer);
    let diagnostics = dump_lexer.into_diagnostics();
    debug!(lexical_errors = diagnostics.len(), "token dump rendered");

    let program = match Parser::new(source).parse_program() {
        Ok(program) => program,
        Err(error) => return Err(CompileError::Syntax { error, diagnostics }),
    };

    let mut symbols = SymbolTable::new();
    let printer = PythonPrinter::new(options.indent_unit.clone());
    let python = printer.print_module(&program, &mut symbols);
    if tracing::enabled!(Level::DEBUG) {
        for (name, ty) in symbols.entries() {
            debug!(%name, %ty, "declared");
        }
    }
    info!(
        statements = program.statements.len(),
        symbols = symbols.len(),
        "translation finished"
    );

    Ok(Compilation {
        token_dump,
        python,
        diagnostics,
        symbols,
    })
}
