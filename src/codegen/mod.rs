//! Target code generation
//!
//! - [`indent`]: the indentation formatter shared by every block construct
//! - [`python`]: AST → Python 3 source
//!
//! Retargeting to another output syntax means adding a printer next to
//! [`python::PythonPrinter`]; the parser and AST stay untouched.

pub mod indent;
pub mod python;

pub use python::PythonPrinter;
