//! Python source printer
//!
//! Walks the AST in source order and renders Python 3 text. Declarations are
//! entered into the [`SymbolTable`] as they are reached, so a `read` sees
//! exactly the typed declarations that textually precede it.
//!
//! Every operator node is printed fully parenthesized, so the printed text
//! never depends on Python's own precedence rules.

use crate::codegen::indent::{indent_with, INDENT_UNIT};
use crate::parser::ast::*;
use crate::symbols::SymbolTable;

/// Comment line that opens every generated module
pub const HEADER: &str = "# Code automatically generated by the cppy-compiler\n";

/// Python spelling of a declaration without initializer
pub const NULL_VALUE: &str = "None";

/// Renders statements and expressions as Python source
#[derive(Debug, Clone)]
pub struct PythonPrinter {
    indent_unit: String,
}

impl Default for PythonPrinter {
    fn default() -> Self {
        Self::new(INDENT_UNIT)
    }
}

impl PythonPrinter {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    /// Header, a blank line, then every statement in order.
    pub fn print_module(&self, program: &Program, symbols: &mut SymbolTable) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        out.push_str(&self.print_block(&program.statements, symbols));
        out
    }

    /// Concatenated statement fragments, not indented
    pub fn print_block(&self, statements: &[Stmt], symbols: &mut SymbolTable) -> String {
        statements
            .iter()
            .map(|stmt| self.print_statement(stmt, symbols))
            .collect()
    }

    /// One statement fragment. Always ends in a newline.
    pub fn print_statement(&self, stmt: &Stmt, symbols: &mut SymbolTable) -> String {
        match stmt {
            Stmt::Declaration {
                var_type,
                name,
                init,
                ..
            } => {
                symbols.declare(name, *var_type);
                let value = match init {
                    Some(expr) => self.print_expression(expr),
                    None => NULL_VALUE.to_string(),
                };
                format!("{} = {}\n", name, value)
            }

            Stmt::Conditional {
                condition,
                then_branch,
                elif_branches,
                else_branch,
                ..
            } => {
                let mut out = self.print_clause(
                    &format!("if {}", self.print_expression(condition)),
                    then_branch,
                    symbols,
                );
                for branch in elif_branches {
                    out.push_str(&self.print_clause(
                        &format!("elif {}", self.print_expression(&branch.condition)),
                        &branch.body,
                        symbols,
                    ));
                }
                if let Some(body) = else_branch {
                    out.push_str(&self.print_clause("else", body, symbols));
                }
                out
            }

            Stmt::Loop {
                condition, body, ..
            } => self.print_clause(
                &format!("while {}", self.print_expression(condition)),
                body,
                symbols,
            ),

            Stmt::Print { expr, .. } => {
                format!("print({}, end='')\n", self.print_expression(expr))
            }

            Stmt::Read { targets, .. } => targets
                .iter()
                .map(|name| print_input(name, symbols))
                .collect(),
        }
    }

    /// `head:` followed by the body one level deeper
    fn print_clause(&self, head: &str, body: &[Stmt], symbols: &mut SymbolTable) -> String {
        let body = self.print_block(body, symbols);
        format!("{}:\n{}", head, indent_with(&body, &self.indent_unit))
    }

    /// Expression fragment; operator nodes come out wrapped in parentheses
    pub fn print_expression(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal, _) => print_literal(literal),
            Expr::Identifier(name, _) => name.clone(),
            Expr::BinaryOp {
                op, left, right, ..
            } => format!(
                "({} {} {})",
                self.print_expression(left),
                binary_operator(*op),
                self.print_expression(right)
            ),
            Expr::UnaryOp { op, operand, .. } => match op {
                UnOp::Not => format!("(not {})", self.print_expression(operand)),
                UnOp::Neg => format!("(-{})", self.print_expression(operand)),
            },
        }
    }
}

/// One `input()` line for `name`, converted according to its declared type
fn print_input(name: &str, symbols: &SymbolTable) -> String {
    let prompt = format!(
        "Enter value for {} ({}): ",
        name,
        symbols.lookup_type(name)
    );
    match symbols.get(name) {
        Some(PrimitiveType::Int) => format!("{} = int(input('{}'))\n", name, prompt),
        Some(PrimitiveType::Float) => format!("{} = float(input('{}'))\n", name, prompt),
        _ => format!("{} = input('{}')\n", name, prompt),
    }
}

fn print_literal(literal: &Literal) -> String {
    match literal {
        Literal::Int(digits) => digits.clone(),
        Literal::Float(x) if x.is_finite() => format!("{:?}", x),
        Literal::Float(_) => "float('inf')".to_string(),
        Literal::Str(s) => format!("\"{}\"", s),
        Literal::Bool(true) => "True".to_string(),
        Literal::Bool(false) => "False".to_string(),
    }
}

/// Python spelling of a binary operator
pub fn binary_operator(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Pow => "**",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Le => "<=",
        BinOp::Gt => ">",
        BinOp::Ge => ">=",
        BinOp::And => "and",
        BinOp::Or => "or",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;

    fn render(source: &str) -> String {
        let program = Parser::new(source).parse_program().unwrap();
        PythonPrinter::default().print_block(&program.statements, &mut SymbolTable::new())
    }

    #[test]
    fn test_declaration_with_initializer() {
        assert_eq!(render("int x = 2 * (3 + y);"), "x = (2 * (3 + y))\n");
    }

    #[test]
    fn test_declaration_without_initializer() {
        let program = Parser::new("float f;").parse_program().unwrap();
        let mut symbols = SymbolTable::new();
        let out = PythonPrinter::default().print_block(&program.statements, &mut symbols);

        assert_eq!(out, "f = None\n");
        assert_eq!(symbols.get("f"), Some(PrimitiveType::Float));
    }

    #[test]
    fn test_operators_pass_through_except_power() {
        assert_eq!(
            render("x = a ^ 2 != b / c;"),
            "x = ((a ** 2) != (b / c))\n"
        );
        assert_eq!(
            render("x = a <= b and not c or d;"),
            "x = (((a <= b) and (not c)) or d)\n"
        );
        assert_eq!(render("x = -a - -1;"), "x = ((-a) - (-1))\n");
    }

    #[test]
    fn test_literals() {
        assert_eq!(render("x = 3.14;"), "x = 3.14\n");
        assert_eq!(render("x = 2.0;"), "x = 2.0\n");
        assert_eq!(render("x = 007;"), "x = 7\n");
        assert_eq!(render("x = true;"), "x = True\n");
        assert_eq!(render("x = false;"), "x = False\n");
        assert_eq!(render(r#"x = "a\tb";"#), "x = \"a\\tb\"\n");
    }

    #[test]
    fn test_print_suppresses_newline() {
        assert_eq!(render("print(\"hi\");"), "print(\"hi\", end='')\n");
    }

    #[test]
    fn test_read_uses_declared_types() {
        let source = "int a; float b; char c; read(a, b, c, d);";
        let expected = "a = None\n\
                        b = None\n\
                        c = None\n\
                        a = int(input('Enter value for a (int): '))\n\
                        b = float(input('Enter value for b (float): '))\n\
                        c = input('Enter value for c (char): ')\n\
                        d = input('Enter value for d (string): ')\n";

        assert_eq!(render(source), expected);
    }

    #[test]
    fn test_read_before_declaration_is_untyped() {
        assert_eq!(
            render("read(n); int n;"),
            "n = input('Enter value for n (string): ')\nn = None\n"
        );
    }

    #[test]
    fn test_untyped_redeclaration_keeps_type() {
        assert_eq!(
            render("int n = 1; n = 2; read(n);"),
            "n = 1\nn = 2\nn = int(input('Enter value for n (int): '))\n"
        );
    }

    #[test]
    fn test_declarations_in_blocks_are_global() {
        let out = render("if (c) { float r; } read(r);");

        assert!(out.ends_with("r = float(input('Enter value for r (float): '))\n"));
    }

    #[test]
    fn test_if_elif_else_layout() {
        let out = render("if (true) { print(1); } elif (false) { print(2); } else { print(3); }");

        assert_eq!(
            out,
            "if True:\n    print(1, end='')\nelif False:\n    print(2, end='')\nelse:\n    print(3, end='')\n"
        );
    }

    #[test]
    fn test_nested_blocks_accumulate_indent() {
        let out = render("while (a) { if (b) { x = 1; } y = 2; }");

        assert_eq!(out, "while a:\n    if b:\n        x = 1\n    y = 2\n");
    }

    #[test]
    fn test_custom_indent_unit() {
        let program = Parser::new("while (x < 10) { x = x + 1; }")
            .parse_program()
            .unwrap();
        let out = PythonPrinter::new("\t").print_block(&program.statements, &mut SymbolTable::new());

        assert_eq!(out, "while (x < 10):\n\tx = (x + 1)\n");
    }

    #[test]
    fn test_module_header() {
        let program = Parser::new("x = 1;").parse_program().unwrap();
        let out = PythonPrinter::default().print_module(&program, &mut SymbolTable::new());

        assert_eq!(
            out,
            "# Code automatically generated by the cppy-compiler\n\nx = 1\n"
        );
    }
}
