//! Statement parsing implementation
//!
//! This module handles parsing of all cppy statement types:
//!
//! - Declarations: `int x = 42;`, `x = x + 1;`, `float y;`
//! - Conditionals: `if (..) { .. } elif (..) { .. } else { .. }`
//! - Loops: `while (..) { .. }`
//! - I/O: `print(expr);`, `read(a, b);`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | conditional | loop | print | read
//! declaration ::= [type] IDENT ['=' expr] ';'
//! conditional ::= 'if' '(' expr ')' block ('elif' '(' expr ')' block)* ['else' block]
//! loop        ::= 'while' '(' expr ')' block
//! print       ::= 'print' '(' expr ')' ';'
//! read        ::= 'read' '(' IDENT (',' IDENT)* ')' ';'
//! block       ::= '{' statement+ '}'
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();

        if self.match_token(&TokenKind::If) {
            return self.parse_conditional(loc);
        }

        if self.match_token(&TokenKind::While) {
            return self.parse_loop(loc);
        }

        if self.match_token(&TokenKind::Print) {
            return self.parse_print(loc);
        }

        if self.match_token(&TokenKind::Read) {
            return self.parse_read(loc);
        }

        if self.is_type_keyword() || matches!(self.peek().kind, TokenKind::Ident(_)) {
            return self.parse_declaration(loc);
        }

        Err(self.error_here("Expected a statement"))
    }

    /// Parse block: `{ statement+ }`
    fn parse_block(&mut self, ctx: &str) -> Result<Vec<Stmt>, ParseError> {
        self.nested(|p| {
            p.expect_lbrace(ctx)?;

            let mut statements = vec![p.parse_statement()?];
            while !p.check(&TokenKind::RBrace) && !p.is_at_end() {
                statements.push(p.parse_statement()?);
            }

            p.expect_rbrace("after block")?;
            Ok(statements)
        })
    }

    /// Parse a parenthesized condition after `keyword`
    fn parse_condition(&mut self, keyword: &str) -> Result<Expr, ParseError> {
        self.expect_lparen(&format!("after '{keyword}'"))?;
        let condition = self.parse_expression()?;
        self.expect_rparen(&format!("after {keyword} condition"))?;
        Ok(condition)
    }

    /// Parse declaration or assignment: `[type] name [= init];`
    fn parse_declaration(&mut self, loc: SourceLocation) -> Result<Stmt, ParseError> {
        let var_type = self.parse_optional_type();
        let name = self.expect_identifier("in declaration")?;

        let init = if self.match_token(&TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_semicolon("after declaration")?;

        Ok(Stmt::Declaration {
            var_type,
            name,
            init,
            location: loc,
        })
    }

    fn parse_optional_type(&mut self) -> Option<PrimitiveType> {
        let ty = match self.peek().kind {
            TokenKind::TypeInt => PrimitiveType::Int,
            TokenKind::TypeFloat => PrimitiveType::Float,
            TokenKind::TypeString => PrimitiveType::String,
            TokenKind::TypeChar => PrimitiveType::Char,
            TokenKind::TypeBool => PrimitiveType::Bool,
            _ => return None,
        };
        self.advance();
        Some(ty)
    }

    /// Parse if statement with its elif chain and optional else
    fn parse_conditional(&mut self, loc: SourceLocation) -> Result<Stmt, ParseError> {
        let condition = self.parse_condition("if")?;
        let then_branch = self.parse_block("after if condition")?;

        let mut elif_branches = Vec::new();
        while self.match_token(&TokenKind::Elif) {
            let condition = self.parse_condition("elif")?;
            let body = self.parse_block("after elif condition")?;
            elif_branches.push(ElifBranch { condition, body });
        }

        let else_branch = if self.match_token(&TokenKind::Else) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };

        Ok(Stmt::Conditional {
            condition,
            then_branch,
            elif_branches,
            else_branch,
            location: loc,
        })
    }

    /// Parse while statement
    fn parse_loop(&mut self, loc: SourceLocation) -> Result<Stmt, ParseError> {
        let condition = self.parse_condition("while")?;
        let body = self.parse_block("after while condition")?;

        Ok(Stmt::Loop {
            condition,
            body,
            location: loc,
        })
    }

    fn parse_print(&mut self, loc: SourceLocation) -> Result<Stmt, ParseError> {
        self.expect_lparen("after 'print'")?;
        let expr = self.parse_expression()?;
        self.expect_rparen("after print argument")?;
        self.expect_semicolon("after print")?;

        Ok(Stmt::Print {
            expr,
            location: loc,
        })
    }

    /// Parse read statement: `read(a, b, ...);`
    fn parse_read(&mut self, loc: SourceLocation) -> Result<Stmt, ParseError> {
        self.expect_lparen("after 'read'")?;

        let mut targets = vec![self.expect_identifier("in read list")?];
        while self.match_token(&TokenKind::Comma) {
            targets.push(self.expect_identifier("after ',' in read list")?);
        }

        self.expect_rparen("after read list")?;
        self.expect_semicolon("after read")?;

        Ok(Stmt::Read {
            targets,
            location: loc,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseError, Parser, MAX_NESTING_DEPTH};

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::new(source).parse_program()
    }

    #[test]
    fn test_declaration_forms() {
        let program = parse("int a = 1; float b; c = 2; d;").unwrap();

        match &program.statements[..] {
            [Stmt::Declaration {
                var_type: Some(PrimitiveType::Int),
                init: Some(_),
                ..
            }, Stmt::Declaration {
                var_type: Some(PrimitiveType::Float),
                init: None,
                ..
            }, Stmt::Declaration {
                var_type: None,
                init: Some(_),
                ..
            }, Stmt::Declaration {
                var_type: None,
                init: None,
                name,
                ..
            }] => assert_eq!(name, "d"),
            other => panic!("Unexpected statements: {:?}", other),
        }
    }

    #[test]
    fn test_conditional_with_elif_chain() {
        let source = r#"
            if (a) { print(1); }
            elif (b) { print(2); }
            elif (c) { print(3); }
            else { print(4); }
        "#;
        let program = parse(source).unwrap();

        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Conditional {
                then_branch,
                elif_branches,
                else_branch,
                location,
                ..
            } => {
                assert_eq!(then_branch.len(), 1);
                assert_eq!(elif_branches.len(), 2);
                assert!(else_branch.is_some());
                assert_eq!(location.line, 2);
            }
            other => panic!("Expected conditional, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_loop() {
        let program = parse("while (i < 3) { while (j) { j = 0; } i = i + 1; }").unwrap();

        match &program.statements[0] {
            Stmt::Loop { body, .. } => {
                assert_eq!(body.len(), 2);
                assert!(matches!(body[0], Stmt::Loop { .. }));
            }
            other => panic!("Expected loop, got {:?}", other),
        }
    }

    #[test]
    fn test_read_list_order() {
        let program = parse("read(b, a, c);").unwrap();

        match &program.statements[0] {
            Stmt::Read { targets, .. } => assert_eq!(targets, &["b", "a", "c"]),
            other => panic!("Expected read, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_block_is_error() {
        let err = parse("while (x) { }").unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnexpectedToken { ref found, .. } if found == "}"
        ));
    }

    #[test]
    fn test_else_without_if_is_error() {
        let err = parse("x = 1;\nelse { x = 2; }").unwrap_err();

        assert_eq!(err.to_string(), "Syntax error at 'else' on line 2: Expected a statement");
    }

    #[test]
    fn test_read_requires_identifiers() {
        assert!(parse("read();").is_err());
        assert!(parse("read(a,);").is_err());
        assert!(parse("read(1);").is_err());
    }

    #[test]
    fn test_typed_declaration_requires_identifier() {
        let err = parse("int = 3;").unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnexpectedToken { ref found, ref message, .. }
                if found == "=" && message == "Expected identifier in declaration"
        ));
    }

    #[test]
    fn test_deeply_nested_blocks_are_rejected() {
        let source = format!("{}x = 1;{}", "while (x) { ".repeat(1000), "}".repeat(1000));
        let err = parse(&source).unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnexpectedToken { ref found, ref message, .. }
                if found == "{" && message == "Expression or block nested too deeply"
        ));
    }

    #[test]
    fn test_blocks_nest_up_to_the_limit() {
        let source = format!(
            "{}x = 1;{}",
            "if (x) { ".repeat(MAX_NESTING_DEPTH),
            "}".repeat(MAX_NESTING_DEPTH)
        );

        assert!(parse(&source).is_ok());
    }
}
