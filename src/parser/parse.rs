//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helpers, and the program entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: declarations, `if`/`elif`/`else`, `while`, `print`, `read`
//! - `expressions`: one method per precedence level
//!
//! Parser methods are split across files using `impl Parser` blocks, each
//! extending the Parser with related functionality over the shared state.
//!
//! The first syntax error aborts the parse; there is no recovery.
//!
//! Input size is bounded so that parsing, printing and dropping the tree
//! stay within a thread's stack: parentheses, blocks and operand-position
//! `not` may nest [`MAX_NESTING_DEPTH`] levels, and one statement-level
//! expression may hold [`MAX_EXPRESSION_OPERATORS`] operators.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// Nesting levels opened by `(`, `{` or `not` in operand position
pub const MAX_NESTING_DEPTH: usize = 64;

/// Operator nodes in one statement-level expression
pub const MAX_EXPRESSION_OPERATORS: usize = 1000;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token the grammar does not allow at this point
    #[error("Syntax error at '{found}' on line {}: {message}", .location.line)]
    UnexpectedToken {
        found: String,
        message: String,
        location: SourceLocation,
    },

    /// The token stream ended inside a construct
    #[error("Syntax error: unexpected end of input: {message}")]
    UnexpectedEof { message: String },
}

/// Recursive descent parser for cppy
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Currently open nesting levels
    pub(crate) depth: usize,
    /// Operators seen in the expression being parsed
    pub(crate) operators: usize,
}

impl Parser {
    /// Build a parser over a fresh lexer for `source`.
    pub fn new(source: &str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(mut lexer: Lexer) -> Self {
        let tokens = lexer.tokenize();
        debug!(tokens = tokens.len() - 1, "token stream ready for parsing");
        Self {
            tokens,
            position: 0,
            depth: 0,
            operators: 0,
        }
    }

    /// Parse the entire program: one or more statements up to end of input
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        loop {
            program.statements.push(self.parse_statement()?);
            if self.is_at_end() {
                break;
            }
        }

        debug!(statements = program.statements.len(), "parsed program");
        Ok(program)
    }

    // ===== Helper methods =====

    /// Run `parse` one nesting level deeper, failing at the current token
    /// once [`MAX_NESTING_DEPTH`] levels are open.
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here("Expression or block nested too deeply"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Account for the operator at the current token.
    pub(crate) fn count_operator(&mut self) -> Result<(), ParseError> {
        if self.operators >= MAX_EXPRESSION_OPERATORS {
            return Err(self.error_here("Expression has too many operators"));
        }
        self.operators += 1;
        Ok(())
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::TypeInt
                | TokenKind::TypeFloat
                | TokenKind::TypeString
                | TokenKind::TypeChar
                | TokenKind::TypeBool
        )
    }

    /// Consume the current token if it has the same variant as `kind`.
    /// Payloads are ignored.
    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Build a syntax error pointing at the current token.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEof {
                message: message.into(),
            },
            ref kind => ParseError::UnexpectedToken {
                found: kind.to_string(),
                message: message.into(),
                location: token.location,
            },
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: &TokenKind,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(message))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&TokenKind::LParen, &format!("Expected '(' {ctx}"))
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&TokenKind::RParen, &format!("Expected ')' {ctx}"))
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&TokenKind::LBrace, &format!("Expected '{{' {ctx}"))
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&TokenKind::RBrace, &format!("Expected '}}' {ctx}"))
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(&TokenKind::Semicolon, &format!("Expected ';' {ctx}"))
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_here(format!("Expected identifier {ctx}")))
        }
    }
}
