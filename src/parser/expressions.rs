//! Expression parsing implementation
//!
//! One method per precedence level, loosest first:
//!
//! ```text
//! or          left
//! and         left
//! not         prefix, right
//! == != < <= > >=   left, one level
//! + -         left
//! * /         left
//! ^           right
//! -           prefix (unary minus)
//! ```
//!
//! Prefix `not` and `-` are accepted wherever an operand may appear. The
//! operand of `not` extends over every tighter level, so `a == not b == c`
//! parses as `a == (not (b == c))`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (statement-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.operators = 0;
        self.parse_logical_or()
    }

    /// Parse logical OR (`or`)
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.check(&TokenKind::Or) {
            self.count_operator()?;
            let loc = self.advance().location;
            let right = self.parse_logical_and()?;
            left = binary(BinOp::Or, left, right, loc);
        }

        Ok(left)
    }

    /// Parse logical AND (`and`)
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_not()?;

        while self.check(&TokenKind::And) {
            self.count_operator()?;
            let loc = self.advance().location;
            let right = self.parse_logical_not()?;
            left = binary(BinOp::And, left, right, loc);
        }

        Ok(left)
    }

    /// Parse logical NOT (`not`), right-associative
    fn parse_logical_not(&mut self) -> Result<Expr, ParseError> {
        let negations = self.prefix_operators(&TokenKind::Not)?;
        let operand = self.parse_relational()?;
        Ok(apply_prefix(UnOp::Not, negations, operand))
    }

    /// Parse equality and relational operators (single level)
    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Le => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Ge => BinOp::Ge,
                _ => break,
            };
            self.count_operator()?;
            let loc = self.advance().location;
            let right = self.parse_additive()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    /// Parse additive (`+`, `-`)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.count_operator()?;
            let loc = self.advance().location;
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    /// Parse multiplicative (`*`, `/`)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.count_operator()?;
            let loc = self.advance().location;
            let right = self.parse_power()?;
            left = binary(op, left, right, loc);
        }

        Ok(left)
    }

    /// Parse exponentiation (`^`), right-associative
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let mut bases = Vec::new();
        let mut operand = self.parse_unary()?;

        while self.check(&TokenKind::Caret) {
            self.count_operator()?;
            let loc = self.advance().location;
            bases.push((operand, loc));
            operand = self.parse_unary()?;
        }

        // a ^ b ^ c folds from the right into a ^ (b ^ c)
        Ok(bases
            .into_iter()
            .rev()
            .fold(operand, |exponent, (base, loc)| {
                binary(BinOp::Pow, base, exponent, loc)
            }))
    }

    /// Parse prefix operators in operand position
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let negations = self.prefix_operators(&TokenKind::Minus)?;

        // `not` inside a tighter level still takes a relational operand
        let operand = if self.check(&TokenKind::Not) {
            self.nested(|p| p.parse_logical_not())?
        } else {
            self.parse_primary()?
        };

        Ok(apply_prefix(UnOp::Neg, negations, operand))
    }

    /// Consume a run of `kind` prefix operators, returning their locations
    fn prefix_operators(
        &mut self,
        kind: &TokenKind,
    ) -> Result<Vec<SourceLocation>, ParseError> {
        let mut locations = Vec::new();
        while self.check(kind) {
            self.count_operator()?;
            locations.push(self.advance().location);
        }
        Ok(locations)
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        let literal = match &self.peek().kind {
            TokenKind::IntLiteral(digits) => Some(Literal::Int(digits.clone())),
            TokenKind::FloatLiteral(x) => Some(Literal::Float(*x)),
            TokenKind::StringLiteral(s) => Some(Literal::Str(s.clone())),
            TokenKind::True => Some(Literal::Bool(true)),
            TokenKind::False => Some(Literal::Bool(false)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Expr::Literal(literal, loc));
        }

        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            return Ok(Expr::Identifier(name, loc));
        }

        // Parentheses only group; the printer parenthesizes every operator node
        if self.check(&TokenKind::LParen) {
            return self.nested(|p| {
                p.advance();
                let expr = p.parse_logical_or()?;
                p.expect_rparen("after expression")?;
                Ok(expr)
            });
        }

        Err(self.error_here("Expected an expression"))
    }
}

/// Wrap `operand` so the first location in `locations` ends up outermost
fn apply_prefix(op: UnOp, locations: Vec<SourceLocation>, operand: Expr) -> Expr {
    locations
        .into_iter()
        .rev()
        .fold(operand, |operand, loc| unary(op, operand, loc))
}

fn binary(op: BinOp, left: Expr, right: Expr, location: SourceLocation) -> Expr {
    Expr::BinaryOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
        location,
    }
}

fn unary(op: UnOp, operand: Expr, location: SourceLocation) -> Expr {
    Expr::UnaryOp {
        op,
        operand: Box::new(operand),
        location,
    }
}
