//! Token classification and the token dump artifact
//!
//! Purely diagnostic: nothing here feeds back into translation.

use crate::parser::lexer::{Lexer, TokenKind};
use std::fmt::Write;

/// Human-readable category of a token.
///
/// `None` only for [`TokenKind::Eof`], which marks the end of a tokenized
/// vector and never appears in a dump.
pub fn classify(kind: &TokenKind) -> Option<&'static str> {
    let category = match kind {
        TokenKind::If | TokenKind::Elif | TokenKind::Else => "conditional statement",
        TokenKind::While => "loop statement",
        TokenKind::And | TokenKind::Or | TokenKind::Not => "logical operator",
        TokenKind::Print
        | TokenKind::Read
        | TokenKind::TypeInt
        | TokenKind::TypeFloat
        | TokenKind::TypeString
        | TokenKind::TypeChar
        | TokenKind::TypeBool
        | TokenKind::True
        | TokenKind::False => "reserved word",
        TokenKind::Ident(_) => "identifier",
        TokenKind::Assign => "assignment",
        TokenKind::IntLiteral(_) => "integer number",
        TokenKind::FloatLiteral(_) => "float number",
        TokenKind::StringLiteral(_) => "string literal",
        TokenKind::EqEq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Le
        | TokenKind::Gt
        | TokenKind::Ge => "relational operator",
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Caret => "arithmetic operator",
        TokenKind::LParen => "left parenthesis",
        TokenKind::RParen => "right parenthesis",
        TokenKind::LBrace => "left brace",
        TokenKind::RBrace => "right brace",
        TokenKind::Semicolon => "semicolon",
        TokenKind::Comma => "comma",
        TokenKind::Eof => return None,
    };
    Some(category)
}

/// Drain `lexer` into the dump text, one `value -> category` line per token
/// in source order.
///
/// Takes its own lexer so the parser's traversal is left untouched.
pub fn render_dump(lexer: &mut Lexer) -> String {
    let mut out = String::new();
    for token in lexer.by_ref() {
        if let Some(category) = classify(&token.kind) {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{} -> {}", token.kind, category);
        }
    }
    out
}
