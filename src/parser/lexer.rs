//! Lexer (tokenizer) for cppy source code
//!
//! Converts raw source text into a lazy [`Token`] stream. Each [`Lexer`] is a
//! single forward traversal; the token dump and the parser each build their
//! own lexer over the same text so neither consumes the other's tokens.
//!
//! Lexing never fails outright. An unrecognized character is recorded as a
//! [`LexError`], skipped, and scanning resumes on the next character.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Token categories with their lexical values.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Decimal digits with leading zeros stripped; any length is valid
    IntLiteral(String),
    FloatLiteral(f64),
    StringLiteral(String),

    // Identifiers
    Ident(String),

    // Control keywords
    If,
    Elif,
    Else,
    While,
    Print,
    Read,

    // Logical keywords
    And,
    Or,
    Not,

    // Type keywords
    TypeInt,
    TypeFloat,
    TypeString,
    TypeChar,
    TypeBool,

    // Boolean literals
    True,
    False,

    // Arithmetic
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Caret, // ^

    Assign, // =

    // Comparison
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    Le,    // <=
    Gt,    // >
    Ge,    // >=

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,

    // End of input
    Eof,
}

impl TokenKind {
    /// Map a word to its reserved token, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "print" => TokenKind::Print,
            "read" => TokenKind::Read,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "int" => TokenKind::TypeInt,
            "float" => TokenKind::TypeFloat,
            "string" => TokenKind::TypeString,
            "char" => TokenKind::TypeChar,
            "bool" => TokenKind::TypeBool,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }
}

/// Literal value text: what the token dump prints and what syntax errors quote.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral(n) => write!(f, "{}", n),
            TokenKind::FloatLiteral(x) => write!(f, "{:?}", x),
            TokenKind::StringLiteral(s) => write!(f, "{}", s),
            TokenKind::Ident(s) => write!(f, "{}", s),
            TokenKind::If => write!(f, "if"),
            TokenKind::Elif => write!(f, "elif"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::While => write!(f, "while"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Read => write!(f, "read"),
            TokenKind::And => write!(f, "and"),
            TokenKind::Or => write!(f, "or"),
            TokenKind::Not => write!(f, "not"),
            TokenKind::TypeInt => write!(f, "int"),
            TokenKind::TypeFloat => write!(f, "float"),
            TokenKind::TypeString => write!(f, "string"),
            TokenKind::TypeChar => write!(f, "char"),
            TokenKind::TypeBool => write!(f, "bool"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::NotEq => write!(f, "!="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Le => write!(f, "<="),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Ge => write!(f, ">="),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A classified lexeme plus where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// Lexical diagnostics. None of these stop the lexer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Illegal character '{ch}' on line {}", .location.line)]
    IllegalCharacter { ch: char, location: SourceLocation },
}

/// Lexer for cppy source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    diagnostics: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Drain the remaining input into a vector terminated by [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.by_ref().collect();
        tokens.push(Token::new(TokenKind::Eof, self.current_location()));
        tokens
    }

    /// Lexical errors seen so far, in source order.
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<LexError> {
        self.diagnostics
    }

    fn report(&mut self, error: LexError) {
        debug!(%error, "lexical error");
        self.diagnostics.push(error);
    }

    /// Scan one token starting at the current character.
    ///
    /// `None` means input was consumed without producing a token and a
    /// diagnostic has been recorded.
    fn next_token(&mut self) -> Option<Token> {
        let loc = self.current_location();
        let ch = self.advance()?;

        let kind = match ch {
            '"' => return self.string_literal(loc),

            '0'..='9' => return self.number_literal(ch, loc),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.match_char('=') {
                    TokenKind::NotEq
                } else {
                    return self.illegal(ch, loc);
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,

            _ => return self.illegal(ch, loc),
        };

        Some(Token::new(kind, loc))
    }

    fn illegal(&mut self, ch: char, location: SourceLocation) -> Option<Token> {
        self.report(LexError::IllegalCharacter { ch, location });
        None
    }

    /// Parse string literal. The value keeps escape sequences as written.
    ///
    /// An unterminated literal rewinds to just after the opening quote and
    /// reports the quote itself as the illegal character.
    fn string_literal(&mut self, loc: SourceLocation) -> Option<Token> {
        let start = (self.position, self.line, self.column);
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance();
                    return Some(Token::new(TokenKind::StringLiteral(string), loc));
                }
                '\n' => break,
                '\\' => match self.peek_ahead(1) {
                    Some(escaped) if escaped != '\n' => {
                        string.push(ch);
                        string.push(escaped);
                        self.advance();
                        self.advance();
                    }
                    _ => break,
                },
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }

        (self.position, self.line, self.column) = start;
        self.illegal('"', loc)
    }

    /// Parse numeric literal: `digits.digits` is a float, `digits` an integer
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Option<Token> {
        let mut num_str = String::new();
        num_str.push(first_digit);
        self.take_digits(&mut num_str);

        let is_float = self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit());

        if is_float {
            self.advance();
            num_str.push('.');
            self.take_digits(&mut num_str);
            // digits.digits always parses as f64
            let value = num_str.parse::<f64>().unwrap_or(f64::INFINITY);
            return Some(Token::new(TokenKind::FloatLiteral(value), loc));
        }

        Some(Token::new(TokenKind::IntLiteral(strip_leading_zeros(num_str)), loc))
    }

    fn take_digits(&mut self, buf: &mut String) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                buf.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::keyword(&ident).unwrap_or(TokenKind::Ident(ident))
    }

    /// Skip whitespace and `//` comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.skip_line_comment();
                }
                _ => break,
            }
        }
    }

    /// Skip to the end of the line, leaving the newline for the line counter
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// `007` is not a valid Python integer literal, `7` is.
fn strip_leading_zeros(digits: String) -> String {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        "0".to_string()
    } else if significant.len() == digits.len() {
        digits
    } else {
        significant.to_string()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace_and_comments();
            if self.is_at_end() {
                return None;
            }
            if let Some(token) = self.next_token() {
                return Some(token);
            }
        }
    }
}
