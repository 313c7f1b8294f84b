//! Token model shared by the lexer and the parser
//!
//! A [`Token`] pairs a closed [`TokenKind`] tag with the literal text that produced
//! it. The display form of each kind is the spelling used in diagnostics
//! (`IDENT`, `INT`, `=`, `let`, ...).

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

impl TokenKind {
    /// Classify a complete identifier run: keywords map to their own kind,
    /// everything else is [`TokenKind::Ident`].
    pub fn lookup_ident(ident: &str) -> TokenKind {
        keyword_table()
            .get(ident)
            .copied()
            .unwrap_or(TokenKind::Ident)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexical unit.
///
/// The literal is the exact source text, except for [`TokenKind::Eof`] whose
/// literal is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
