//! Recursive descent parser
//!
//! The [`Parser`] owns its [`Lexer`] and looks at two tokens at a time:
//! `current`, the token being examined, and `peek`, the one after it. Malformed
//! statements are reported as [`ParseError`]s and dropped from the tree; parsing
//! always continues to the end of the input.
//!
//! Only `let` statements are recognized. Any other token at the start of a
//! statement is skipped without a diagnostic, and the value after `=` is
//! consumed up to the terminating `;` without building an expression.

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// Parser error type: the `peek` token did not have the expected kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: TokenKind,
    pub found: TokenKind,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected next token to be {}, got {} instead",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for Gopher
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Diagnostic messages collected so far, in the order they were raised.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn diagnostics(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse the entire program.
    ///
    /// Always returns a [`Program`]; check [`Parser::errors`] for statements that
    /// were dropped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            _ => None,
        }
    }

    /// Parse `let <ident> = ... ;`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // Skip the value up to the terminator
        while !self.current_is(TokenKind::Semicolon) {
            if self.current_is(TokenKind::Eof) {
                self.push_error(TokenKind::Semicolon, self.current.kind, self.current.location);
                return None;
            }
            self.next_token();
        }

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance only if `peek` has the expected kind, otherwise record a
    /// diagnostic against `peek`.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.push_error(expected, self.peek.kind, self.peek.location);
    }

    fn push_error(&mut self, expected: TokenKind, found: TokenKind, location: SourceLocation) {
        self.errors.push(ParseError {
            expected,
            found,
            location,
        });
    }
}
