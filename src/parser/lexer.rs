//! Lexer (tokenizer) for Gopher source code
//!
//! Scans raw source text one character at a time and hands out one [`Token`] per
//! call to [`Lexer::next_token`]. Unknown characters become
//! [`TokenKind::Illegal`] tokens instead of errors, so scanning never stops early.
//! Once the input is exhausted the lexer keeps returning [`TokenKind::Eof`].

use super::ast::SourceLocation;
use super::token::{Token, TokenKind};

/// Lexer for Gopher source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Collect every token up to and including the first end-of-input token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Get next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Token::new(TokenKind::Eof, "", loc);
        };

        match ch {
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),
            '0'..='9' => self.number_literal(ch, loc),

            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", loc)
                } else {
                    Token::new(TokenKind::Assign, "=", loc)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", loc)
                } else {
                    Token::new(TokenKind::Bang, "!", loc)
                }
            }

            '+' => Token::new(TokenKind::Plus, "+", loc),
            '-' => Token::new(TokenKind::Minus, "-", loc),
            '*' => Token::new(TokenKind::Asterisk, "*", loc),
            '/' => Token::new(TokenKind::Slash, "/", loc),
            '<' => Token::new(TokenKind::Lt, "<", loc),
            '>' => Token::new(TokenKind::Gt, ">", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            '(' => Token::new(TokenKind::LParen, "(", loc),
            ')' => Token::new(TokenKind::RParen, ")", loc),
            '{' => Token::new(TokenKind::LBrace, "{", loc),
            '}' => Token::new(TokenKind::RBrace, "}", loc),

            other => Token::new(TokenKind::Illegal, other.to_string(), loc),
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
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

        let kind = TokenKind::lookup_ident(&ident);
        Token::new(kind, ident, loc)
    }

    /// Parse integer literal; the digits are kept as text
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, digits, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
