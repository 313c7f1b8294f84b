//! # Introduction
//!
//! Gopher is a small, C-like scripting language. This crate is its front end:
//! it tokenizes source text, parses it into an AST, and offers two ways to look
//! at the result, a line REPL that prints tokens and a terminal inspector built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program (+ diagnostics) → Inspector
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the AST, collecting
//!    diagnostics instead of stopping at the first malformed statement.
//! 2. [`repl`]: reads lines from an input stream and prints their tokens.
//! 3. [`ui`]: ratatui-based inspector showing source, tokens, tree and
//!    diagnostics side by side; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use gopher::parser::parser::Parser;
//!
//! let mut parser = Parser::from_source("let x = 5; let = 10;");
//! let program = parser.parse_program();
//!
//! assert_eq!(program.statements.len(), 1);
//! assert_eq!(
//!     parser.errors(),
//!     vec!["expected next token to be IDENT, got = instead".to_string()]
//! );
//! ```

pub mod parser;
pub mod repl;
pub mod ui;
