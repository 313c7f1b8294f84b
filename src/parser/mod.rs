//! Gopher source code front end
//!
//! This module transforms Gopher source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST) with accumulated diagnostics
//! - [`ast`]: AST node definitions
//!
//! # Supported Language Subset
//!
//! The lexer recognizes the whole Gopher token set: identifiers, integer
//! literals, the operators `= + - ! * / < > == !=`, the delimiters `, ; ( ) { }`
//! and the keywords `fn let true false if else return`.
//!
//! The parser currently builds `let` statements only. The value of a binding is
//! scanned up to its `;` and not turned into an expression node.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with a two-token lookahead window.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
