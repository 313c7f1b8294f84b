// AST (Abstract Syntax Tree) definitions for the Gopher front end

use super::token::Token;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Behaviour shared by every node: access to the token that introduced it.
pub trait Node {
    /// Literal text of the originating token. Used for diagnostics and tests.
    fn token_literal(&self) -> &str;
}

/// Root of every tree the parser produces
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented outline of the tree, one node per line.
    pub fn tree_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Program ({} statements)", self.statements.len())];
        for statement in &self.statements {
            match statement {
                Statement::Let(stmt) => {
                    lines.push(format!("  LetStatement @ {}", stmt.location()));
                    lines.push(format!(
                        "    name: Identifier \"{}\" @ {}",
                        stmt.name.value,
                        stmt.name.location()
                    ));
                    match &stmt.value {
                        Some(expr) => lines.push(format!("    value: {}", expr)),
                        None => lines.push("    value: <not parsed>".to_string()),
                    }
                }
            }
        }
        lines
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
}

impl Statement {
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Let(stmt) => stmt.location(),
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Expression {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::Identifier(ident) => ident.location(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
        }
    }
}

/// `let <name> = <value>;`
///
/// The parser does not build value expressions yet, so `value` is always `None`
/// for parsed programs. The field stays optional rather than holding a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token, // the `let` token
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn location(&self) -> SourceLocation {
        self.token.location
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} = {};", self.token_literal(), self.name, value),
            None => write!(f, "{} {};", self.token_literal(), self.name),
        }
    }
}

/// A name, used as a binding target and as an expression
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token, // the IDENT token
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }

    pub fn location(&self) -> SourceLocation {
        self.token.location
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn ident(name: &str, column: usize) -> Identifier {
        Identifier::new(Token::new(
            TokenKind::Ident,
            name,
            SourceLocation::new(1, column),
        ))
    }

    fn let_statement(name: &str, value: Option<Expression>) -> Statement {
        Statement::Let(LetStatement {
            token: Token::new(TokenKind::Let, "let", SourceLocation::new(1, 1)),
            name: ident(name, 5),
            value,
        })
    }

    #[test]
    fn test_empty_program_literal() {
        assert_eq!(Program::new().token_literal(), "");
        assert_eq!(Program::new().to_string(), "");
    }

    #[test]
    fn test_program_literal_is_first_statement() {
        let program = Program {
            statements: vec![let_statement("x", None)],
        };
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_display() {
        let value = Some(Expression::Identifier(ident("anotherVar", 9)));
        let program = Program {
            statements: vec![let_statement("myVar", value), let_statement("y", None)],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;let y;");
    }

    #[test]
    fn test_identifier_value_matches_literal() {
        let name = ident("foobar", 5);
        assert_eq!(name.value, "foobar");
        assert_eq!(name.token_literal(), "foobar");
        assert_eq!(
            Expression::Identifier(name).location(),
            SourceLocation::new(1, 5)
        );
    }

    #[test]
    fn test_tree_lines() {
        let program = Program {
            statements: vec![let_statement("x", None)],
        };
        assert_eq!(
            program.tree_lines(),
            vec![
                "Program (1 statements)".to_string(),
                "  LetStatement @ 1:1".to_string(),
                "    name: Identifier \"x\" @ 1:5".to_string(),
                "    value: <not parsed>".to_string(),
            ]
        );
    }
}
