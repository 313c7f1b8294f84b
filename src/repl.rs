//! Line-oriented REPL that prints the tokens of every line it reads

use crate::parser::lexer::Lexer;
use crate::parser::token::TokenKind;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "ʕ ◔ϖ◔ʔ >> ";

/// Read lines from `input` until it is exhausted, writing each line's tokens
/// (without the trailing end-of-input token) to `output`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.is(TokenKind::Eof) {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        let output = run("let x = 5;\n");

        let expected = format!(
            "{p}{{Type:let Literal:let}}\n\
             {{Type:IDENT Literal:x}}\n\
             {{Type:= Literal:=}}\n\
             {{Type:INT Literal:5}}\n\
             {{Type:; Literal:;}}\n\
             {p}\n",
            p = PROMPT
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_each_line_gets_a_fresh_lexer() {
        let output = run("a\n!=\n");

        assert!(output.contains("{Type:IDENT Literal:a}\n"));
        assert!(output.contains("{Type:!= Literal:!=}\n"));
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_empty_input_exits() {
        assert_eq!(run(""), format!("{}\n", PROMPT));
    }

    #[test]
    fn test_illegal_tokens_are_printed() {
        let output = run("@\n");
        assert!(output.contains("{Type:ILLEGAL Literal:@}\n"));
    }
}
