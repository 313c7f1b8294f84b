// Gopher: tokenizer, parser and AST inspector

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use gopher::parser::parser::Parser;
use gopher::repl;
use gopher::ui::App;

enum Mode {
    Repl,
    Inspect(String),
    Check(String),
    Help,
}

fn parse_args(args: &[String]) -> Result<Mode, String> {
    match args {
        [_] => Ok(Mode::Repl),
        [_, flag] if flag == "-h" || flag == "--help" => Ok(Mode::Help),
        [_, flag, file] if flag == "--check" => Ok(Mode::Check(file.clone())),
        [_, flag, ..] if flag.starts_with('-') => Err(format!("Unknown option '{}'", flag)),
        [_, file] => Ok(Mode::Inspect(file.clone())),
        _ => Err("Too many arguments".to_string()),
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage:");
    eprintln!("  {}                    # Start the token REPL", program_name);
    eprintln!("  {} <file>             # Inspect a file in the TUI", program_name);
    eprintln!("  {} --check <file>     # Print the tree and diagnostics", program_name);
}

fn read_source(file: &str, program_name: &str) -> Result<String, Box<dyn std::error::Error>> {
    if !Path::new(file).exists() {
        eprintln!("Error: File '{}' not found", file);
        print_usage(program_name);
        std::process::exit(1);
    }
    Ok(fs::read_to_string(file)?)
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("gopher");

    let mode = match parse_args(&args) {
        Ok(mode) => mode,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    match mode {
        Mode::Help => {
            print_usage(program_name);
            Ok(())
        }
        Mode::Repl => {
            println!(
                "Hello {}! This is the Gopher programming language!",
                current_user()
            );
            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout())?;
            Ok(())
        }
        Mode::Check(file) => {
            let source = read_source(&file, program_name)?;
            let mut parser = Parser::from_source(&source);
            let program = parser.parse_program();

            for line in program.tree_lines() {
                println!("{}", line);
            }
            for diagnostic in parser.diagnostics() {
                println!("{}:{}: {}", file, diagnostic.location, diagnostic);
            }

            if !parser.diagnostics().is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Inspect(file) => {
            let source = read_source(&file, program_name)?;

            eprintln!("Parsing {}...", file);
            let app = App::new(source);
            eprintln!(
                "Parsed {} token(s), {} statement(s), {} diagnostic(s).",
                app.tokens.len(),
                app.program.statements.len(),
                app.diagnostics.len()
            );

            run_inspector(app)
        }
    }
}

fn run_inspector(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
