//! Main TUI application state and logic

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::parser::{ParseError, Parser};
use crate::parser::token::Token;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Ast,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> diagnostics -> tokens -> ast)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Diagnostics => FocusedPane::Source,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Ast => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The source code being inspected
    pub source_code: String,

    /// Full token stream, ending in the end-of-input token
    pub tokens: Vec<Token>,

    pub program: Program,
    pub diagnostics: Vec<ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub ast_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Tokenize and parse `source_code` and build the inspector state.
    pub fn new(source_code: String) -> Self {
        let tokens = Lexer::new(&source_code).tokenize();
        let mut parser = Parser::from_source(&source_code);
        let program = parser.parse_program();
        let diagnostics = parser.diagnostics().to_vec();

        let status_message = if diagnostics.is_empty() {
            String::from("Parsed cleanly")
        } else {
            String::from("Parsed with diagnostics")
        };

        App {
            source_code,
            tokens,
            program,
            diagnostics,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            tokens_scroll: 0,
            ast_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Lines that carry at least one diagnostic, 1-based
    fn error_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.diagnostics.iter().map(|d| d.location.line).collect();
        lines.dedup();
        lines
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Tokens (top) | Syntax tree (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let error_lines = self.error_lines();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &error_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            right_rows[1],
            &self.program,
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.program.statements.len(),
            self.diagnostics.len(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Ast => &mut self.ast_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Panes clamp the offset when they render
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render_to_string(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_parses_source() {
        let app = App::new("let x = 5;\nlet = 1;\n".to_string());

        assert_eq!(app.program.statements.len(), 1);
        assert_eq!(app.diagnostics.len(), 1);
        assert_eq!(app.tokens.len(), 10);
        assert_eq!(app.error_lines(), vec![2]);
        assert_eq!(app.status_message, "Parsed with diagnostics");
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::new(String::new());
        assert_eq!(app.focused_pane, FocusedPane::Source);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Diagnostics);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Source);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Ast);
    }

    #[test]
    fn test_scroll_keys_target_focused_pane() {
        let mut app = App::new(String::new());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);

        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.tokens_scroll, PAGE + 1);
        assert_eq!(app.source_scroll, 0);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.tokens_scroll, PAGE);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.tokens_scroll, 0);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.tokens_scroll, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(String::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_all_panes() {
        let mut app = App::new("let answer = 42;\nlet 7;\n".to_string());
        let screen = render_to_string(&mut app);

        assert!(screen.contains("Source"));
        assert!(screen.contains("Tokens (9)"));
        assert!(screen.contains("Syntax Tree"));
        assert!(screen.contains("Diagnostics (1)"));
        assert!(screen.contains("answer"));
        assert!(screen.contains("expected next token to be IDENT, got INT instead"));
    }

    #[test]
    fn test_render_clamps_scroll() {
        let mut app = App::new("let x = 1;".to_string());
        app.tokens_scroll = 500;
        render_to_string(&mut app);
        assert_eq!(app.tokens_scroll, 0);
    }
}
