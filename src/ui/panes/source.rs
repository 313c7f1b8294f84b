//! Source pane rendering with syntax highlighting
//!
//! Each line is run through the real [`Lexer`], so the colours always agree
//! with what the parser sees: keywords, integers, operators and illegal
//! characters get their own styles, and whitespace between tokens is kept.
//! Lines that carry a diagnostic are marked with a `!` gutter and a tinted
//! background.

use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use crate::ui::panes::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn token_style(token: &Token) -> Style {
    match token.kind {
        kind if kind.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        kind if kind.is_operator() => Style::default().fg(DEFAULT_THEME.operator),
        TokenKind::Int => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.illegal)
            .add_modifier(Modifier::UNDERLINED),
        TokenKind::LParen | TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace => {
            Style::default().fg(DEFAULT_THEME.primary)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Split one line into styled spans using the lexer.
fn highlight_line(line: &str) -> Vec<Span<'static>> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut cursor = 0;

    let mut lexer = Lexer::new(line);
    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::Eof) {
            break;
        }

        let start = token.location.column - 1;
        if start > cursor {
            spans.push(Span::raw(chars[cursor..start].iter().collect::<String>()));
        }
        cursor = start + token.literal.chars().count();
        spans.push(Span::styled(token.literal.clone(), token_style(&token)));
    }

    if cursor < chars.len() {
        spans.push(Span::raw(chars[cursor..].iter().collect::<String>()));
    }

    spans
}

/// Render the source code pane.
///
/// `error_lines` holds the 1-based line numbers that have diagnostics.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_lines: &[usize],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let has_error = error_lines.contains(&line_num);

            let (marker, num_style) = if has_error {
                (
                    "!",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            let content = highlight_line(line);
            if has_error {
                let background = Style::default().bg(DEFAULT_THEME.current_line_bg);
                spans.extend(content.into_iter().map(|span| {
                    let style = span.style.patch(background);
                    span.style(style)
                }));
            } else {
                spans.extend(content);
            }

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let line = "  let  x = 5; @ != y";
        assert_eq!(text_of(&highlight_line(line)), line);
    }

    #[test]
    fn test_highlight_styles_keywords() {
        let spans = highlight_line("let x");
        assert_eq!(spans[0].content, "let");
        assert_eq!(spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(spans[1].content, " ");
        assert_eq!(spans[2].content, "x");
    }

    #[test]
    fn test_highlight_trailing_whitespace() {
        assert_eq!(text_of(&highlight_line("x   ")), "x   ");
        assert!(highlight_line("").is_empty());
    }
}
