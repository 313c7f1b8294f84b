//! Token stream pane

use crate::parser::token::{Token, TokenKind};
use crate::ui::panes::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

fn kind_color(kind: TokenKind) -> ratatui::style::Color {
    if kind.is_keyword() {
        DEFAULT_THEME.keyword
    } else if kind.is_operator() {
        DEFAULT_THEME.operator
    } else {
        match kind {
            TokenKind::Int => DEFAULT_THEME.number,
            TokenKind::Illegal => DEFAULT_THEME.illegal,
            TokenKind::Eof => DEFAULT_THEME.comment,
            _ => DEFAULT_THEME.fg,
        }
    }
}

/// Render the token pane, one token per row: location, kind, literal.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);

    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|token| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>7} ", token.location.to_string()),
                    Style::default().fg(DEFAULT_THEME.location),
                ),
                Span::styled(
                    format!("{:<8}", token.kind.as_str()),
                    Style::default().fg(kind_color(token.kind)),
                ),
                Span::styled(
                    format!("{:?}", token.literal),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
