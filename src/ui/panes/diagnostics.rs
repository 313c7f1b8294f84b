//! Parser diagnostics pane

use crate::parser::parser::ParseError;
use crate::ui::panes::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[ParseError],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Diagnostics ({}) ", diagnostics.len());
    let block = pane_block(&title, is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("(no diagnostics)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, diagnostics.len(), visible_height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|diagnostic| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", diagnostic.location),
                    Style::default().fg(DEFAULT_THEME.location),
                ),
                Span::styled(
                    diagnostic.to_string(),
                    Style::default().fg(DEFAULT_THEME.error),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
