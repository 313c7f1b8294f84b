//! AST outline pane

use crate::parser::ast::Program;
use crate::ui::panes::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the program as an indented tree, see [`Program::tree_lines`].
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Syntax Tree ", is_focused);

    if program.statements.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = program.tree_lines();
    let visible_height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            let depth = line.len() - line.trim_start().len();
            let style = match depth {
                0 => Style::default()
                    .fg(DEFAULT_THEME.node)
                    .add_modifier(Modifier::BOLD),
                2 => Style::default().fg(DEFAULT_THEME.node),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            ListItem::new(line).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
