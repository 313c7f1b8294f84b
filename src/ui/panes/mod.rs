//! TUI pane rendering modules
//!
//! Each visible pane of the inspector has its own module:
//!
//! - [`source`]: Source text with lexer-driven highlighting and diagnostic markers
//! - [`tokens`]: The token stream with kinds, literals and locations
//! - [`ast`]: Indented outline of the parsed program
//! - [`diagnostics`]: Parser diagnostics
//! - [`status`]: Status bar with keybindings and counts
//!
//! Every pane module exports a `render_*` function taking the frame, the target
//! area, the data to show, whether the pane is focused, and its scroll offset.

pub mod ast;
pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;

pub use ast::render_ast_pane;
pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least one
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full.
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 3, 10);
        assert_eq!(offset, 0);

        let mut offset = 4;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_visible_height() {
        assert_eq!(visible_height(Rect::new(0, 0, 10, 12)), 10);
        assert_eq!(visible_height(Rect::new(0, 0, 10, 1)), 1);
    }
}
