//! Move history pane rendering

use crate::history::GameHistory;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding},
};

/// Render the move list pane.
///
/// Entries appear in the history's display order (oldest or newest first).
/// The currently viewed step is bold; the selection marker appears when the
/// pane is focused.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    history: &GameHistory,
    selected_step: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if history.is_ascending() {
        " Moves (oldest first) "
    } else {
        " Moves (newest first) "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    // Steps in display order
    let mut steps: Vec<usize> = (0..history.len()).collect();
    if !history.is_ascending() {
        steps.reverse();
    }

    let all_items: Vec<ListItem> = steps
        .iter()
        .map(|&step| {
            let marker = if is_focused && step == selected_step {
                "▶ "
            } else {
                "  "
            };
            let label = format!("{}{}", marker, history.entries()[step].label(step));

            let style = if step == history.viewed_step() {
                Style::default()
                    .fg(DEFAULT_THEME.selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    // Keep the selection visible when the pane is shorter than the list
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let selected_row = steps
        .iter()
        .position(|&s| s == selected_step)
        .unwrap_or(0);
    let skip = selected_row.saturating_sub(visible_height.saturating_sub(1));

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(skip)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
