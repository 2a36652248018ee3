//! Board pane rendering

use crate::game::Mark;
use crate::history::HistoryEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Render the board pane showing the currently viewed snapshot.
///
/// Empty cells show their key number in a muted color; the three cells of a
/// completed line get a highlighted background, as does the cursor cell when
/// the pane is focused.
pub fn render_board_pane(
    frame: &mut Frame,
    area: Rect,
    entry: &HistoryEntry,
    cursor: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(0, 0, area.height.saturating_sub(7) / 2, 0));

    let separator = Line::from(Span::styled(
        "───┼───┼───",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let mut lines: Vec<Line> = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans: Vec<Span> = Vec::with_capacity(5);
        for col in 0..3 {
            let index = row * 3 + col;
            if col > 0 {
                spans.push(Span::styled(
                    "│",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            spans.push(cell_span(entry, index, cursor, is_focused));
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(separator.clone());
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Style one cell as a 3-character span
fn cell_span(entry: &HistoryEntry, index: usize, cursor: usize, is_focused: bool) -> Span<'static> {
    let on_winning_line = entry
        .winning_line
        .is_some_and(|line| line.contains(&index));

    let (text, mut style) = match entry.board.get(index) {
        Some(Mark::X) => (
            " X ".to_string(),
            Style::default()
                .fg(DEFAULT_THEME.mark_x)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            " O ".to_string(),
            Style::default()
                .fg(DEFAULT_THEME.mark_o)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            format!(" {} ", index + 1),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    };

    if on_winning_line {
        style = style.bg(DEFAULT_THEME.winner_bg);
    } else if is_focused && index == cursor {
        style = style.bg(DEFAULT_THEME.cursor_bg);
    }

    Span::styled(text, style)
}
