//! Status bar rendering with keybindings and game state

use crate::game::GameStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    viewed_step: usize,
    total_steps: usize,
    status: GameStatus,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step position and the latest message
    let step_badge_bg = match status {
        GameStatus::Won(_) => DEFAULT_THEME.success,
        GameStatus::Drawn => DEFAULT_THEME.secondary,
        GameStatus::InProgress(_) => DEFAULT_THEME.primary,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", viewed_step, total_steps - 1),
            Style::default()
                .bg(step_badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping, then the game state badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" 1-9 ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" o ", key_style),
        Span::styled(" order ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⌫ ", key_style),
        Span::styled(" start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    // Game state badge
    let (badge, badge_bg) = match status {
        GameStatus::Won(mark) => (format!(" ★ {} WINS ", mark), DEFAULT_THEME.success),
        GameStatus::Drawn => (" DRAW ".to_string(), DEFAULT_THEME.secondary),
        GameStatus::InProgress(mark) => (format!(" {} TO MOVE ", mark), DEFAULT_THEME.primary),
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(badge_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
