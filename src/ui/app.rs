//! Main TUI application state and logic

use crate::game::GameStatus;
use crate::history::GameHistory;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Board,
    Moves,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Board => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Board,
        }
    }
}

/// The main application state
pub struct App {
    /// The game model, owned exclusively by the UI
    pub history: GameHistory,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Cell the board cursor sits on (0-8, row-major)
    pub board_cursor: usize,

    /// Step the move-list selection sits on
    pub selected_step: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given game history
    pub fn new(history: GameHistory) -> Self {
        App {
            history,
            focused_pane: FocusedPane::Board,
            board_cursor: 4, // start on the center cell
            selected_step: 0,
            should_quit: false,
            status_message: String::from("X to move"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Board and move list side by side, status bar at the bottom
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

        super::panes::render_board_pane(
            frame,
            columns[0],
            self.history.viewed(),
            self.board_cursor,
            self.focused_pane == FocusedPane::Board,
        );

        super::panes::render_moves_pane(
            frame,
            columns[1],
            &self.history,
            self.selected_step,
            self.focused_pane == FocusedPane::Moves,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.history.viewed_step(),
            self.history.len(),
            self.history.status(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys place a move in that cell directly (1-9, row-major)
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c.to_digit(10).unwrap() as usize - 1;
                self.play(cell);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.history.toggle_order();
                self.status_message = if self.history.is_ascending() {
                    "Moves listed oldest first".to_string()
                } else {
                    "Moves listed newest first".to_string()
                };
            }
            KeyCode::Backspace => {
                self.jump(0);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_pane {
                FocusedPane::Board => self.play(self.board_cursor),
                FocusedPane::Moves => self.jump(self.selected_step),
            },
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Board => {
                    if self.board_cursor >= 3 {
                        self.board_cursor -= 3;
                    }
                }
                FocusedPane::Moves => self.move_selection(!self.history.is_ascending()),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Board => {
                    if self.board_cursor + 3 < 9 {
                        self.board_cursor += 3;
                    }
                }
                FocusedPane::Moves => self.move_selection(self.history.is_ascending()),
            },
            KeyCode::Left => {
                if self.focused_pane == FocusedPane::Board && self.board_cursor % 3 > 0 {
                    self.board_cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.focused_pane == FocusedPane::Board && self.board_cursor % 3 < 2 {
                    self.board_cursor += 1;
                }
            }
            _ => {}
        }
    }

    /// Apply a move and report the outcome in the status bar
    fn play(&mut self, cell: usize) {
        match self.history.apply_move(cell) {
            Ok(()) => {
                let entry = self.history.viewed();
                let (row, col) = entry.move_position.unwrap_or((0, 0));
                let mover = self.history.next_mark().other();
                self.status_message = match self.history.status() {
                    GameStatus::Won(mark) => format!("{} wins!", mark),
                    GameStatus::Drawn => "It's a draw".to_string(),
                    GameStatus::InProgress(_) => {
                        format!("{} played ({},{})", mover, row, col)
                    }
                };
                // Keep the move-list selection on the new entry
                self.selected_step = self.history.viewed_step();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Jump the time-travel cursor to a recorded step
    fn jump(&mut self, step: usize) {
        match self.history.jump_to(step) {
            Ok(()) => {
                self.selected_step = step;
                self.status_message = if step == 0 {
                    "Back to game start".to_string()
                } else {
                    format!("Viewing move #{}", step)
                };
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Move the move-list selection one visual row down (`forward` follows
    /// the display order, so Up/Down match what is on screen)
    fn move_selection(&mut self, forward: bool) {
        if forward {
            if self.selected_step + 1 < self.history.len() {
                self.selected_step += 1;
            }
        } else {
            self.selected_step = self.selected_step.saturating_sub(1);
        }
    }
}
