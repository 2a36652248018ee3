// Snapshot history for time travel

use crate::game::{Board, GameError, GameStatus, Mark};

/// One recorded board state.
///
/// Entries are immutable once appended: time travel only moves the cursor in
/// [`GameHistory`], it never rewrites an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The board after this step's move (or the empty board for step 0).
    pub board: Board,
    /// 1-based (row, column) of the move that produced this board.
    /// `None` only for the initial entry.
    pub move_position: Option<(usize, usize)>,
    /// The completed line, recorded on the step that produced the win.
    pub winning_line: Option<[usize; 3]>,
}

impl HistoryEntry {
    fn initial() -> Self {
        HistoryEntry {
            board: Board::new(),
            move_position: None,
            winning_line: None,
        }
    }

    /// Label for the move list: "Go to game start" for step 0, otherwise
    /// "Go to move #N: (r,c)".
    pub fn label(&self, step: usize) -> String {
        match self.move_position {
            Some((row, col)) => format!("Go to move #{}: ({},{})", step, row, col),
            None => "Go to game start".to_string(),
        }
    }
}

/// Manages the move history and the time-travel cursor.
///
/// Always holds at least one entry (the empty starting board).  Applying a
/// move while viewing a past step truncates the abandoned future before the
/// new entry is appended, so there is no redo after branching.
#[derive(Debug, Clone)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    viewed_step: usize,
    ascending: bool,
}

impl GameHistory {
    pub fn new() -> Self {
        GameHistory {
            entries: vec![HistoryEntry::initial()],
            viewed_step: 0,
            ascending: true,
        }
    }

    /// Place the current turn's mark in a cell.
    ///
    /// The turn is derived from the viewed step's parity (X on even steps).
    /// On success the history is truncated to the viewed step, the new
    /// snapshot is appended with its win check already recorded, and the
    /// cursor moves to it.  On error nothing changes.
    pub fn apply_move(&mut self, cell: usize) -> Result<(), GameError> {
        if cell >= crate::game::BOARD_CELLS {
            return Err(GameError::InvalidCellIndex { index: cell });
        }
        let viewed = &self.entries[self.viewed_step];
        if let Some((winner, _)) = viewed.board.winner() {
            return Err(GameError::GameOver { winner });
        }
        if viewed.board.get(cell).is_some() {
            return Err(GameError::CellOccupied { index: cell });
        }

        // Moving from the past abandons the old future.
        self.entries.truncate(self.viewed_step + 1);

        let mut board = self.entries[self.viewed_step].board;
        board.set(cell, Mark::for_step(self.viewed_step));

        self.entries.push(HistoryEntry {
            board,
            move_position: Some((cell / 3 + 1, cell % 3 + 1)),
            winning_line: board.winner().map(|(_, line)| line),
        });
        self.viewed_step = self.entries.len() - 1;
        Ok(())
    }

    /// Move the cursor to a recorded step without touching the entries.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.entries.len() {
            return Err(GameError::InvalidStepIndex {
                step,
                len: self.entries.len(),
            });
        }
        self.viewed_step = step;
        Ok(())
    }

    /// Flip the display order of the move list.  Display-only.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Status of the viewed board: won, drawn, or whose turn it is.
    pub fn status(&self) -> GameStatus {
        let board = &self.viewed().board;
        if let Some((winner, _)) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress(self.next_mark())
        }
    }

    /// The entry at the cursor.
    pub fn viewed(&self) -> &HistoryEntry {
        &self.entries[self.viewed_step]
    }

    /// The mark that moves next from the viewed step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.viewed_step)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn viewed_step(&self) -> usize {
        self.viewed_step
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty (never true: step 0 always exists)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
