//! The pure game model: marks, the 3×3 board, and win detection.
//!
//! Nothing here touches the terminal or the history list.  A [`Board`] is a
//! value; placing a mark produces a changed copy inside [`crate::history`],
//! and [`Board::winner`] inspects a single snapshot in isolation.

pub mod errors;

pub use errors::GameError;

use std::fmt;

/// One side's mark.  X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark that moves at the given step (X on even steps).
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// The eight ways to win, checked in this order.  Rows, then columns, then
/// diagonals.  The order is part of the contract: if a hand-built board
/// carries two complete lines, the first one listed here is reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3×3 board snapshot.  Cells are indexed 0–8 row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Build a board from raw cells.  Useful for tests and for positions
    /// that legal play cannot reach.
    pub fn from_cells(cells: [Option<Mark>; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// The mark in a cell, if any.  Out-of-range indices read as empty.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Place a mark in a cell.  The caller validates the index and
    /// occupancy; this is the raw write used when building a new snapshot.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// True once all nine cells hold a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Check the board for a completed line.
    ///
    /// Returns the winning mark together with the indices of the line, or
    /// `None` when no line is complete (the game may be ongoing or drawn).
    /// Lines are scanned in [`WIN_LINES`] order, so the result is
    /// deterministic even on boards that could not arise from legal play.
    pub fn winner(&self) -> Option<(Mark, [usize; 3])> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some((mark, line));
                }
            }
        }
        None
    }
}

/// Game state derived from a viewed snapshot: in progress, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No winner yet and at least one empty cell; holds the mark to move.
    InProgress(Mark),
    /// A line is complete.
    Won(Mark),
    /// All nine cells filled with no line.
    Drawn,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress(mark) => write!(f, "Next player: {}", mark),
            GameStatus::Won(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(Board::new().winner(), None);
    }

    #[test]
    fn parity_alternates_marks() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
    }

    #[test]
    fn out_of_range_get_reads_empty() {
        assert_eq!(Board::new().get(42), None);
    }

    #[test]
    fn status_strings() {
        assert_eq!(GameStatus::InProgress(Mark::O).to_string(), "Next player: O");
        assert_eq!(GameStatus::Won(Mark::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Drawn.to_string(), "Draw");
    }
}
