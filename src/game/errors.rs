//! Error types for the game model
//!
//! This module defines [`GameError`], which represents every way a move or
//! jump request can be rejected.  None of these are fatal: the model leaves
//! history and cursor untouched on error, and the UI layer turns the value
//! into a status-bar message.

use crate::game::Mark;
use std::fmt;

/// Rejected model operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell index outside 0–8
    InvalidCellIndex { index: usize },

    /// Target cell already holds a mark
    CellOccupied { index: usize },

    /// The viewed board already has a winner; no further moves
    GameOver { winner: Mark },

    /// Jump target outside the current history bounds
    InvalidStepIndex { step: usize, len: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCellIndex { index } => {
                write!(f, "Cell index {} is out of range (0-8)", index)
            }
            GameError::CellOccupied { index } => {
                write!(f, "Cell {} is already taken", index + 1)
            }
            GameError::GameOver { winner } => {
                write!(f, "Game over: {} already won", winner)
            }
            GameError::InvalidStepIndex { step, len } => {
                write!(f, "Step {} is out of range ({} steps recorded)", step, len)
            }
        }
    }
}

impl std::error::Error for GameError {}
