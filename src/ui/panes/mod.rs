//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI.
//!
//! # Pane Modules
//!
//! - [`board`]: the 3×3 grid with cursor and winning-line highlighting
//! - [`moves`]: the move history list with time-travel selection
//! - [`status`]: status bar with keybindings and game state
//!
//! Each pane module exports a single `render_*` function that draws from the
//! model without mutating it; all state lives in [`crate::ui::app::App`].

pub mod board;
pub mod moves;
pub mod status;

// Re-export render functions for convenience
pub use board::render_board_pane;
pub use moves::render_moves_pane;
pub use status::render_status_bar;
