//! # Introduction
//!
//! TicTUI is tic-tac-toe with a memory.  Every move appends an immutable
//! snapshot of the board to a history list, and the history can be walked
//! backward and forward at any time through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key event → GameHistory operation → new viewed snapshot → TUI render
//! ```
//!
//! 1. [`game`] — the pure model: [`game::Mark`], [`game::Board`], win
//!    detection over the eight fixed lines, and the [`game::GameError`]
//!    taxonomy.
//! 2. [`history`] — [`history::GameHistory`], the append-and-truncate
//!    snapshot list with a time-travel cursor; moving after travelling
//!    back discards the abandoned future.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Rules
//!
//! X moves first and the sides alternate by step parity.  The first full
//! line of one mark wins; nine moves with no line is a draw.  Invalid
//! inputs (occupied cell, finished game, out-of-range index) are reported
//! as [`game::GameError`] values and never mutate the history.

pub mod game;
pub mod history;
pub mod ui;
