//! # Application State
//!
//! Core game state for Squareword. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── puzzle: Puzzle          // board, accepted words, current path
//! ├── status_message: String  // status bar text
//! └── target_words: u8        // "Try to solve in N words" hint
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::lexicon::Lexicon;
use crate::core::progress::ProgressLine;
use crate::core::puzzle::Puzzle;

pub const WELCOME_MESSAGE: &str = "Use every letter. Words chain end to start.";

pub struct App {
    pub puzzle: Puzzle,
    pub status_message: String,
    pub target_words: u8,
}

impl App {
    pub fn new(puzzle: Puzzle, target_words: u8) -> Self {
        Self {
            puzzle,
            status_message: String::from(WELCOME_MESSAGE),
            target_words,
        }
    }

    pub fn from_config(config: &ResolvedConfig, lexicon: Arc<dyn Lexicon>) -> Self {
        let mut puzzle = Puzzle::new(config.board.clone(), lexicon);
        if let Some(target) = config.win_target {
            puzzle = puzzle.with_win_target(target);
        }
        Self::new(puzzle, config.target_words)
    }

    pub fn progress(&self) -> ProgressLine {
        ProgressLine::from_puzzle(&self.puzzle, self.target_words)
    }
}
