//! Squareword library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::board::{Board, BoardError, NodeRef, Side};
pub use crate::core::lexicon::{Lexicon, LexiconError, WordList};
pub use crate::core::puzzle::{Puzzle, SubmitOutcome};
