//! # Progress Line
//!
//! The chain of accepted words as the player sees it:
//!
//! ```text
//! GOAT - THIS - SWEAR
//!        ^      ^  ^^    repeated letters are dimmed
//! ```
//!
//! A letter is "repeated" once its value has appeared anywhere earlier in the
//! chain, so the carried-over first letter of every word after the first is
//! always dimmed. Before any word is accepted the line shows a hint instead.

use crate::core::puzzle::Puzzle;

pub const WORD_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLetter {
    pub letter: char,
    pub repeated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressWord {
    pub letters: Vec<ProgressLetter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressLine {
    /// Nothing accepted yet.
    Hint { target_words: u8 },
    Words(Vec<ProgressWord>),
}

impl ProgressLine {
    pub fn from_puzzle(puzzle: &Puzzle, target_words: u8) -> Self {
        if puzzle.history().is_empty() {
            return ProgressLine::Hint { target_words };
        }

        let mut seen = std::collections::HashSet::new();
        let words = puzzle
            .history()
            .iter()
            .map(|nodes| ProgressWord {
                letters: nodes
                    .iter()
                    .map(|n| {
                        let letter = puzzle.board().letter(*n);
                        ProgressLetter {
                            letter,
                            repeated: !seen.insert(letter),
                        }
                    })
                    .collect(),
            })
            .collect();
        ProgressLine::Words(words)
    }

    /// Plain-text rendering, used for logs and status messages.
    pub fn text(&self) -> String {
        match self {
            ProgressLine::Hint { target_words } => format!("Try to solve in {target_words} words"),
            ProgressLine::Words(words) => words
                .iter()
                .map(|w| w.letters.iter().map(|l| l.letter).collect::<String>())
                .collect::<Vec<_>>()
                .join(WORD_SEPARATOR),
        }
    }
}
