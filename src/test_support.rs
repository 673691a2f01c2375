//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::board::{Board, NodeRef, Side};
use crate::core::lexicon::{Lexicon, WordList};
use crate::core::puzzle::Puzzle;
use crate::core::state::App;

/// A lexicon holding exactly `words`.
pub fn fixed_lexicon(words: &[&str]) -> Arc<dyn Lexicon> {
    Arc::new(WordList::from_words(words.iter().copied()))
}

pub fn node(side: Side, index: usize) -> NodeRef {
    NodeRef::new(side, index)
}

/// Creates a test App on the default board with a small vocabulary,
/// including a four-word solution: GOAT, THIS, SWEAR, RIVAL.
pub fn test_app() -> App {
    let lexicon = fixed_lexicon(&["he", "ea", "goat", "this", "swear", "rival"]);
    App::new(Puzzle::new(Board::default(), lexicon), 4)
}
