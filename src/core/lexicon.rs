//! # Lexicon
//!
//! The puzzle only ever asks one question of its word list: "is this a word?"
//! That question is the [`Lexicon`] trait. Storage and loading live behind it,
//! so tests can hand the engine a five-word vocabulary.

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

const BUILTIN_WORDS: &str = include_str!("../../assets/words.txt");

/// Exact, case-insensitive membership test over a fixed word list.
pub trait Lexicon: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    /// Number of words known.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub enum LexiconError {
    Io(std::io::Error),
    /// The source held no words, so nothing could ever be accepted.
    Empty,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Io(e) => write!(f, "word list I/O error: {e}"),
            LexiconError::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for LexiconError {}

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// One word per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path).map_err(LexiconError::Io)?;
        let list = Self::parse(&text);
        if list.words.is_empty() {
            return Err(LexiconError::Empty);
        }
        info!("Loaded {} words from {}", list.words.len(), path.display());
        Ok(list)
    }

    /// The word list bundled into the binary, playable on the default board.
    pub fn builtin() -> Self {
        let list = Self::parse(BUILTIN_WORDS);
        debug!("Using built-in word list ({} words)", list.words.len());
        list
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
