//! # Board
//!
//! The fixed 12-node board: four sides of a square, three letters per side.
//!
//! ```text
//!        top[0]  top[1]  top[2]
//!   left[0] ┌──────────────────┐ right[0]
//!   left[1] │                  │ right[1]
//!   left[2] └──────────────────┘ right[2]
//!      bottom[0] bottom[1] bottom[2]
//! ```
//!
//! A board never changes once built. Everything else in the game refers to
//! positions on it through [`NodeRef`].

use std::collections::BTreeSet;
use std::fmt;

/// Letters per side.
pub const SIDE_LEN: usize = 3;

/// One edge of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    /// Stable iteration order, also the order sides appear in a board string.
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    fn slot(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Left => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Left => "left",
            Side::Right => "right",
            Side::Bottom => "bottom",
        }
    }
}

/// One of the twelve board positions. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef {
    pub side: Side,
    pub index: usize,
}

impl NodeRef {
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side.label(), self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board string did not contain exactly four sides.
    WrongSideCount(usize),
    /// A side did not contain exactly three letters.
    WrongSideLength { side: Side, len: usize },
    /// A letter was not alphabetic.
    InvalidLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongSideCount(n) => {
                write!(f, "expected 4 sides separated by commas, found {n}")
            }
            BoardError::WrongSideLength { side, len } => {
                write!(f, "{} side needs {SIDE_LEN} letters, found {len}", side.label())
            }
            BoardError::InvalidLetter(c) => write!(f, "invalid board letter: {c:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Side → three letters. Letters are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: [[char; SIDE_LEN]; 4],
}

impl Board {
    /// Build a board from letter triples given in [`Side::ALL`] order.
    pub fn new(letters: [[char; SIDE_LEN]; 4]) -> Result<Self, BoardError> {
        let mut normalized = [[' '; SIDE_LEN]; 4];
        for (side, triple) in letters.iter().enumerate() {
            for (i, &c) in triple.iter().enumerate() {
                if !c.is_alphabetic() {
                    return Err(BoardError::InvalidLetter(c));
                }
                normalized[side][i] = c.to_uppercase().next().unwrap_or(c);
            }
        }
        Ok(Self {
            letters: normalized,
        })
    }

    /// Parse `"GIA,WHO,LSE,RVT"` (top, left, right, bottom).
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let groups: Vec<&str> = s.split(',').map(str::trim).collect();
        if groups.len() != Side::ALL.len() {
            return Err(BoardError::WrongSideCount(groups.len()));
        }

        let mut letters = [[' '; SIDE_LEN]; 4];
        for (side, group) in Side::ALL.iter().zip(&groups) {
            let chars: Vec<char> = group.chars().collect();
            if chars.len() != SIDE_LEN {
                return Err(BoardError::WrongSideLength {
                    side: *side,
                    len: chars.len(),
                });
            }
            letters[side.slot()].copy_from_slice(&chars);
        }
        Self::new(letters)
    }

    /// Panics if `node.index >= SIDE_LEN`. Nodes from [`Board::nodes`] and
    /// nodes accepted by a puzzle are always in range.
    pub fn letter(&self, node: NodeRef) -> char {
        self.letters[node.side.slot()][node.index]
    }

    pub fn side(&self, side: Side) -> &[char; SIDE_LEN] {
        &self.letters[side.slot()]
    }

    /// All twelve positions, side by side in [`Side::ALL`] order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef> + '_ {
        Side::ALL
            .into_iter()
            .flat_map(|side| (0..SIDE_LEN).map(move |index| NodeRef::new(side, index)))
    }

    /// Distinct letter values on the board (duplicates across sides collapse).
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.letters.iter().flatten().copied().collect()
    }

    /// Every position holding `letter`, case-insensitive.
    pub fn find(&self, letter: char) -> Vec<NodeRef> {
        let wanted = letter.to_uppercase().next().unwrap_or(letter);
        self.nodes().filter(|n| self.letter(*n) == wanted).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            letters: [
                ['G', 'I', 'A'],
                ['W', 'H', 'O'],
                ['L', 'S', 'E'],
                ['R', 'V', 'T'],
            ],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = Side::ALL
            .iter()
            .map(|side| self.side(*side).iter().collect())
            .collect();
        write!(f, "{}", groups.join(","))
    }
}
