//! # Puzzle Engine
//!
//! The whole rule set of the game lives here. The engine owns three things:
//!
//! ```text
//! Puzzle
//! ├── board: Board               // fixed for the lifetime of the puzzle
//! ├── history: Vec<Vec<NodeRef>> // accepted words, oldest first
//! └── path: Vec<NodeRef>         // word being assembled
//! ```
//!
//! and changes them only through four operations: [`Puzzle::select_node`],
//! [`Puzzle::delete_last`], [`Puzzle::submit`], [`Puzzle::restart`].
//!
//! Derived values (assembled word, used letters, highlighting) are recomputed
//! from those fields on every call and never cached. The one exception is the
//! win flag: it latches on the submit that completes the board and stays set
//! until [`Puzzle::restart`], even if a later delete reopens a word.
//!
//! ## Chaining
//!
//! After a word is accepted, its last node becomes the first node of the next
//! path. Deleting that lone carried-over node reopens the previous word:
//!
//! ```text
//! history [[H,E]]        path [E]      --delete-->  history []  path [H,E]
//! history [[H,E],[E,A]]  path [A]      --delete-->  history [[H,E]]  path [E,A]
//! ```

use log::{debug, info};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::board::{Board, NodeRef, SIDE_LEN};
use crate::core::lexicon::Lexicon;

/// Result of [`Puzzle::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was in the lexicon and has been appended to the history.
    Accepted { word: String },
    /// Not a word. Nothing changed.
    InvalidWord { word: String },
    /// The path was empty. Nothing changed.
    Empty,
}

pub struct Puzzle {
    board: Board,
    lexicon: Arc<dyn Lexicon>,
    history: Vec<Vec<NodeRef>>,
    path: Vec<NodeRef>,
    win_target: usize,
    won: bool,
}

impl Puzzle {
    /// A fresh puzzle. The win target is the number of distinct letters on
    /// the board (12 when no letter repeats).
    pub fn new(board: Board, lexicon: Arc<dyn Lexicon>) -> Self {
        let win_target = board.distinct_letters().len();
        Self {
            board,
            lexicon,
            history: Vec::new(),
            path: Vec::new(),
            win_target,
            won: false,
        }
    }

    /// Override how many distinct letters must be used to win.
    pub fn with_win_target(mut self, target: usize) -> Self {
        self.win_target = target;
        self
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Append `node` to the path. Selecting from the same side as the
    /// current tail, or a node that is not on the board, is silently ignored.
    /// Returns whether the node was added.
    pub fn select_node(&mut self, node: NodeRef) -> bool {
        if !self.can_select(node) {
            debug!("Ignoring selection of {node}");
            return false;
        }
        self.path.push(node);
        debug!("Selected {node}, word is now {:?}", self.assembled_word());
        true
    }

    /// Select the first selectable node carrying `letter`. Returns the node
    /// that was chosen, or `None` if no such node can be selected right now.
    pub fn select_letter(&mut self, letter: char) -> Option<NodeRef> {
        let node = self
            .board
            .find(letter)
            .into_iter()
            .find(|n| self.can_select(*n))?;
        self.select_node(node).then_some(node)
    }

    /// Remove the last letter. If the path is only the chain letter carried
    /// over from the previous word, reopen that word for editing instead.
    pub fn delete_last(&mut self) {
        if self.path.len() == 1
            && let Some(previous) = self.history.pop()
        {
            debug!("Reopening accepted word {:?}", self.word_for(&previous));
            self.path = previous;
            return;
        }
        if let Some(node) = self.path.pop() {
            debug!("Deleted {node}");
        }
    }

    /// Validate the assembled word against the lexicon. On success the path
    /// moves into the history and its last node starts the next path.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(&tail) = self.path.last() else {
            return SubmitOutcome::Empty;
        };

        let word = self.assembled_word();
        if !self.lexicon.contains(&word.to_lowercase()) {
            debug!("Rejected {word:?}: not in lexicon");
            return SubmitOutcome::InvalidWord { word };
        }

        let accepted = std::mem::replace(&mut self.path, vec![tail]);
        self.history.push(accepted);
        if !self.won && self.used_letters().len() >= self.win_target {
            info!("Puzzle solved in {} words", self.history.len());
            self.won = true;
        }
        debug!(
            "Accepted {word:?} ({} words, {}/{} letters used)",
            self.history.len(),
            self.used_letters().len(),
            self.win_target
        );
        SubmitOutcome::Accepted { word }
    }

    pub fn restart(&mut self) {
        self.history.clear();
        self.path.clear();
        self.won = false;
        debug!("Puzzle restarted");
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Vec<NodeRef>] {
        &self.history
    }

    pub fn path(&self) -> &[NodeRef] {
        &self.path
    }

    pub fn win_target(&self) -> usize {
        self.win_target
    }

    /// Letters along the current path, in board case.
    pub fn assembled_word(&self) -> String {
        self.word_for(&self.path)
    }

    /// Spelling of any node sequence on this board.
    pub fn word_for(&self, nodes: &[NodeRef]) -> String {
        nodes.iter().map(|n| self.board.letter(*n)).collect()
    }

    /// Distinct letter values across all accepted words.
    pub fn used_letters(&self) -> BTreeSet<char> {
        self.history
            .iter()
            .flatten()
            .map(|n| self.board.letter(*n))
            .collect()
    }

    /// True once accepted words have covered every distinct board letter.
    pub fn is_win(&self) -> bool {
        self.won
    }

    pub fn is_visited(&self, node: NodeRef) -> bool {
        self.is_part_of_current_path(node) || self.history.iter().flatten().any(|n| *n == node)
    }

    pub fn is_part_of_current_path(&self, node: NodeRef) -> bool {
        self.path.contains(&node)
    }

    pub fn is_current_tail(&self, node: NodeRef) -> bool {
        self.path.last() == Some(&node)
    }

    /// False when `node` is off the board or sits on the same side as the
    /// current tail.
    pub fn can_select(&self, node: NodeRef) -> bool {
        node.index < SIDE_LEN && self.path.last().is_none_or(|tail| tail.side != node.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Side;
    use crate::test_support::{fixed_lexicon, node};

    fn puzzle(words: &[&str]) -> Puzzle {
        Puzzle::new(Board::default(), fixed_lexicon(words))
    }

    #[test]
    fn test_new_puzzle_is_empty() {
        let p = puzzle(&[]);
        assert!(p.path().is_empty());
        assert!(p.history().is_empty());
        assert_eq!(p.assembled_word(), "");
        assert_eq!(p.win_target(), 12);
        assert!(!p.is_win());
    }

    #[test]
    fn test_same_side_selection_is_ignored() {
        let mut p = puzzle(&[]);
        assert!(p.select_node(node(Side::Left, 1)));
        assert!(!p.can_select(node(Side::Left, 0)));
        assert!(!p.select_node(node(Side::Left, 0)));
        assert_eq!(p.path(), &[node(Side::Left, 1)]);
    }

    #[test]
    fn test_off_board_node_is_ignored() {
        let mut p = puzzle(&[]);
        p.select_node(node(Side::Left, 1));
        assert!(!p.can_select(node(Side::Top, 3)));
        assert!(!p.select_node(node(Side::Top, 3)));
        assert!(!p.select_node(node(Side::Right, usize::MAX)));
        assert_eq!(p.path(), &[node(Side::Left, 1)]);
        assert_eq!(p.assembled_word(), "H");
        assert_eq!(p.used_letters().len(), 0);
    }

    #[test]
    fn test_reselecting_a_node_is_allowed() {
        let mut p = puzzle(&[]);
        p.select_node(node(Side::Top, 2));
        p.select_node(node(Side::Bottom, 2));
        assert!(p.select_node(node(Side::Top, 2)));
        assert_eq!(p.assembled_word(), "ATA");
    }

    #[test]
    fn test_submit_empty_path_is_noop() {
        let mut p = puzzle(&["he"]);
        assert_eq!(p.submit(), SubmitOutcome::Empty);
        assert!(p.history().is_empty());
    }

    #[test]
    fn test_submit_chains_last_node() {
        let mut p = puzzle(&["he"]);
        p.select_node(node(Side::Left, 1));
        p.select_node(node(Side::Right, 2));
        assert_eq!(
            p.submit(),
            SubmitOutcome::Accepted {
                word: "HE".to_string()
            }
        );
        assert_eq!(p.history(), &[vec![node(Side::Left, 1), node(Side::Right, 2)]]);
        assert_eq!(p.path(), &[node(Side::Right, 2)]);
        assert!(p.is_current_tail(node(Side::Right, 2)));
    }

    #[test]
    fn test_delete_on_empty_state_is_noop() {
        let mut p = puzzle(&[]);
        p.delete_last();
        assert!(p.path().is_empty());
        assert!(p.history().is_empty());
    }

    #[test]
    fn test_delete_single_letter_without_history() {
        let mut p = puzzle(&[]);
        p.select_node(node(Side::Top, 0));
        p.delete_last();
        assert!(p.path().is_empty());
    }

    #[test]
    fn test_select_letter_picks_selectable_node() {
        let mut p = Puzzle::new(
            Board::parse("ABC,DEF,GHI,JKA").unwrap(),
            fixed_lexicon(&[]),
        );
        assert_eq!(p.select_letter('a'), Some(node(Side::Top, 0)));
        assert_eq!(p.select_letter('b'), None);
        assert_eq!(p.select_letter('a'), Some(node(Side::Bottom, 2)));
        assert_eq!(p.select_letter('z'), None);
        assert_eq!(p.assembled_word(), "AA");
    }

    #[test]
    fn test_visited_covers_history_and_path() {
        let mut p = puzzle(&["he"]);
        p.select_node(node(Side::Left, 1));
        p.select_node(node(Side::Right, 2));
        p.submit();
        p.select_node(node(Side::Top, 2));

        assert!(p.is_visited(node(Side::Left, 1)));
        assert!(p.is_visited(node(Side::Top, 2)));
        assert!(!p.is_visited(node(Side::Bottom, 0)));
        assert!(!p.is_part_of_current_path(node(Side::Left, 1)));
        assert!(p.is_part_of_current_path(node(Side::Right, 2)));
        assert!(!p.is_current_tail(node(Side::Right, 2)));
    }

    #[test]
    fn test_win_counts_letter_values_not_positions() {
        // 'A' appears twice, so 11 distinct letters.
        let board = Board::parse("ABC,DEF,GHI,JKA").unwrap();
        let mut p = Puzzle::new(board, fixed_lexicon(&["ad", "dg"]));
        assert_eq!(p.win_target(), 11);

        p.select_letter('a');
        p.select_letter('d');
        p.submit();
        assert_eq!(p.used_letters().len(), 2);
        assert!(!p.is_win());
    }

    #[test]
    fn test_with_win_target_overrides_default() {
        let mut p = puzzle(&["he"]).with_win_target(2);
        p.select_node(node(Side::Left, 1));
        p.select_node(node(Side::Right, 2));
        assert!(!p.is_win());
        p.submit();
        assert!(p.is_win());
    }

    #[test]
    fn test_win_survives_reopening_a_word() {
        let mut p = puzzle(&["he", "ea"]).with_win_target(3);
        p.select_node(node(Side::Left, 1));
        p.select_node(node(Side::Right, 2));
        p.submit();
        p.select_node(node(Side::Top, 2));
        p.submit();
        assert!(p.is_win());

        p.delete_last();
        assert_eq!(p.history().len(), 1);
        assert!(p.is_win());

        p.restart();
        assert!(!p.is_win());
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut p = puzzle(&["he"]);
        p.select_node(node(Side::Left, 1));
        p.select_node(node(Side::Right, 2));
        p.submit();
        p.restart();
        assert!(p.path().is_empty());
        assert!(p.history().is_empty());
        assert_eq!(p.assembled_word(), "");
    }
}
