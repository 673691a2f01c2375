//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! Clicks a letter? That's `Action::SelectNode(node)`.
//! Presses Enter? That's `Action::Submit`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` telling the adapter what to show.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.
//! And debuggable: log every action, replay the exact game.

use log::{debug, info};

use crate::core::board::NodeRef;
use crate::core::puzzle::SubmitOutcome;
use crate::core::state::{App, WELCOME_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pointer click on a board node.
    SelectNode(NodeRef),
    /// A letter key: selects a matching node if one is allowed.
    TypeLetter(char),
    DeleteLast,
    Submit,
    Restart,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Show the transient "Not a word" notice.
    InvalidWord,
    /// The submit that just happened completed the board. Fires once per game.
    Solved,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::SelectNode(node) => {
            app.puzzle.select_node(node);
            Effect::None
        }
        Action::TypeLetter(c) => {
            if app.puzzle.select_letter(c).is_none() {
                debug!("No selectable node for {c:?}");
            }
            Effect::None
        }
        Action::DeleteLast => {
            app.puzzle.delete_last();
            Effect::None
        }
        Action::Submit => {
            let was_win = app.puzzle.is_win();
            match app.puzzle.submit() {
                SubmitOutcome::Accepted { word } => {
                    if !was_win && app.puzzle.is_win() {
                        let words = app.puzzle.history().len();
                        app.status_message = format!("Solved in {words} words!");
                        info!("{}: {}", app.status_message, app.progress().text());
                        return Effect::Solved;
                    }
                    app.status_message = format!(
                        "{word} accepted | {}/{} letters",
                        app.puzzle.used_letters().len(),
                        app.puzzle.win_target()
                    );
                    Effect::None
                }
                SubmitOutcome::InvalidWord { word } => {
                    info!("Rejected word {word:?}");
                    app.status_message = String::from("Not a word");
                    Effect::InvalidWord
                }
                SubmitOutcome::Empty => Effect::None,
            }
        }
        Action::Restart => {
            app.puzzle.restart();
            app.status_message = String::from(WELCOME_MESSAGE);
            info!("Puzzle restarted");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
