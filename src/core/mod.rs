//! # Core Game Logic
//!
//! This module contains Squareword's puzzle rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Puzzle (rules)       │
//!                    │  • App (game state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No rendering.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  (future)  │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Board`, `Side`, `NodeRef`, the fixed 12-letter square
//! - [`lexicon`]: the `Lexicon` trait and the set-backed `WordList`
//! - [`puzzle`]: the `Puzzle` engine, all game rules
//! - [`progress`]: the chain-of-words progress line
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum, everything that can happen in the app
//! - [`config`]: layered settings

pub mod action;
pub mod board;
pub mod config;
pub mod lexicon;
pub mod progress;
pub mod puzzle;
pub mod state;
