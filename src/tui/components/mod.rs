//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing letters used and status
//! - `WordPanel`: Current word and the chain-of-words progress line
//! - `BoardView`: The square, letters and paths
//! - `Notice`: Transient "Not a word" toast
//! - `Celebration`: Confetti after a win
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep state between frames and emit events:
//! - `ButtonBar`: Restart / Delete / Enter, remembers hitboxes for mouse clicks
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! WordPanel::new(app.puzzle.assembled_word(), app.progress()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! word_panel.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── word_panel.rs   (Current word + progress)
//! ├── board_view.rs   (Canvas board, hit testing)
//! ├── button_bar.rs   (Clickable pills)
//! ├── notice.rs       (Toast)
//! └── celebration.rs  (Confetti)
//! ```

pub mod board_view;
pub mod button_bar;
pub mod celebration;
pub mod notice;
mod title_bar;
pub mod word_panel;

pub use board_view::BoardView;
pub use button_bar::{ButtonBar, ButtonBarState, ButtonEvent};
pub use celebration::Celebration;
pub use notice::Notice;
pub use title_bar::TitleBar;
pub use word_panel::WordPanel;
