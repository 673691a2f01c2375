//! # TitleBar Component
//!
//! Top status bar: game name, letters used so far, and the status message
//! (e.g. "HE accepted | 2/12 letters", "Solved in 4 words!").
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), 5, 12);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Squareword [5/12] | HE accepted"`
//! 2. **Default**: `"Squareword [5/12]"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub status_message: String,
    pub letters_used: usize,
    pub letters_total: usize,
}

impl TitleBar {
    pub fn new(status_message: String, letters_used: usize, letters_total: usize) -> Self {
        Self {
            status_message,
            letters_used,
            letters_total,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Squareword [{}/{}]", self.letters_used, self.letters_total)
        } else {
            format!(
                "Squareword [{}/{}] | {}",
                self.letters_used, self.letters_total, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
