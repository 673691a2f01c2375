//! # Notice Component
//!
//! A transient toast near the bottom of the screen ("Not a word"). The
//! notice owns its own expiry so the event loop only has to ask
//! `is_visible(now)` and keep redrawing while it is.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notice {
    pub fn new(text: impl Into<String>, shown_at: Instant, duration: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at,
            duration,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.duration
    }

    /// Rect for the toast: centered horizontally, just above the bottom of `area`.
    pub fn rect(&self, area: Rect) -> Rect {
        let width = (self.text.width() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height.saturating_sub(height + 1),
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rect = self.rect(area);
        frame.render_widget(Clear, rect);
        let toast = Paragraph::new(self.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Rgb(50, 50, 50)))
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(toast, rect);
    }
}
