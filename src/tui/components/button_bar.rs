//! # Button Bar Component
//!
//! The `Restart  Delete  Enter` pill buttons under the word panel. Clicking a
//! button does the same thing as its keyboard shortcut.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ButtonBarState` lives in `TuiState` and keeps last frame's hitboxes
//! - `ButtonBar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Restart,
    Delete,
    Enter,
}

impl ButtonEvent {
    pub const ALL: [ButtonEvent; 3] = [ButtonEvent::Restart, ButtonEvent::Delete, ButtonEvent::Enter];

    pub fn label(self) -> &'static str {
        match self {
            ButtonEvent::Restart => "Restart",
            ButtonEvent::Delete => "Delete",
            ButtonEvent::Enter => "Enter",
        }
    }
}

const GAP: u16 = 2;
/// Border plus one cell of padding on each side.
const CHROME: u16 = 4;

/// Hitboxes from the most recent render.
#[derive(Debug, Default)]
pub struct ButtonBarState {
    pub hitboxes: Vec<(Rect, ButtonEvent)>,
}

impl EventHandler for ButtonBarState {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ButtonEvent> {
        let TuiEvent::MouseClick(col, row) = *event else {
            return None;
        };
        let pos = Position::new(col, row);
        self.hitboxes
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, button)| *button)
    }
}

pub struct ButtonBar<'a> {
    state: &'a mut ButtonBarState,
}

impl<'a> ButtonBar<'a> {
    pub fn new(state: &'a mut ButtonBarState) -> Self {
        Self { state }
    }

    pub const fn height() -> u16 {
        3
    }
}

impl Component for ButtonBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let widths: Vec<u16> = ButtonEvent::ALL
            .iter()
            .map(|b| b.label().width() as u16 + CHROME)
            .collect();
        let total: u16 = widths.iter().sum::<u16>() + GAP * (widths.len() as u16 - 1);

        let mut x = area.x + area.width.saturating_sub(total) / 2;
        self.state.hitboxes.clear();

        for (button, width) in ButtonEvent::ALL.iter().zip(widths) {
            let rect = Rect::new(x, area.y, width, area.height.min(Self::height()))
                .intersection(area);
            if rect.is_empty() {
                break;
            }
            let pill = Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Gray)),
                );
            frame.render_widget(pill, rect);
            self.state.hitboxes.push((rect, *button));
            x += width + GAP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_state(width: u16) -> ButtonBarState {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ButtonBarState::default();
        terminal
            .draw(|f| ButtonBar::new(&mut state).render(f, f.area()))
            .unwrap();
        state
    }

    #[test]
    fn test_render_records_hitboxes() {
        let state = rendered_state(60);
        assert_eq!(state.hitboxes.len(), 3);
        let labels: Vec<ButtonEvent> = state.hitboxes.iter().map(|(_, b)| *b).collect();
        assert_eq!(labels, ButtonEvent::ALL.to_vec());
    }

    #[test]
    fn test_click_inside_button() {
        let mut state = rendered_state(60);
        let (rect, _) = state.hitboxes[1];
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(rect.x + 1, rect.y + 1)),
            Some(ButtonEvent::Delete)
        );
    }

    #[test]
    fn test_click_outside_and_other_events() {
        let mut state = rendered_state(60);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(0, 0)), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
