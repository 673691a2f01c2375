use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Game intents (translated to core::Action)
    InputChar(char),
    Backspace,
    Submit,
    Restart, // Ctrl+R
    Quit,    // Esc or Ctrl+C

    // TUI-local events
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Ignore key release/repeat reports from the keyboard enhancement protocol
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Restart),
                (_, KeyCode::Char(c)) if c.is_alphabetic() => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) | (_, KeyCode::Delete) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_letters_and_editing_keys() {
        assert_eq!(
            translate(key(KeyCode::Char('g'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('g'))
        );
        assert_eq!(
            translate(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(TuiEvent::Backspace)
        );
        assert_eq!(
            translate(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(translate(key(KeyCode::Char('7'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            translate(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Restart)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            translate(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_left_click_only() {
        let click = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 12,
                row: 4,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(click(MouseEventKind::Down(MouseButton::Left))),
            Some(TuiEvent::MouseClick(12, 4))
        );
        assert_eq!(translate(click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(click(MouseEventKind::Moved)), None);
    }
}
