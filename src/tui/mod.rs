//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (notice on screen, confetti falling): draws every ~80ms so
//!   the toast disappears on time and the confetti moves smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::lexicon::Lexicon;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::board_view;
use crate::tui::components::{ButtonBarState, ButtonEvent, Celebration, Notice};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const INVALID_WORD_NOTICE: &str = "Not a word";

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub buttons: ButtonBarState,
    /// Board canvas area from the last frame, for mouse hit testing.
    pub board_inner: Rect,
    pub notice: Option<Notice>,
    pub notice_duration: Duration,
    pub celebration: Option<Celebration>,
}

impl TuiState {
    pub fn new(notice_duration: Duration) -> Self {
        Self {
            buttons: ButtonBarState::default(),
            board_inner: Rect::default(),
            notice: None,
            notice_duration,
            celebration: None,
        }
    }

    /// True while something on screen changes without input.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.notice.as_ref().is_some_and(|n| n.is_visible(now))
            || self.celebration.as_ref().is_some_and(|c| c.is_running(now))
    }

    /// Drop overlays that have finished.
    pub fn expire(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.notice = None;
        }
        if self.celebration.as_ref().is_some_and(|c| !c.is_running(now)) {
            self.celebration = None;
        }
    }

    /// Translate a terminal event into a game action. Clicks are resolved
    /// against the buttons first, then the board.
    pub(crate) fn action_for(&mut self, event: &TuiEvent) -> Option<Action> {
        match *event {
            TuiEvent::InputChar(c) => Some(Action::TypeLetter(c)),
            TuiEvent::Backspace => Some(Action::DeleteLast),
            TuiEvent::Submit => Some(Action::Submit),
            TuiEvent::Restart => Some(Action::Restart),
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::MouseClick(col, row) => {
                if let Some(button) = self.buttons.handle_event(event) {
                    return Some(match button {
                        ButtonEvent::Restart => Action::Restart,
                        ButtonEvent::Delete => Action::DeleteLast,
                        ButtonEvent::Enter => Action::Submit,
                    });
                }
                board_view::hit_test(self.board_inner, col, row).map(Action::SelectNode)
            }
            TuiEvent::Resize => None,
        }
    }

    /// React to what the core reported.
    pub fn apply_effect(&mut self, effect: &Effect, now: Instant) {
        match effect {
            Effect::InvalidWord => {
                self.notice = Some(Notice::new(INVALID_WORD_NOTICE, now, self.notice_duration));
            }
            Effect::Solved => {
                self.celebration = Some(Celebration::new(now));
            }
            Effect::Quit | Effect::None => {}
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, lexicon: Arc<dyn Lexicon>) -> std::io::Result<()> {
    let mut app = App::from_config(&config, lexicon);
    let mut tui = TuiState::new(Duration::from_millis(config.notice_duration_ms));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let now = Instant::now();
        tui.expire(now);
        let animating = tui.is_animating(now);

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = tui.action_for(&event) else {
                continue;
            };
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            tui.apply_effect(&effect, Instant::now());
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Exiting with progress: {}", app.progress().text());
    ratatui::restore();
    result
}
