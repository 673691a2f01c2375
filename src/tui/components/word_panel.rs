//! # Word Panel Component
//!
//! The word being assembled (large, centered) above a rule and the
//! progress line. Stateless: everything comes in as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::progress::{ProgressLine, WORD_SEPARATOR};
use crate::tui::component::Component;

const REPEATED_COLOR: Color = Color::Rgb(95, 68, 66);

pub struct WordPanel {
    pub current_word: String,
    pub progress: ProgressLine,
}

impl WordPanel {
    pub fn new(current_word: String, progress: ProgressLine) -> Self {
        Self {
            current_word,
            progress,
        }
    }

    /// Height this panel wants: word, rule, progress.
    pub const fn height() -> u16 {
        3
    }

    fn progress_line(&self) -> Line<'static> {
        match &self.progress {
            ProgressLine::Hint { .. } => Line::from(Span::styled(
                self.progress.text(),
                Style::default().fg(Color::DarkGray),
            )),
            ProgressLine::Words(words) => {
                let mut spans = Vec::new();
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled(
                            WORD_SEPARATOR,
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    for letter in &word.letters {
                        let style = if letter.repeated {
                            Style::default().fg(REPEATED_COLOR)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        spans.push(Span::styled(
                            letter.letter.to_string(),
                            style.add_modifier(Modifier::BOLD),
                        ));
                    }
                }
                Line::from(spans)
            }
        }
    }
}

impl Component for WordPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [word_area, rule_area, progress_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let word = Paragraph::new(Span::styled(
            self.current_word.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(word, word_area);

        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Gray)),
            rule_area,
        );

        frame.render_widget(
            Paragraph::new(self.progress_line()).alignment(Alignment::Center),
            progress_area,
        );
    }
}
