use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::board_view::board_rect;
use crate::tui::components::{BoardView, ButtonBar, TitleBar, WordPanel};

/// Screen regions for one frame.
pub struct ScreenLayout {
    pub title: Rect,
    pub word: Rect,
    pub board: Rect,
    pub buttons: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(1),
        Length(WordPanel::height()),
        Min(0),
        Length(ButtonBar::height()),
    ]);
    let [title, _spacer, word, board, buttons] = layout.areas(area);
    ScreenLayout {
        title,
        word,
        board: board_rect(board),
        buttons,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let screen = frame.area();
    let layout = screen_layout(screen);
    let puzzle = &app.puzzle;

    TitleBar::new(
        app.status_message.clone(),
        puzzle.used_letters().len(),
        puzzle.win_target(),
    )
    .render(frame, layout.title);

    WordPanel::new(puzzle.assembled_word(), app.progress()).render(frame, layout.word);

    let board_block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let board_inner = board_block.inner(layout.board);
    frame.render_widget(board_block, layout.board);
    BoardView::new(puzzle).render(frame, board_inner);
    // Cache for mouse hit testing
    tui.board_inner = board_inner;

    ButtonBar::new(&mut tui.buttons).render(frame, layout.buttons);

    if let Some(notice) = &tui.notice
        && notice.is_visible(now)
    {
        notice.render(frame, screen);
    }

    if let Some(celebration) = &tui.celebration
        && celebration.is_running(now)
    {
        celebration.render(frame, screen, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::components::Notice;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = screen_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.title.y, 0);
        assert!(layout.word.bottom() <= layout.board.y);
        assert!(layout.board.bottom() <= layout.buttons.y);
        assert_eq!(layout.buttons.bottom(), 30);
    }

    #[test]
    fn test_layout_on_short_terminal() {
        let layout = screen_layout(Rect::new(0, 0, 80, 6));
        assert_eq!(layout.board.height, 0);
        assert!(layout.buttons.bottom() <= 6);
    }

    #[test]
    fn test_draw_ui_on_tiny_terminal() {
        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(Duration::from_millis(2500));
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();
    }

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new(Duration::from_millis(2500));
        update(&mut app, Action::TypeLetter('h'));
        update(&mut app, Action::TypeLetter('e'));

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Squareword"));
        assert!(text.contains("HE"));
        assert!(text.contains("Try to solve in 4 words"));
        assert!(text.contains("Restart"));
        assert_eq!(tui.buttons.hitboxes.len(), 3);
        assert!(tui.board_inner.width > 0);
    }

    #[test]
    fn test_notice_only_while_visible() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(Duration::from_millis(2500));
        let start = Instant::now();
        tui.notice = Some(Notice::new("Not a word", start, Duration::from_millis(2500)));

        terminal.draw(|f| draw_ui(f, &app, &mut tui, start)).unwrap();
        assert!(buffer_text(&terminal).contains("Not a word"));

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, start + Duration::from_secs(3)))
            .unwrap();
        assert!(!buffer_text(&terminal).contains("Not a word"));
    }
}
