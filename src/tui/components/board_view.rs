//! # Board View Component
//!
//! Draws the square, the twelve letter nodes, and the word paths on a
//! ratatui `Canvas`.
//!
//! ## Geometry
//!
//! The canvas uses a fixed 0..100 coordinate space (y grows upward). The
//! square spans `SQUARE_MIN..SQUARE_MAX` and nodes sit at fixed proportions
//! along each side:
//!
//! ```text
//!          G     I     A
//!       W  ●─────●─────●  L
//!          │           │
//!       H  ●           ●  S
//!          │           │
//!       O  ●─────●─────●  E
//!          R     V     T
//! ```
//!
//! Mouse hit testing maps canvas coordinates to terminal cells with the same
//! formula `Canvas` uses for printed labels, so a click lands on exactly the
//! cell where the marker or letter was drawn.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Rectangle};

use crate::core::board::{NodeRef, Side};
use crate::core::puzzle::Puzzle;
use crate::tui::component::Component;

pub const PINK: Color = Color::Rgb(250, 166, 164);
const HISTORY_COLOR: Color = Color::Rgb(125, 83, 82);

const BOUNDS: [f64; 2] = [0.0, 100.0];
const SQUARE_MIN: f64 = 20.0;
const SQUARE_MAX: f64 = 80.0;
/// Distance from the square edge to the letter label.
const LABEL_OFFSET: f64 = 12.0;
/// Where the three nodes sit along a side, as a fraction of its length.
const NODE_PROPORTIONS: [f64; 3] = [0.16, 0.5, 0.84];

const MARKER_FILLED: &str = "●";
const MARKER_EMPTY: &str = "○";

/// Canvas coordinates of a node on the square outline.
pub fn node_point(node: NodeRef) -> (f64, f64) {
    let along = SQUARE_MIN + (SQUARE_MAX - SQUARE_MIN) * NODE_PROPORTIONS[node.index];
    // Left/right sides count downward from the top corner.
    let down = SQUARE_MAX - (along - SQUARE_MIN);
    match node.side {
        Side::Top => (along, SQUARE_MAX),
        Side::Bottom => (along, SQUARE_MIN),
        Side::Left => (SQUARE_MIN, down),
        Side::Right => (SQUARE_MAX, down),
    }
}

/// Canvas coordinates of a node's letter, pushed outward from the square.
pub fn label_point(node: NodeRef) -> (f64, f64) {
    let (x, y) = node_point(node);
    match node.side {
        Side::Top => (x, y + LABEL_OFFSET),
        Side::Bottom => (x, y - LABEL_OFFSET),
        Side::Left => (x - LABEL_OFFSET, y),
        Side::Right => (x + LABEL_OFFSET, y),
    }
}

/// Terminal cell for a canvas point inside `inner` (the canvas area without borders).
pub fn cell_for(inner: Rect, (x, y): (f64, f64)) -> Position {
    let span = BOUNDS[1] - BOUNDS[0];
    let col = ((x - BOUNDS[0]) * f64::from(inner.width.saturating_sub(1)) / span) as u16;
    let row = ((BOUNDS[1] - y) * f64::from(inner.height.saturating_sub(1)) / span) as u16;
    Position::new(inner.x + col, inner.y + row)
}

/// The node whose marker or letter is under `(col, row)`, if any.
/// Markers and letters get one cell of slack horizontally.
pub fn hit_test(inner: Rect, col: u16, row: u16) -> Option<NodeRef> {
    if inner.width == 0 || inner.height == 0 || !inner.contains(Position::new(col, row)) {
        return None;
    }

    let mut best: Option<(u16, NodeRef)> = None;
    for side in Side::ALL {
        for index in 0..NODE_PROPORTIONS.len() {
            let node = NodeRef::new(side, index);
            for point in [node_point(node), label_point(node)] {
                let cell = cell_for(inner, point);
                let dx = cell.x.abs_diff(col);
                let dy = cell.y.abs_diff(row);
                if dy == 0 && dx <= 1 && best.is_none_or(|(d, _)| dx < d) {
                    best = Some((dx, node));
                }
            }
        }
    }
    best.map(|(_, node)| node)
}

/// Square area centered in `area`, compensating for cells being about
/// twice as tall as they are wide.
pub fn board_rect(area: Rect) -> Rect {
    if area.is_empty() {
        return area;
    }
    let height = area.height.min(area.width / 2).max(1);
    let width = (height * 2).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub struct BoardView<'a> {
    pub puzzle: &'a Puzzle,
}

impl<'a> BoardView<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    fn draw_path(ctx: &mut Context, nodes: &[NodeRef], color: Color) {
        for pair in nodes.windows(2) {
            let (x1, y1) = node_point(pair[0]);
            let (x2, y2) = node_point(pair[1]);
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
        }
    }

    fn marker_span(&self, node: NodeRef) -> Span<'static> {
        let p = self.puzzle;
        if p.is_current_tail(node) {
            Span::styled(
                MARKER_FILLED,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else if p.is_part_of_current_path(node) {
            Span::styled(MARKER_FILLED, Style::default().fg(PINK))
        } else if p.can_select(node) {
            Span::styled(MARKER_EMPTY, Style::default().fg(Color::White))
        } else {
            Span::styled(MARKER_EMPTY, Style::default().fg(Color::DarkGray))
        }
    }

    fn letter_span(&self, node: NodeRef) -> Span<'static> {
        let p = self.puzzle;
        let letter = p.board().letter(node).to_string();
        let style = if p.is_part_of_current_path(node) {
            Style::default().fg(PINK).add_modifier(Modifier::BOLD)
        } else if p.is_visited(node) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(letter, style)
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(BOUNDS)
            .y_bounds(BOUNDS)
            .paint(|ctx| {
                ctx.draw(&Rectangle {
                    x: SQUARE_MIN,
                    y: SQUARE_MIN,
                    width: SQUARE_MAX - SQUARE_MIN,
                    height: SQUARE_MAX - SQUARE_MIN,
                    color: Color::Gray,
                });
                for word in self.puzzle.history() {
                    Self::draw_path(ctx, word, HISTORY_COLOR);
                }
                Self::draw_path(ctx, self.puzzle.path(), PINK);

                // Text goes on its own layer above the lines
                ctx.layer();
                for node in self.puzzle.board().nodes() {
                    let (x, y) = node_point(node);
                    ctx.print(x, y, self.marker_span(node));
                    let (lx, ly) = label_point(node);
                    ctx.print(lx, ly, self.letter_span(node));
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;
    use crate::test_support::{fixed_lexicon, node};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_node_points_lie_on_square() {
        for side in Side::ALL {
            for index in 0..3 {
                let (x, y) = node_point(node(side, index));
                let on_vertical = x == SQUARE_MIN || x == SQUARE_MAX;
                let on_horizontal = y == SQUARE_MIN || y == SQUARE_MAX;
                assert!(on_vertical || on_horizontal, "{side:?}-{index} off the square");
            }
        }
        // Left side counts from the top down.
        assert!(node_point(node(Side::Left, 0)).1 > node_point(node(Side::Left, 2)).1);
    }

    #[test]
    fn test_hit_test_finds_each_node() {
        let inner = Rect::new(0, 0, 60, 30);
        for side in Side::ALL {
            for index in 0..3 {
                let n = node(side, index);
                let marker = cell_for(inner, node_point(n));
                assert_eq!(hit_test(inner, marker.x, marker.y), Some(n));
                let label = cell_for(inner, label_point(n));
                assert_eq!(hit_test(inner, label.x, label.y), Some(n));
            }
        }
    }

    #[test]
    fn test_hit_test_misses_center_and_outside() {
        let inner = Rect::new(0, 0, 60, 30);
        assert_eq!(hit_test(inner, 30, 15), None);
        assert_eq!(hit_test(inner, 200, 200), None);
        assert_eq!(hit_test(Rect::default(), 0, 0), None);
    }

    #[test]
    fn test_board_rect_is_centered_and_wide() {
        let rect = board_rect(Rect::new(0, 0, 100, 20));
        assert_eq!(rect, Rect::new(30, 0, 40, 20));
        let narrow = board_rect(Rect::new(0, 0, 20, 40));
        assert_eq!(narrow.width, 20);
        assert_eq!(narrow.height, 10);
    }

    #[test]
    fn test_board_rect_handles_empty_area() {
        assert_eq!(board_rect(Rect::new(0, 10, 80, 0)), Rect::new(0, 10, 80, 0));
        assert_eq!(board_rect(Rect::new(3, 4, 0, 5)), Rect::new(3, 4, 0, 5));
        let tiny = board_rect(Rect::new(0, 0, 1, 1));
        assert_eq!(tiny, Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_render_shows_all_letters() {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let puzzle = Puzzle::new(Board::default(), fixed_lexicon(&[]));

        terminal
            .draw(|f| {
                BoardView::new(&puzzle).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        for letter in "GIAWHOLSERVT".chars() {
            assert!(text.contains(letter), "missing {letter}");
        }
    }
}
