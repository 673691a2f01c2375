//! # Celebration Component
//!
//! Falling confetti drawn over the whole screen for a few seconds after the
//! puzzle is solved. Runs once per win; it does not loop.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

pub const CELEBRATION_DURATION: Duration = Duration::from_secs(4);

const PIECES: usize = 60;
const GLYPHS: [&str; 4] = ["*", "+", "•", "✦"];
const COLORS: [Color; 5] = [
    Color::Rgb(250, 166, 164),
    Color::Yellow,
    Color::Cyan,
    Color::LightGreen,
    Color::Magenta,
];

#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started_at: Instant,
}

impl Celebration {
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < CELEBRATION_DURATION
    }

    /// Cell positions of every confetti piece at `now`, with glyph and color.
    pub fn pieces(&self, area: Rect, now: Instant) -> Vec<(u16, u16, &'static str, Color)> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        (0..PIECES)
            .filter_map(|i| {
                let seed = scramble(i as u32);
                let col = seed % u32::from(area.width);
                let speed = 4.0 + (seed >> 8) as f32 % 8.0;
                let start = -(((seed >> 4) % u32::from(area.height)) as f32);
                let row = start + elapsed * speed;
                if row < 0.0 || row >= f32::from(area.height) {
                    return None;
                }
                Some((
                    area.x + col as u16,
                    area.y + row as u16,
                    GLYPHS[(seed >> 3) as usize % GLYPHS.len()],
                    COLORS[(seed >> 5) as usize % COLORS.len()],
                ))
            })
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let buf = frame.buffer_mut();
        for (x, y, glyph, color) in self.pieces(area, now) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_style(Style::default().fg(color));
            }
        }
    }
}

/// Cheap integer hash so each piece gets a stable column, speed and color.
fn scramble(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
    x ^= x >> 15;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^ (x >> 13)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_for_fixed_duration() {
        let start = Instant::now();
        let c = Celebration::new(start);
        assert!(c.is_running(start + Duration::from_secs(1)));
        assert!(!c.is_running(start + CELEBRATION_DURATION));
    }

    #[test]
    fn test_pieces_stay_inside_area() {
        let start = Instant::now();
        let c = Celebration::new(start);
        let area = Rect::new(5, 2, 30, 10);
        for ms in [0, 500, 1500, 3000] {
            for (x, y, _, _) in c.pieces(area, start + Duration::from_millis(ms)) {
                assert!(x >= area.x && x < area.right());
                assert!(y >= area.y && y < area.bottom());
            }
        }
        assert!(c.pieces(Rect::default(), start).is_empty());
    }

    #[test]
    fn test_confetti_is_visible_mid_animation() {
        let start = Instant::now();
        let c = Celebration::new(start);
        let area = Rect::new(0, 0, 40, 20);
        assert!(!c.pieces(area, start + Duration::from_secs(1)).is_empty());
    }
}
