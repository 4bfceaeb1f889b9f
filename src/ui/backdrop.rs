//! Dimmed full-screen layer drawn behind an alert.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::gradient::gradient_color;

/// Shades everything already drawn in its area towards `shade`.
///
/// Only RGB colors are blended; named and reset colors are left alone, so
/// screens meant to be dimmed should paint with RGB colors.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    /// Opacity of the shade (0.0 - 1.0).
    pub opacity: f32,
    /// Color laid over the screen.
    pub shade: (u8, u8, u8),
}

impl Backdrop {
    /// A black backdrop at the given opacity.
    pub fn new(opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            shade: (0, 0, 0),
        }
    }

    fn dim(&self, color: Color) -> Color {
        match color {
            Color::Rgb(r, g, b) => gradient_color((r, g, b), self.shade, self.opacity),
            other => other,
        }
    }
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = buf.get_mut(x, y);
                let fg = self.dim(cell.fg);
                let bg = self.dim(cell.bg);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}
