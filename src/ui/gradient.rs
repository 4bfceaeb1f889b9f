use ratatui::style::Color;

/// Create a gradient color between two RGB values.
///
/// Also used to blend a translucent color over a surface: `start` is the
/// surface, `end` the color laid on top and `position` its opacity.
///
/// # Arguments
/// * `start` - Starting RGB color
/// * `end` - Ending RGB color
/// * `position` - Position in gradient (0.0 to 1.0)
pub fn gradient_color(start: (u8, u8, u8), end: (u8, u8, u8), position: f32) -> Color {
    let position = position.clamp(0.0, 1.0);
    let r = (start.0 as f32 + (end.0 as f32 - start.0 as f32) * position) as u8;
    let g = (start.1 as f32 + (end.1 as f32 - start.1 as f32) * position) as u8;
    let b = (start.2 as f32 + (end.2 as f32 - start.2 as f32) * position) as u8;
    Color::Rgb(r, g, b)
}

/// Tuple form of an RGB color.
pub fn rgb(color: (u8, u8, u8)) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
