use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Wrap text to fit within a given width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `width` - Maximum width per line
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let current_width = current_line.chars().count();
        if current_width + word.chars().count() + 1 > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap text and style every resulting line the same way.
pub fn styled_lines(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}
