//! Rendering tests for the alert view.
//!
//! Alerts are drawn into ratatui's TestBackend and the resulting buffer is
//! inspected directly or compared against saved snapshots.

use std::cell::Cell;
use std::rc::Rc;

use insta::{assert_debug_snapshot, assert_snapshot};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier, Terminal};
use stunning_alert::catalog::{accent_color_for, ActionKind, AlertKind, ColorScheme, IconSet};
use stunning_alert::config::PaletteConfig;
use stunning_alert::ui::{ActionButton, AlertLayout, AlertStyle, AlertView};

/// Helper to convert a ratatui Buffer to a plain text string (no ANSI codes).
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            output.push_str(buffer.get(x, y).symbol());
        }
        output.push('\n');
    }
    output
}

/// Position of the first cell where `text` starts.
fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    let wanted: Vec<String> = text.chars().map(|c| c.to_string()).collect();
    let area = buffer.area();
    for y in 0..area.height {
        let row: Vec<&str> = (0..area.width).map(|x| buffer.get(x, y).symbol()).collect();
        if let Some(x) = row.windows(wanted.len()).position(|window| window == wanted.as_slice()) {
            return Some((x as u16, y));
        }
    }
    None
}

fn draw<C>(
    view: &AlertView<C>,
    width: u16,
    height: u16,
    scheme: ColorScheme,
    focus: Option<usize>,
) -> (Buffer, AlertLayout) {
    let palette = PaletteConfig::default();
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = AlertLayout::default();

    terminal
        .draw(|f| {
            let style = AlertStyle {
                scheme,
                palette: &palette,
                icons: IconSet::Unicode,
            };
            let area = f.size();
            layout = view.render(f, area, style, focus, 0);
        })
        .unwrap();

    (terminal.backend().buffer().clone(), layout)
}

// ─────────────────────────────────────────────────────────────────────────────
// Snapshots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn success_alert_dark_snapshot() {
    let view = AlertView::<()>::new(AlertKind::Success, "Synced", "All done").with_primary("OK", |_| {});
    let (buffer, _) = draw(&view, 30, 14, ColorScheme::Dark, Some(0));

    let output = buffer_to_string(&buffer);
    assert_snapshot!("success_alert_dark", output);
}

#[test]
fn action_order_snapshot() {
    let view = AlertView::<()>::new(AlertKind::Error, "Unsaved changes", "Save before closing?")
        .with_actions(vec![
            ActionButton::new("Save", ActionKind::Positive, |_| {}),
            ActionButton::new("Discard", ActionKind::Destructive, |_| {}),
            ActionButton::new("Cancel", ActionKind::CancelDismiss, |_| {}),
        ]);

    let labels: Vec<String> = view
        .buttons(ColorScheme::Light)
        .into_iter()
        .map(|button| button.label)
        .collect();
    assert_debug_snapshot!("action_order_cancel_first", labels);
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn badge_center_sits_above_card_edge() {
    let view = AlertView::<()>::new(AlertKind::Error, "Error", "Fix this error").with_primary("OK", |_| {});
    let (buffer, layout) = draw(&view, 80, 24, ColorScheme::Dark, None);

    assert_eq!(layout.badge.height, 3);
    assert!(layout.badge.y + 1 < layout.card.y);
    assert_eq!(layout.badge.bottom(), layout.card.y + 1);

    let (x, y) = find_text(&buffer, "✕").expect("icon drawn");
    assert_eq!(y, layout.badge.y + 1);
    assert_eq!(x, layout.badge.x + 3);
}

#[test]
fn badge_is_filled_with_the_accent_in_dark_scheme() {
    let palette = PaletteConfig::default();
    let view = AlertView::<()>::new(AlertKind::Error, "Error", "Fix this error").with_primary("OK", |_| {});
    let (buffer, layout) = draw(&view, 80, 24, ColorScheme::Dark, None);

    let accent = palette.resolve(
        accent_color_for(AlertKind::Error, ColorScheme::Dark),
        palette.card_surface(ColorScheme::Dark),
    );
    assert_eq!(accent, ratatui::style::Color::Rgb(127, 29, 24));

    let center = buffer.get(layout.badge.x + 3, layout.badge.y + 1);
    assert_eq!(center.symbol(), "✕");
    assert_eq!(center.bg, accent);

    // the badge and the OK button share the same tint
    let (x, y) = find_text(&buffer, "OK").expect("button label drawn");
    assert_eq!(buffer.get(x, y).bg, accent);
}

#[test]
fn informational_alert_has_no_buttons() {
    let view = AlertView::<()>::new(AlertKind::Question, "Question", "Please Answer the question");
    let (buffer, layout) = draw(&view, 80, 24, ColorScheme::Light, None);

    assert!(layout.buttons.is_empty());
    assert!(find_text(&buffer, "Please Answer the question").is_some());
}

#[test]
fn long_message_wraps_inside_card() {
    let message = "The connection to the server was lost while syncing your latest changes";
    let view = AlertView::<()>::new(AlertKind::Network, "Network", message).with_primary("OK", |_| {});
    let (buffer, layout) = draw(&view, 60, 30, ColorScheme::Dark, None);

    assert!(find_text(&buffer, message).is_none());
    let (x, y) = find_text(&buffer, "connection").expect("first line drawn");
    assert!(layout.card.x < x && x < layout.card.right());
    assert!(layout.card.y < y && y < layout.card.bottom());
}

#[test]
fn primary_button_fill_matches_accent_in_light_scheme() {
    let palette = PaletteConfig::default();
    let view = AlertView::<()>::new(AlertKind::Error, "Error", "Fix this error").with_primary("OK", |_| {});
    let (buffer, layout) = draw(&view, 80, 24, ColorScheme::Light, Some(0));

    assert_eq!(layout.buttons.len(), 1);
    let (x, y) = find_text(&buffer, "OK").expect("button label drawn");
    let [r, g, b] = palette.red;
    assert_eq!(buffer.get(x, y).bg, ratatui::style::Color::Rgb(r, g, b));
}

#[test]
fn dark_card_is_outlined_and_light_card_is_filled() {
    let view = AlertView::<()>::new(AlertKind::Success, "Success", "This is message Success");

    let (dark, _) = draw(&view, 60, 20, ColorScheme::Dark, None);
    assert!(find_text(&dark, "╭").is_some());
    assert!(find_text(&dark, "╯").is_some());

    let (light, layout) = draw(&view, 60, 20, ColorScheme::Light, None);
    let corner = light.get(layout.card.x, layout.card.y);
    assert_eq!(corner.fg, corner.bg);
}

#[test]
fn action_row_draws_cancel_first_and_highlights_focus() {
    let view = AlertView::<()>::new(AlertKind::Question, "Remove file?", "This cannot be undone")
        .with_actions(vec![
            ActionButton::new("Delete", ActionKind::Destructive, |_| {}),
            ActionButton::new("Cancel", ActionKind::CancelDismiss, |_| {}),
        ]);
    let (buffer, layout) = draw(&view, 80, 24, ColorScheme::Dark, Some(1));

    assert_eq!(layout.buttons.len(), 2);
    let (cancel_x, cancel_y) = find_text(&buffer, "Cancel").expect("cancel drawn");
    let (delete_x, delete_y) = find_text(&buffer, "Delete").expect("delete drawn");
    assert_eq!(cancel_y, delete_y);
    assert!(cancel_x < delete_x);

    assert!(buffer.get(delete_x, delete_y).modifier.contains(Modifier::REVERSED));
    assert!(!buffer.get(cancel_x, cancel_y).modifier.contains(Modifier::REVERSED));
}

#[test]
fn pressing_rendered_button_runs_its_callback_only() {
    let retried = Rc::new(Cell::new(0));
    let cancelled = Rc::new(Cell::new(0));
    let (r, c) = (retried.clone(), cancelled.clone());

    let view = AlertView::<()>::new(AlertKind::Network, "Network", "Connecting Network").with_actions(vec![
        ActionButton::new("Retry", ActionKind::Positive, move |_| r.set(r.get() + 1)),
        ActionButton::new("Cancel", ActionKind::CancelDismiss, move |_| c.set(c.get() + 1)),
    ]);
    let (_, layout) = draw(&view, 80, 24, ColorScheme::Light, None);
    assert_eq!(layout.buttons.len(), 2);

    assert!(view.press(1, &mut ()));
    assert_eq!(retried.get(), 1);
    assert_eq!(cancelled.get(), 0);
}

#[test]
fn tiny_screen_does_not_panic() {
    let view = AlertView::<()>::new(AlertKind::Success, "Success", "This is message Success")
        .with_primary("OK", |_| {});
    let (_, layout) = draw(&view, 10, 4, ColorScheme::Dark, None);
    let screen = Rect::new(0, 0, 10, 4);
    assert_eq!(layout.card.intersection(screen), layout.card);
}
