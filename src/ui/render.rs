use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::catalog::{AlertKind, Hue};
use crate::config::Config;
use crate::presenter::{trigger_hue, trigger_label, AlertPresenter};

use super::alert_view::AlertStyle;
use super::backdrop::Backdrop;
use super::gradient::rgb;
use super::text::styled_lines;

/// Screen title shown in the bar at the top.
pub const SCREEN_TITLE: &str = "Alert Test";

/// Headline above the trigger buttons.
pub const HEADLINE: &str = "Alert Custom Stunning =))";

/// Widest a trigger button grows, in columns.
const TRIGGER_MAX_WIDTH: u16 = 48;

/// Columns kept free on each side of a trigger button.
const TRIGGER_MARGIN: u16 = 4;

const TRIGGER_HEIGHT: u16 = 3;

/// Rows the alert starts below its resting place when animating in.
const SLIDE_ROWS: f32 = 2.0;

/// Main UI rendering function.
pub fn ui(f: &mut Frame, presenter: &mut AlertPresenter, config: &Config) {
    let area = f.size();
    let scheme = presenter.scheme;
    let theme = &config.theme;

    let background = Block::default().style(Style::default().bg(rgb(theme.background(scheme))));
    f.render_widget(background, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(0),    // Headline and triggers
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    let title_bar = Paragraph::new(Line::from(SCREEN_TITLE))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(rgb(theme.text(scheme)))
                .bg(rgb(theme.bar(scheme)))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title_bar, chunks[0]);

    presenter.hits.triggers = render_triggers(f, chunks[1], presenter, config);
    render_hints(f, chunks[2], presenter, config);
    render_overlay(f, area, presenter, config);
}

/// Draw the headline and one trigger button per alert kind.
fn render_triggers(
    f: &mut Frame,
    area: Rect,
    presenter: &AlertPresenter,
    config: &Config,
) -> Vec<(Rect, AlertKind)> {
    let scheme = presenter.scheme;
    let headline_style = Style::default()
        .fg(rgb(config.theme.text(scheme)))
        .add_modifier(Modifier::BOLD);
    let headline = styled_lines(HEADLINE, area.width.saturating_sub(2) as usize, headline_style);
    let headline_height = headline.len() as u16;

    let headline_area = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        headline_height.min(area.height.saturating_sub(1)),
    );
    f.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        headline_area,
    );

    let width = TRIGGER_MAX_WIDTH.min(area.width.saturating_sub(TRIGGER_MARGIN * 2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let mut y = headline_area.bottom() + 1;

    let mut hits = Vec::new();
    for (index, &kind) in AlertKind::all().iter().enumerate() {
        if y + TRIGGER_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TRIGGER_HEIGHT);

        let label = if index == presenter.selected && !presenter.is_alert_open() {
            format!("▸ {} ◂", trigger_label(kind))
        } else {
            trigger_label(kind).to_string()
        };
        let style = Style::default()
            .fg(rgb(config.palette.rgb(Hue::White)))
            .bg(rgb(config.palette.rgb(trigger_hue(kind))))
            .add_modifier(Modifier::BOLD);
        let button = Paragraph::new(vec![Line::from(""), Line::from(label)])
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(button, rect);

        hits.push((rect, kind));
        y += TRIGGER_HEIGHT + 1;
    }
    hits
}

/// Draw the key hints for the current mode.
fn render_hints(f: &mut Frame, area: Rect, presenter: &AlertPresenter, config: &Config) {
    let hints: &[(&str, &str)] = if presenter.is_alert_open() {
        &[
            ("←/→", "focus"),
            ("Enter", "press"),
            ("Esc", "dismiss"),
            ("t", "theme"),
        ]
    } else {
        &[
            ("↑/↓", "select"),
            ("Enter", "show"),
            ("1-4", "quick show"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    };

    let key_style = Style::default().fg(rgb(config.palette.rgb(Hue::Yellow)));
    let label_style = Style::default().fg(rgb(config.palette.rgb(Hue::Gray)));
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            vec![
                Span::styled(format!("[{}]", key), key_style),
                Span::styled(format!(" {}  ", label), label_style),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Draw the backdrop and the alert while the overlay is visible.
fn render_overlay(f: &mut Frame, area: Rect, presenter: &mut AlertPresenter, config: &Config) {
    let Some(kind) = presenter.visible_kind() else {
        presenter.hits.clear_alert();
        return;
    };
    let progress = presenter.overlay_progress();

    f.render_widget(
        Backdrop::new(config.behavior.backdrop_opacity * progress),
        area,
    );

    let style = AlertStyle {
        scheme: presenter.scheme,
        palette: &config.palette,
        icons: config.appearance.icon_set,
    };
    let open = presenter.is_alert_open();
    let focus = open.then_some(presenter.focused_action);
    let slide = ((1.0 - progress) * SLIDE_ROWS).round() as u16;

    let layout = AlertPresenter::demo_alert(kind).render(f, area, style, focus, slide);

    if open {
        presenter.hits.card = Some(layout.card);
        presenter.hits.buttons = layout.buttons;
    } else {
        presenter.hits.clear_alert();
    }
}
