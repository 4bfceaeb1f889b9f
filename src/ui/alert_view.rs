//! Reusable alert component: a tinted badge over a content card with
//! optional buttons.
//!
//! An [`AlertView`] is built fresh for every frame from plain values and
//! boxed callbacks. It owns no state; the host decides what pressing a
//! button means, including whether the alert goes away.

use std::fmt;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::{
    accent_color_for, action_text_color_for, icon_for, order_actions,
    ActionKind, AlertKind, ColorScheme, Hue, IconSet, Tint, DARK_SECONDARY_OPACITY,
};
use crate::config::PaletteConfig;

use super::gradient::rgb;
use super::text::styled_lines;

/// Widest a card is allowed to grow, in columns.
pub const CARD_MAX_WIDTH: u16 = 48;

/// Columns kept free on each side of the card.
pub const CARD_MARGIN: u16 = 4;

/// Badge size: a 3-row, 7-column rounded disc.
pub const BADGE_WIDTH: u16 = 7;
pub const BADGE_HEIGHT: u16 = 3;

/// Horizontal padding between the card border and its text or buttons.
const CONTENT_PADDING: u16 = 2;

/// Height of the full-width primary button.
const PRIMARY_BUTTON_HEIGHT: u16 = 3;

/// Callback invoked with the host context when a button is pressed.
pub type Callback<C> = Box<dyn Fn(&mut C)>;

/// The single full-width confirm button.
pub struct PrimaryAction<C> {
    pub text: String,
    on_confirm: Callback<C>,
}

impl<C> PrimaryAction<C> {
    pub fn new(text: impl Into<String>, on_confirm: impl Fn(&mut C) + 'static) -> Self {
        Self {
            text: text.into(),
            on_confirm: Box::new(on_confirm),
        }
    }
}

impl<C> fmt::Debug for PrimaryAction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimaryAction").field("text", &self.text).finish_non_exhaustive()
    }
}

/// One button of a multi-button alert.
pub struct ActionButton<C> {
    pub title: String,
    pub kind: ActionKind,
    on_press: Callback<C>,
}

impl<C> ActionButton<C> {
    pub fn new(
        title: impl Into<String>,
        kind: ActionKind,
        on_press: impl Fn(&mut C) + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            on_press: Box::new(on_press),
        }
    }
}

impl<C> fmt::Debug for ActionButton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// What an alert offers to press: nothing, one primary button, or a row of
/// action buttons. Never both.
pub enum AlertActions<C> {
    None,
    Primary(PrimaryAction<C>),
    List(Vec<ActionButton<C>>),
}

impl<C> Default for AlertActions<C> {
    fn default() -> Self {
        AlertActions::None
    }
}

impl<C> fmt::Debug for AlertActions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertActions::None => f.write_str("None"),
            AlertActions::Primary(primary) => f.debug_tuple("Primary").field(primary).finish(),
            AlertActions::List(list) => f.debug_tuple("List").field(list).finish(),
        }
    }
}

/// A button as it will be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedButton {
    pub label: String,
    /// Label color.
    pub text: Tint,
    /// Background fill, if the button has one.
    pub fill: Option<Tint>,
}

/// Colors and glyphs an alert is drawn with. Owned by the host.
#[derive(Debug, Clone, Copy)]
pub struct AlertStyle<'a> {
    pub scheme: ColorScheme,
    pub palette: &'a PaletteConfig,
    pub icons: IconSet,
}

/// Where the parts of an alert ended up on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertLayout {
    pub card: Rect,
    pub badge: Rect,
    /// One rect per rendered button, in rendered order.
    pub buttons: Vec<Rect>,
}

/// A modal alert.
#[derive(Debug)]
pub struct AlertView<C> {
    kind: AlertKind,
    title: String,
    message: String,
    actions: AlertActions<C>,
}

impl<C> AlertView<C> {
    /// An informational alert with no buttons.
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            actions: AlertActions::None,
        }
    }

    /// Use a single full-width confirm button.
    pub fn with_primary(
        mut self,
        text: impl Into<String>,
        on_confirm: impl Fn(&mut C) + 'static,
    ) -> Self {
        self.actions = AlertActions::Primary(PrimaryAction::new(text, on_confirm));
        self
    }

    /// Use a row of action buttons. Cancel buttons are moved to the front.
    pub fn with_actions(mut self, mut actions: Vec<ActionButton<C>>) -> Self {
        order_actions(&mut actions, |action| action.kind);
        self.actions = AlertActions::List(actions);
        self
    }

    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn actions(&self) -> &AlertActions<C> {
        &self.actions
    }

    /// The buttons that will be drawn, in order.
    pub fn buttons(&self, scheme: ColorScheme) -> Vec<RenderedButton> {
        match &self.actions {
            AlertActions::None => Vec::new(),
            AlertActions::Primary(primary) => vec![RenderedButton {
                label: primary.text.clone(),
                text: Tint::solid(Hue::White),
                fill: Some(accent_color_for(self.kind, scheme)),
            }],
            AlertActions::List(list) => list
                .iter()
                .map(|action| RenderedButton {
                    label: action.title.clone(),
                    text: action_text_color_for(action.kind, scheme),
                    fill: None,
                })
                .collect(),
        }
    }

    /// Number of interactive buttons.
    pub fn button_count(&self) -> usize {
        match &self.actions {
            AlertActions::None => 0,
            AlertActions::Primary(_) => 1,
            AlertActions::List(list) => list.len(),
        }
    }

    /// Invoke the callback of the button at `index` (rendered order).
    ///
    /// Returns `false` when there is no such button.
    pub fn press(&self, index: usize, ctx: &mut C) -> bool {
        let pressed = match &self.actions {
            AlertActions::Primary(primary) if index == 0 => {
                (primary.on_confirm)(ctx);
                true
            }
            AlertActions::List(list) => match list.get(index) {
                Some(action) => {
                    (action.on_press)(ctx);
                    true
                }
                None => false,
            },
            _ => false,
        };
        if pressed {
            tracing::debug!(kind = ?self.kind, index, "alert button pressed");
        }
        pressed
    }

    /// Draw the alert centered in `screen`.
    ///
    /// `focus` highlights one button of an action row; `slide` pushes the
    /// whole alert down by that many rows (used while it animates in).
    pub fn render(
        &self,
        frame: &mut Frame,
        screen: Rect,
        style: AlertStyle<'_>,
        focus: Option<usize>,
        slide: u16,
    ) -> AlertLayout {
        let scheme = style.scheme;
        let palette = style.palette;
        let surface = palette.card_surface(scheme);

        let card_width = if screen.width > CARD_MARGIN * 2 + BADGE_WIDTH {
            CARD_MAX_WIDTH.min(screen.width - CARD_MARGIN * 2)
        } else {
            screen.width
        };
        let text_width = card_width.saturating_sub(2 + CONTENT_PADDING * 2) as usize;

        let text_color = match scheme {
            ColorScheme::Light => palette.rgb(Hue::Black),
            ColorScheme::Dark => palette.rgb(Hue::White),
        };
        let message_tint = match scheme {
            ColorScheme::Light => Tint::solid(Hue::Gray),
            ColorScheme::Dark => Tint::solid(Hue::Gray).with_opacity(DARK_SECONDARY_OPACITY),
        };

        let title_style = Style::default()
            .fg(rgb(text_color))
            .add_modifier(Modifier::BOLD);
        let message_style = Style::default().fg(palette.resolve(message_tint, surface));
        let title_lines = styled_lines(&self.title, text_width, title_style);
        let message_lines = styled_lines(&self.message, text_width, message_style);

        let (buttons_height, button_gap) = match &self.actions {
            AlertActions::None => (0, 0),
            AlertActions::Primary(_) => (PRIMARY_BUTTON_HEIGHT, 1),
            AlertActions::List(_) => (1, 1),
        };

        // spacer under the badge, title, gap, message, gap, buttons, bottom padding
        let inner_height = 1
            + title_lines.len() as u16
            + 1
            + message_lines.len() as u16
            + button_gap
            + buttons_height
            + button_gap;
        let card_height = inner_height + 2;
        let total_height = BADGE_HEIGHT - 1 + card_height;

        let top = screen.y + screen.height.saturating_sub(total_height) / 2 + slide;
        let left = screen.x + screen.width.saturating_sub(card_width) / 2;
        let card = Rect::new(left, top + BADGE_HEIGHT - 1, card_width, card_height)
            .intersection(screen);

        let border_color = palette.rgb(Hue::White);
        let block = match scheme {
            ColorScheme::Dark => Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(rgb(border_color)).bg(rgb(surface)))
                .style(Style::default().bg(rgb(surface))),
            ColorScheme::Light => Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(rgb(surface)).bg(rgb(surface)))
                .style(Style::default().bg(rgb(surface))),
        };

        frame.render_widget(Clear, card);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(title_lines.len() as u16),
            Constraint::Length(1),
            Constraint::Length(message_lines.len() as u16),
            Constraint::Length(button_gap),
            Constraint::Length(buttons_height),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(title_lines).alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(message_lines).alignment(Alignment::Center),
            chunks[3],
        );

        let button_area = pad_horizontal(chunks[5], CONTENT_PADDING);
        let buttons = self.render_buttons(frame, button_area, style, surface, focus);

        let badge = self.render_badge(frame, screen, card, top, style);

        AlertLayout {
            card,
            badge,
            buttons,
        }
    }

    fn render_buttons(
        &self,
        frame: &mut Frame,
        area: Rect,
        style: AlertStyle<'_>,
        surface: (u8, u8, u8),
        focus: Option<usize>,
    ) -> Vec<Rect> {
        let rendered = self.buttons(style.scheme);
        if rendered.is_empty() || area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let rects = match &self.actions {
            AlertActions::List(_) => {
                let count = rendered.len() as u32;
                Layout::horizontal(
                    (0..count).map(|_| Constraint::Ratio(1, count)).collect::<Vec<_>>(),
                )
                .split(area)
                .to_vec()
            }
            _ => vec![area],
        };

        for (index, (button, rect)) in rendered.iter().zip(rects.iter()).enumerate() {
            let mut label_style = Style::default()
                .fg(style.palette.resolve(button.text, surface))
                .add_modifier(Modifier::BOLD);
            if let Some(fill) = button.fill {
                label_style = label_style.bg(style.palette.resolve(fill, surface));
            }
            if button.fill.is_none() && focus == Some(index) {
                label_style = label_style.add_modifier(Modifier::REVERSED);
            }

            // vertically center the label inside the button
            let mut lines = vec![Line::from(""); (rect.height.saturating_sub(1) / 2) as usize];
            lines.push(Line::from(button.label.clone()));
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(label_style),
                *rect,
            );
        }

        rects
    }

    /// Draw the badge so its bottom row sits on the card's top border.
    ///
    /// The disc is filled with the kind's accent, the same tint as the
    /// primary button.
    fn render_badge(
        &self,
        frame: &mut Frame,
        screen: Rect,
        card: Rect,
        top: u16,
        style: AlertStyle<'_>,
    ) -> Rect {
        let surface = style.palette.card_surface(style.scheme);
        let fill = style
            .palette
            .resolve(accent_color_for(self.kind, style.scheme), surface);
        let icon_color = rgb(style.palette.rgb(Hue::White));
        let icon = icon_for(self.kind).symbol(style.icons);

        let x = card.x + card.width.saturating_sub(BADGE_WIDTH) / 2;
        let badge = Rect::new(x, top, BADGE_WIDTH, BADGE_HEIGHT).intersection(screen);
        if badge.width < BADGE_WIDTH {
            return badge;
        }

        let rows = [
            (format!(" {} ", "▄".repeat(5)), Style::default().fg(fill)),
            (
                format!("   {}   ", icon),
                Style::default()
                    .fg(icon_color)
                    .bg(fill)
                    .add_modifier(Modifier::BOLD),
            ),
            (
                format!(" {} ", "▀".repeat(5)),
                Style::default().fg(fill).bg(rgb(surface)),
            ),
        ];

        let buf = frame.buffer_mut();
        for (offset, (text, row_style)) in rows.iter().enumerate() {
            let y = top + offset as u16;
            if y < badge.top() || y >= badge.bottom() {
                continue;
            }
            // the corner cells of the disc keep whatever lies beneath
            let (skip, body) = if offset == 1 {
                (0, text.as_str())
            } else {
                (1, text.trim())
            };
            buf.set_string(badge.x + skip, y, body, *row_style);
        }

        badge
    }
}

/// Shrink `area` by `padding` columns on both sides.
fn pad_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect::new(area.x + padding, area.y, area.width - padding * 2, area.height)
}
