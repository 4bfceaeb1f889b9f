//! Alert and action kinds with their display attributes.
//!
//! Every mapping here is a total `match` over a closed set, so adding a new
//! kind fails to compile until it is given an icon and a colour.

use serde::{Deserialize, Serialize};

/// Opacity applied to every tint in the dark colour scheme.
pub const DARK_OPACITY: f32 = 0.5;

/// Opacity of secondary (message) text in the dark colour scheme.
pub const DARK_SECONDARY_OPACITY: f32 = 0.7;

/// Semantic category of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Success,
    Error,
    Question,
    Network,
}

impl AlertKind {
    /// All kinds, in the order the demo lists them.
    pub const fn all() -> &'static [AlertKind] {
        &[
            AlertKind::Success,
            AlertKind::Error,
            AlertKind::Question,
            AlertKind::Network,
        ]
    }

    /// Base hue of the kind's accent colour.
    pub const fn hue(&self) -> Hue {
        match self {
            AlertKind::Success => Hue::Green,
            AlertKind::Error => Hue::Red,
            AlertKind::Question => Hue::Yellow,
            AlertKind::Network => Hue::Blue,
        }
    }
}

/// Semantic role of a button inside a multi-button alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Default,
    Positive,
    Destructive,
    CancelDismiss,
}

impl ActionKind {
    /// Base hue of the button's label.
    pub const fn hue(&self) -> Hue {
        match self {
            ActionKind::Positive => Hue::Green,
            ActionKind::Default => Hue::Red,
            ActionKind::Destructive => Hue::Gray,
            ActionKind::CancelDismiss => Hue::Pink,
        }
    }
}

/// Light or dark appearance, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Opacity every accent and action tint is drawn at.
    pub fn tint_opacity(self) -> f32 {
        match self {
            ColorScheme::Light => 1.0,
            ColorScheme::Dark => DARK_OPACITY,
        }
    }
}

/// Named base colours. Resolved to RGB by [`crate::config::PaletteConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Green,
    Red,
    Yellow,
    Blue,
    Gray,
    Pink,
    White,
    Black,
}

/// A hue drawn at some opacity over whatever surface lies beneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub hue: Hue,
    pub opacity: f32,
}

impl Tint {
    /// Fully opaque tint of `hue`.
    pub const fn solid(hue: Hue) -> Self {
        Self { hue, opacity: 1.0 }
    }

    /// Same hue at a different opacity.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            hue: self.hue,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

/// Which characters glyphs are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Unicode,
    Ascii,
}

/// Icon shown inside an alert's badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Checkmark,
    Cross,
    QuestionMark,
    WifiSlash,
}

impl Glyph {
    /// Single-cell symbol for this glyph.
    pub fn symbol(&self, icons: IconSet) -> &'static str {
        match (self, icons) {
            (Glyph::Checkmark, IconSet::Unicode) => "✓",
            (Glyph::Cross, IconSet::Unicode) => "✕",
            (Glyph::QuestionMark, IconSet::Unicode) => "?",
            (Glyph::WifiSlash, IconSet::Unicode) => "⊘",
            (Glyph::Checkmark, IconSet::Ascii) => "v",
            (Glyph::Cross, IconSet::Ascii) => "x",
            (Glyph::QuestionMark, IconSet::Ascii) => "?",
            (Glyph::WifiSlash, IconSet::Ascii) => "!",
        }
    }
}

/// Icon for an alert kind.
pub fn icon_for(kind: AlertKind) -> Glyph {
    match kind {
        AlertKind::Success => Glyph::Checkmark,
        AlertKind::Error => Glyph::Cross,
        AlertKind::Question => Glyph::QuestionMark,
        AlertKind::Network => Glyph::WifiSlash,
    }
}

/// Accent colour of an alert kind: primary button fill.
pub fn accent_color_for(kind: AlertKind, scheme: ColorScheme) -> Tint {
    Tint::solid(kind.hue()).with_opacity(scheme.tint_opacity())
}

/// Label colour of a button in a multi-button alert.
pub fn action_text_color_for(kind: ActionKind, scheme: ColorScheme) -> Tint {
    Tint::solid(kind.hue()).with_opacity(scheme.tint_opacity())
}

/// Move `CancelDismiss` entries in front of everything else.
///
/// Stable: entries of any other kind keep their relative input order, as do
/// multiple cancel entries among themselves.
pub fn order_actions<T>(actions: &mut [T], kind_of: impl Fn(&T) -> ActionKind) {
    actions.sort_by_key(|action| kind_of(action) != ActionKind::CancelDismiss);
}
