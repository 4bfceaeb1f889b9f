use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{ColorScheme, Hue, IconSet, Tint};
use crate::ui::gradient_color;

/// RGB color represented as a 3-element array.
pub type Rgb = [u8; 3];

/// Appearance settings supplied to the alert views.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Initial color scheme ("light" or "dark"); toggled at runtime with `t`
    pub color_scheme: ColorScheme,
    /// Glyph rendition for badge icons ("unicode" or "ascii")
    pub icon_set: IconSet,
}

/// Behavior configuration for the UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Duration of the overlay show/hide transition in milliseconds
    pub transition_ms: u64,
    /// Animation frame duration in milliseconds
    pub animation_frame_ms: u64,
    /// Idle polling interval in milliseconds
    pub idle_poll_ms: u64,
    /// Opacity of the black backdrop behind an alert (0.0 - 1.0)
    pub backdrop_opacity: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            transition_ms: 350,
            animation_frame_ms: 16, // ~60 FPS
            idle_poll_ms: 100,
            backdrop_opacity: 0.4,
        }
    }
}

/// Base RGB value of every named hue.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub green: Rgb,
    pub red: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub gray: Rgb,
    pub pink: Rgb,
    pub white: Rgb,
    pub black: Rgb,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            green: [52, 199, 89],
            red: [255, 59, 48],
            yellow: [255, 204, 0],
            blue: [0, 122, 255],
            gray: [142, 142, 147],
            pink: [255, 45, 85],
            white: [255, 255, 255],
            black: [0, 0, 0],
        }
    }
}

impl PaletteConfig {
    /// Base RGB of a hue.
    pub fn rgb(&self, hue: Hue) -> (u8, u8, u8) {
        let rgb = match hue {
            Hue::Green => &self.green,
            Hue::Red => &self.red,
            Hue::Yellow => &self.yellow,
            Hue::Blue => &self.blue,
            Hue::Gray => &self.gray,
            Hue::Pink => &self.pink,
            Hue::White => &self.white,
            Hue::Black => &self.black,
        };
        to_tuple(rgb)
    }

    /// Resolve a tint to a terminal color by blending it over `surface`.
    pub fn resolve(&self, tint: Tint, surface: (u8, u8, u8)) -> ratatui::style::Color {
        gradient_color(surface, self.rgb(tint.hue), tint.opacity)
    }

    /// Card fill for a color scheme.
    pub fn card_surface(&self, scheme: ColorScheme) -> (u8, u8, u8) {
        match scheme {
            ColorScheme::Light => self.rgb(Hue::White),
            ColorScheme::Dark => self.rgb(Hue::Black),
        }
    }
}

/// Screen colors for the host screen, per color scheme.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Screen background in the light scheme
    pub light_background: Rgb,
    /// Screen background in the dark scheme
    pub dark_background: Rgb,
    /// Primary text in the light scheme
    pub light_text: Rgb,
    /// Primary text in the dark scheme
    pub dark_text: Rgb,
    /// Title bar background in the light scheme
    pub light_bar: Rgb,
    /// Title bar background in the dark scheme
    pub dark_bar: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_background: [255, 255, 255],
            dark_background: [0, 0, 0],
            light_text: [0, 0, 0],
            dark_text: [255, 255, 255],
            light_bar: [249, 249, 249],
            dark_bar: [22, 22, 24],
        }
    }
}

impl ThemeConfig {
    /// Screen background for a scheme.
    pub fn background(&self, scheme: ColorScheme) -> (u8, u8, u8) {
        match scheme {
            ColorScheme::Light => to_tuple(&self.light_background),
            ColorScheme::Dark => to_tuple(&self.dark_background),
        }
    }

    /// Primary text color for a scheme.
    pub fn text(&self, scheme: ColorScheme) -> (u8, u8, u8) {
        match scheme {
            ColorScheme::Light => to_tuple(&self.light_text),
            ColorScheme::Dark => to_tuple(&self.dark_text),
        }
    }

    /// Title bar background for a scheme.
    pub fn bar(&self, scheme: ColorScheme) -> (u8, u8, u8) {
        match scheme {
            ColorScheme::Light => to_tuple(&self.light_bar),
            ColorScheme::Dark => to_tuple(&self.dark_bar),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    pub palette: PaletteConfig,
    pub theme: ThemeConfig,
}

impl Config {
    /// Returns the default config file path: ~/.config/stunning-alert/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stunning-alert").join("config.toml"))
    }

    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::default_path() {
            self.save_to_path(&path)
        } else {
            Err(anyhow::anyhow!("Could not determine config directory"))
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Convert an RGB array to a tuple for the gradient helpers.
pub fn to_tuple(rgb: &Rgb) -> (u8, u8, u8) {
    (rgb[0], rgb[1], rgb[2])
}
