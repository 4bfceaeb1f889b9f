//! UI module for stunning-alert.
//!
//! This module contains all UI rendering logic including:
//! - The demo screen with its trigger buttons
//! - The reusable alert view
//! - The dimming backdrop
//! - Color blending and text wrapping helpers

pub mod alert_view;
pub mod backdrop;
mod gradient;
mod render;
pub mod text;

pub use alert_view::{
    ActionButton, AlertActions, AlertLayout, AlertStyle, AlertView, PrimaryAction,
    RenderedButton,
};
pub use gradient::{gradient_color, rgb};
pub use render::{ui, HEADLINE, SCREEN_TITLE};
