//! Stunning Alert - stylized modal alerts in the terminal.
//!
//! This library exposes the alert catalog, the reusable alert view and the
//! demo screen that hosts it.

pub mod catalog;
pub mod config;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod transition;
pub mod ui;
