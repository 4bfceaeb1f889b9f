use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};

use crate::catalog::AlertKind;
use crate::config::Config;
use crate::presenter::AlertPresenter;
use crate::ui;

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running the app
    Continue,
    /// Exit the app
    Exit,
}

/// Run the main application loop.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    presenter: &mut AlertPresenter,
    config: &Config,
) -> io::Result<()> {
    let behavior = &config.behavior;

    loop {
        terminal.draw(|f| ui::ui(f, presenter, config))?;

        // Fast polling while the overlay animates, slower when idle
        let timeout = if presenter.is_animating() {
            Duration::from_millis(behavior.animation_frame_ms)
        } else {
            Duration::from_millis(behavior.idle_poll_ms)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(presenter, key.code, key.modifiers) == HandleResult::Exit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(presenter, mouse),
                _ => {}
            }
        }
    }
}

/// Handle a key event and return whether to continue or exit.
pub fn handle_key_event(
    presenter: &mut AlertPresenter,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> HandleResult {
    // Global shortcuts (work in all modes)
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return HandleResult::Exit;
        }
        KeyCode::Char('t') => {
            presenter.toggle_color_scheme();
            return HandleResult::Continue;
        }
        _ => {}
    }

    if presenter.is_alert_open() {
        handle_alert_keys(presenter, code)
    } else {
        handle_screen_keys(presenter, code)
    }
}

/// Handle key events while an alert is open.
fn handle_alert_keys(presenter: &mut AlertPresenter, code: KeyCode) -> HandleResult {
    match code {
        KeyCode::Esc => {
            // Same as tapping the backdrop
            presenter.dismiss();
        }
        KeyCode::Left | KeyCode::BackTab => {
            presenter.focus_previous_action();
        }
        KeyCode::Right | KeyCode::Tab => {
            presenter.focus_next_action();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            presenter.press_focused();
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Handle key events on the base screen.
fn handle_screen_keys(presenter: &mut AlertPresenter, code: KeyCode) -> HandleResult {
    match code {
        KeyCode::Up | KeyCode::BackTab => {
            presenter.select_previous();
        }
        KeyCode::Down | KeyCode::Tab => {
            presenter.select_next();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            presenter.trigger_selected();
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            presenter.selected = index;
            presenter.trigger(AlertKind::all()[index]);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            return HandleResult::Exit;
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a mouse event: left clicks are taps.
pub fn handle_mouse_event(presenter: &mut AlertPresenter, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        presenter.click(mouse.column, mouse.row);
    }
}
