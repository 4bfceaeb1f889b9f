//! Stunning Alert - a terminal showcase of stylized modal alerts.
//!
//! Built with Rust and Ratatui.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stunning_alert::config::Config;
use stunning_alert::input;
use stunning_alert::logging::init_tracing;
use stunning_alert::presenter::AlertPresenter;

fn main() -> Result<()> {
    init_tracing();

    // Load configuration
    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut presenter = AlertPresenter::new(&config);
    tracing::info!(scheme = ?presenter.scheme, "starting");

    // Run app
    let res = input::run_app(&mut terminal, &mut presenter, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
