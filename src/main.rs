//! regform-tui - User registration form in the terminal
//!
//! A Ratatui-based form with inline validation, a country list fetched
//! from the REST Countries API, and a success dialog on submit.

mod app;
mod config;
mod countries;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use countries::RestCountriesClient;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll interval for the UI loop
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let config = TuiConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regform_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer(&config)),
        )
        .init();

    let url = config.countries_url();
    tracing::info!("Starting regform-tui, countries from {url}");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app, start the one-time country load, and run
    let mut app = App::new(Arc::new(RestCountriesClient::new(url)));
    app.start_country_load();
    let result = run_app(&mut terminal, &mut app);

    // Dropping the app cancels a load still in flight
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file under the data directory so output does not corrupt the screen.
/// Falls back to stderr when disabled or the file cannot be opened.
fn log_writer(config: &TuiConfig) -> BoxMakeWriter {
    if config.log_to_file() {
        if let Some(path) = TuiConfig::log_path() {
            let opened = path
                .parent()
                .map_or(Ok(()), fs::create_dir_all)
                .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
            match opened {
                Ok(file) => return BoxMakeWriter::new(std::sync::Mutex::new(file)),
                Err(e) => eprintln!("Cannot open log file {}: {e}", path.display()),
            }
        }
    }
    BoxMakeWriter::new(io::stderr)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished country loads before drawing
        app.poll_country_events();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Resize(_width, _height) => {
                    // Terminal was resized - layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
