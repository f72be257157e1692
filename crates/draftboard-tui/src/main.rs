//! Draftboard - a terminal big board for draft prospects.
//!
//! Loads a static prospect dataset, shows every source's ranking side by
//! side with a composite average, and opens a profile per player with
//! measurements, season stats and scouting reports.

mod app;
mod cli;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use draftboard_core::{Config, Dataset};

use app::{App, AppState};
use cli::{CliArgs, Command};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file written under the cache directory while the TUI owns the screen
const LOG_FILE_NAME: &str = "draftboard.log";

/// Open the log file under `log_dir`, creating the directory if needed.
fn open_log_writer(log_dir: Result<PathBuf>) -> Result<(NonBlocking, WorkerGuard)> {
    let log_dir = log_dir?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Could not create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir)
        .with_context(|| format!("Could not open log file in {}", log_dir.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize the tracing subscriber for logging.
///
/// Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug).
/// The interactive UI owns the terminal, so its logs go to a file; the
/// returned guard must live until exit so buffered lines get flushed.
fn init_tracing(config: &Config, interactive: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if !interactive {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
        return None;
    }

    match open_log_writer(config.log_dir()) {
        Ok((writer, guard)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        Err(e) => {
            // Still before the alternate screen, so this line stays visible
            eprintln!("File logging unavailable: {:#}", e);
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::sink))
                .with(filter)
                .init();
            None
        }
    }
}

/// Find and load the dataset. `--data` wins over everything the config
/// resolves.
fn load_dataset(config: &Config, data_arg: Option<PathBuf>) -> Result<Dataset> {
    let path = data_arg.or_else(|| config.data_file()).with_context(|| {
        format!(
            "No dataset found. Pass --data PATH, set {} or data_path in {}",
            draftboard_core::config::DATA_ENV_VAR,
            Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string())
        )
    })?;

    let dataset = Dataset::load(&path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    Ok(dataset)
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let CliArgs { command, data } = cli::parse_args(std::env::args().skip(1))?;

    if command == Command::Help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging
    let interactive = command == Command::Interactive;
    let _log_guard = init_tracing(&config, interactive);
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    let dataset = load_dataset(&config, data)?;

    if let Command::PrintBoard(options) = command {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return cli::print_board(&mut out, &dataset, &config, &options);
    }

    info!("Draftboard starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config, dataset);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Draftboard shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                // Handle input
                if handle_input(app, key)? {
                    return Ok(());
                }
            }
        }

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
