mod app;
mod clock;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use clock::SystemClock;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use domain::history::total_minutes;
use persistence::{ensure_depot_dir, init_local_depot, logs_dir, state_file, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

type DepotApp = AppState<FileStore, SystemClock>;

#[derive(Parser)]
#[command(name = "depot")]
#[command(about = "A terminal deep-work timer with persisted history and a todo list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .depot directory in the current directory
    Init,
    /// Print the current timer status
    Status,
    /// Change the default interval lengths
    Settings {
        /// Deep work length in minutes
        #[arg(short, long)]
        work: Option<String>,
        /// Rest length in minutes
        #[arg(short, long)]
        rest: Option<String>,
    },
    /// Stop and refill the active interval
    Reset,
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to <depot dir>/logs/depot.log, rolling daily.
/// Log level can be controlled with RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not resolve logs directory: {}", e);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "depot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

/// Stderr logging for one-shot subcommands (default: warn)
fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_app() -> Result<DepotApp> {
    ensure_depot_dir()?;
    let store = FileStore::open(state_file()?)?;
    tracing::debug!(path = %store.path().display(), "using store");
    AppState::restore(store, SystemClock)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            init_stderr_logging();
            let depot_dir = init_local_depot()?;
            println!("Initialized depot directory: {}", depot_dir.display());
            println!();
            println!("Depot will now keep its timer and todos in this directory.");
            println!("Run 'depot' to start.");
            Ok(())
        }
        Some(Commands::Status) => {
            init_stderr_logging();
            let app = open_app()?;
            println!("{}", app.status_line());
            println!(
                "Deep work: {} minutes   Todos: {}/{} done",
                total_minutes(app.timer.total_work_secs),
                app.todos.completed_count(),
                app.todos.len()
            );
            Ok(())
        }
        Some(Commands::Settings { work, rest }) => {
            init_stderr_logging();
            let mut app = open_app()?;
            app.apply_settings(work.as_deref().unwrap_or(""), rest.as_deref().unwrap_or(""))?;
            println!(
                "Work: {} min   Rest: {} min",
                app.timer.work_minutes, app.timer.rest_minutes
            );
            println!("{}", app.status_line());
            Ok(())
        }
        Some(Commands::Reset) => {
            init_stderr_logging();
            let mut app = open_app()?;
            app.reset()?;
            println!("{}", app.status_line());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    let _log_guard = init_file_logging();

    let mut app = open_app()?;
    tracing::info!(status = %app.status_line(), "depot started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // State is already persisted on every change; a running timer stays
    // running and is caught up on the next start.
    tracing::info!(status = %app.status_line(), "depot exited");

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut DepotApp) -> Result<()> {
    let max_wait = ticker::poll_duration();
    let mut last_title = String::new();

    loop {
        // Deliver due ticks before drawing so the display is current
        app.pump()?;

        let title = app.status_line();
        if title != last_title {
            execute!(terminal.backend_mut(), SetTitle(&title)).context("Failed to set window title")?;
            last_title = title;
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(app.poll_timeout(max_wait))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
