//! Terminal user interface for the snapshot console
//!
//! A scrollable list of telemetry rows with expandable per-row detail.
//! Features:
//! - Logs/Metrics/Traces tabs with independent selection and open state
//! - Vim-style navigation
//! - Auto-refresh when the snapshot file changes on disk

pub mod app;
pub mod events;
pub mod rows;
pub mod state; // Pure selection math (functional core)
pub mod ui;
pub mod views;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::prelude::*;

use app::App;
use events::handle_event;

use crate::record::PipelineType;
use crate::timefmt::FormatConfig;

/// Run the snapshot console on a snapshot file.
pub fn run(
    snapshot_path: PathBuf,
    pipeline: PipelineType,
    format: FormatConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app, ensuring cleanup happens even on error
    let result = run_app_inner(&mut terminal, snapshot_path, pipeline, format);

    // Restore terminal - this MUST run even if app fails
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

fn run_app_inner<B: Backend>(
    terminal: &mut Terminal<B>,
    snapshot_path: PathBuf,
    pipeline: PipelineType,
    format: FormatConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(snapshot_path, pipeline, format)?;

    // Watch the snapshot file so the console refreshes itself when the
    // collector rewrites it
    let (tx, rx) = mpsc::channel();
    let watched_path = app.snapshot_path().to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&watched_path, RecursiveMode::NonRecursive)?;

    run_event_loop(terminal, &mut app, rx)
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    file_change_rx: mpsc::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Draw the UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle input with timeout
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            match read()? {
                Event::Key(key) => {
                    if handle_event(app, key) {
                        return Ok(()); // Quit signal
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                }
                _ => {}
            }
        }

        // Check for file changes (non-blocking)
        if file_change_rx.try_recv().is_ok() {
            match app.reload() {
                Ok(()) => app.show_refresh_indicator(),
                Err(e) => app.set_status(format!("Reload failed: {}", e)),
            }
        }

        // Tick for transient indicators
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
