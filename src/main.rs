// MorVPN - terminal control panel for a simulated VPN connection
// Landing, onboarding, dashboard and settings views driven by a mock
// connection state machine; no real network traffic is ever made.

mod app;
mod catalog;
mod clipboard;
mod pages;
mod sim;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{event::handle_key_event, AppState, Args};
use clap::Parser;
use clipboard::{Clipboard, MemoryClipboard, TerminalClipboard};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Held until the terminal is restored so buffered lines are flushed
    let _log_guard = init_logging(&args)?;
    info!(start = args.start.title(), seed = ?args.seed, tick_ms = args.tick_ms, "starting");

    let clipboard: Box<dyn Clipboard> = if args.no_clipboard {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(TerminalClipboard::stdout())
    };

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = AppState::new(args.start, args.seed, clipboard);
    let res = run_app(&mut terminal, &mut app, &args);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "terminated with error");
        println!("Error: {:?}", err);
    }
    Ok(())
}

/// Split `--log-file` into the directory and file name the appender wants
fn log_target(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path.file_name().unwrap_or(OsStr::new("morvpn.log"));
    (dir, file)
}

/// Tracing writes to a file only; stdout belongs to the TUI
fn init_logging(args: &Args) -> Result<Option<WorkerGuard>> {
    let Some(path) = &args.log_file else {
        return Ok(None);
    };
    let (dir, file) = log_target(path);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    args: &Args,
) -> Result<()> {
    let started = Instant::now();
    loop {
        app.on_tick(started.elapsed());
        terminal.draw(|f| ui::draw(f, app))?;

        if !app.running {
            info!("exiting");
            return Ok(());
        }

        if event::poll(args.ui_interval())? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_splits_path() {
        let (dir, file) = log_target(Path::new("/tmp/logs/morvpn.log"));
        assert_eq!(dir, Path::new("/tmp/logs"));
        assert_eq!(file, OsStr::new("morvpn.log"));
    }

    #[test]
    fn test_log_target_bare_file_name_uses_cwd() {
        let (dir, file) = log_target(Path::new("morvpn.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(file, OsStr::new("morvpn.log"));
    }

    #[test]
    fn test_no_log_file_installs_nothing() {
        let args = Args::try_parse_from(["morvpn"]).unwrap();
        assert!(init_logging(&args).unwrap().is_none());
    }
}
