//! lifted-counter - two counters, one owner
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering and Counter activation
//! - App Layer - owns the count, applies setter calls, publishes render state

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use lifted_counter::constants::{APP_NAME, APP_VERSION};
use lifted_counter::{AppActor, Config, RenderState, UiEvent, UiLoop};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let (log_dir, log_name) = config.log_target();
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(app = APP_NAME, version = APP_VERSION, step = config.step, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(config.step, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    let ui_loop = UiLoop::connect(ui_tx, render_rx).await?;
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    ui_loop.run(&mut terminal, poll_interval).await?;

    let _ = app_handle.await;
    tracing::info!("Exiting");
    Ok(())
}
