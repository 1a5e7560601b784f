//! Main TUI runner - entry point and event loop

use std::time::Duration;

use rolle_api::ApiClient;
use rolle_app::{Engine, Settings};
use rolle_core::{Location, Result};

use crate::{event, render, terminal};

/// Run the application until the user quits.
///
/// Boots the engine at `location`, takes over the terminal, and drives the
/// drain/draw/poll loop. The terminal is restored before returning,
/// whatever the outcome.
pub async fn run(settings: Settings, location: Location) -> Result<()> {
    terminal::install_panic_hook();

    let api = ApiClient::from_base_url(&settings.server.url)?;
    let mut engine = Engine::new(api, location)?;

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine, &settings);
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    settings: &Settings,
) -> Result<()> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    while !engine.should_quit() {
        // Apply fetch completions queued since the last frame
        engine.drain_pending_messages()?;

        terminal.draw(|frame| render::view(frame, engine.state(), settings.ui.panel_width))?;

        if let Some(message) = event::poll(tick)? {
            engine.process_message(message)?;
        }
    }

    Ok(())
}
