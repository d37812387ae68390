// Module declarations
pub mod components;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use component::{Component, Effect, Element};
pub use effects::DataEffects;
pub use keys::key_to_action;
pub use mouse::mouse_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{Tab, ViewKey};

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::data_provider::StatsDataProvider;

/// Main entry point for TUI mode
pub async fn run(
    provider: Arc<dyn StatsDataProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create DataEffects handler
    let data_effects = Arc::new(DataEffects::new(provider));

    // Create initial AppState with config
    let initial_state = AppState::new(config);

    // Create runtime with DataEffects
    let mut runtime = Runtime::new(initial_state, data_effects);

    // Main loop
    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        // Render
        terminal.draw(|f| {
            let area = f.area();

            // Build virtual tree from current state
            let element = runtime.build();

            // Render virtual tree to ratatui buffer
            let config = &runtime.state().system.config.display;
            let mut renderer = Renderer::new();
            renderer.render(element, area, f.buffer_mut(), config);
        })?;

        // If actions were processed, continue loop immediately to check for more
        // This ensures UI updates immediately when async data arrives
        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard and mouse events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let action = match event::read()? {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_to_action(key, runtime.state())
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                mouse_to_action(mouse, runtime.state(), area)
            }
            _ => None,
        };

        // Check for quit action before handling
        let should_quit = matches!(action, Some(Action::Quit));

        // Dispatch action if we have one
        if let Some(act) = action {
            runtime.dispatch(act);
        }

        if should_quit {
            tracing::debug!("ACTION: Quitting application");
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
