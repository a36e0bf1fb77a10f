pub mod action;
pub mod effects;
pub mod error;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use error::{TuiError, TuiResult};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::FeedSource;

/// Main entry point for TUI mode
pub async fn run(config: Config, source: Arc<dyn FeedSource>) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(source));

    let mut initial_state = AppState::default();
    initial_state.system.config = config;

    let mut runtime = Runtime::new(initial_state, data_effects);
    runtime.dispatch(Action::LoadFeed);

    let result = main_loop(&mut terminal, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> TuiResult<()> {
    loop {
        // Process any actions from effects first so loaded data renders
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let size = terminal.size()?;
        let system = &runtime.state().system;
        if size.width != system.terminal_width || size.height != system.terminal_height {
            runtime.dispatch(Action::UpdateViewport {
                width: size.width,
                height: size.height,
            });
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render(runtime.state(), area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let Some(action) = key_to_action(key, runtime.state()) else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }
                runtime.dispatch(action);
            }
        }
    }
}
