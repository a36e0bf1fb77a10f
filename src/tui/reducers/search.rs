use tracing::debug;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::reducers::selection::sync_selection;
use crate::tui::state::AppState;

/// Handle the inline search prompt
///
/// Every keystroke applies the buffer to the engine so the roster narrows
/// while typing.
pub fn reduce_search(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::EnterSearch => Ok((enter_search(state), Effect::None)),
        Action::SearchInput(c) => {
            let mut new_state = state;
            new_state.ui.search.buffer.push(*c);
            Ok((apply_buffer(new_state), Effect::None))
        }
        Action::SearchBackspace => {
            let mut new_state = state;
            new_state.ui.search.buffer.pop();
            Ok((apply_buffer(new_state), Effect::None))
        }
        Action::ExitSearch => {
            let mut new_state = state;
            new_state.ui.search.active = false;
            new_state.system.reset_status_message();
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn enter_search(mut state: AppState) -> AppState {
    let current = state
        .engine()
        .map(|engine| engine.filters().search.clone())
        .unwrap_or_default();
    state.ui.search.active = true;
    state.ui.search.buffer = current;
    state
        .system
        .set_status_message("Search: type to filter, Enter or Esc to finish".to_string());
    state
}

fn apply_buffer(mut state: AppState) -> AppState {
    let buffer = state.ui.search.buffer.clone();
    match state.engine_mut() {
        Ok(engine) => engine.set_search(&buffer),
        Err(_) => {
            debug!("SEARCH: roster not loaded, keeping buffer only");
            return state;
        }
    }
    sync_selection(&mut state);
    state
}
