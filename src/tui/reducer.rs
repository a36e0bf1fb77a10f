use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::reducers::{
    reduce_data_loading, reduce_picker, reduce_roster, reduce_search, reduce_selection,
};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_roster(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_selection(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_search(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_picker(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::UpdateViewport { width, height } => {
            let mut new_state = state;
            new_state.system.terminal_width = width;
            new_state.system.terminal_height = height;
            (new_state, Effect::None)
        }

        Action::Quit => {
            debug!("ACTION: Quit");
            (state, Effect::None)
        }

        _ => (state, Effect::None),
    }
}
