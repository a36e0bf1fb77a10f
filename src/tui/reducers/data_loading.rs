use chrono::Local;
use tracing::debug;

use crate::engine::{Record, RosterEngine};
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::reducers::selection::sync_selection;
use crate::tui::state::{AppState, RosterState};

/// Handle the feed load lifecycle
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::LoadFeed => Ok(handle_load_feed(state)),
        Action::FeedLoaded(Ok(records)) => Ok(handle_feed_loaded(state, records.clone())),
        Action::FeedLoaded(Err(e)) => Ok(handle_feed_failed(state, e)),
        _ => Err(state),
    }
}

fn handle_load_feed(state: AppState) -> (AppState, Effect) {
    // One load per session: a loaded roster keeps its engine
    if matches!(state.roster, RosterState::Ready(_)) {
        debug!("FEED: ignoring load request, roster already loaded");
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.roster = RosterState::Loading;
    new_state
        .system
        .set_status_message("Loading roster...".to_string());
    (new_state, Effect::FetchFeed)
}

fn handle_feed_loaded(state: AppState, records: Vec<Record>) -> (AppState, Effect) {
    let mut new_state = state;
    let count = records.len();
    debug!("FEED: loaded {} records", count);

    let now = Local::now();
    let stamp = now
        .format(&new_state.system.config.time_format)
        .to_string();

    new_state.roster = RosterState::Ready(Box::new(RosterEngine::new(records)));
    new_state.system.loaded_at = Some(now);
    new_state
        .system
        .set_status_message(format!("Loaded {} players at {}", count, stamp));

    new_state.ui.selected_index = 0;
    new_state.ui.selected_id = None;
    new_state.ui.picker = None;
    new_state.ui.search = Default::default();
    sync_selection(&mut new_state);

    (new_state, Effect::None)
}

fn handle_feed_failed(state: AppState, error: &str) -> (AppState, Effect) {
    let mut new_state = state;
    debug!("FEED: load failed: {}", error);
    new_state.roster = RosterState::Failed(error.to_string());
    new_state.system.set_status_error_message(format!(
        "Unable to load player data: {}. Press R to retry.",
        error
    ));
    (new_state, Effect::None)
}
