use tracing::debug;

use crate::engine::RosterEngine;
use crate::tui::action::{Action, RosterAction};
use crate::tui::effects::Effect;
use crate::tui::reducers::selection::sync_selection;
use crate::tui::state::{AppState, RosterState};

/// Handle engine actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_roster(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Roster(roster_action) => Ok(apply(state, roster_action)),
        _ => Err(state),
    }
}

fn apply(mut state: AppState, action: &RosterAction) -> (AppState, Effect) {
    let RosterState::Ready(engine) = &mut state.roster else {
        debug!("ROSTER: ignoring {:?}, roster not loaded", action);
        return (state, Effect::None);
    };

    let status = apply_to_engine(engine, action);

    match action {
        RosterAction::Undo => {
            // Cursor jumps to the restored record
            if let Some((_, Some(restored))) = &status {
                state.ui.selected_id = Some(restored.clone());
            }
        }
        RosterAction::Reset => {
            state.ui.search.buffer.clear();
            state.ui.search.active = false;
        }
        _ => {}
    }

    if let Some((message, _)) = status {
        state.system.set_status_message(message);
    }
    sync_selection(&mut state);
    (state, Effect::None)
}

/// Run one action against the engine, returning a status line (and the
/// restored identity for undo)
fn apply_to_engine(
    engine: &mut RosterEngine,
    action: &RosterAction,
) -> Option<(String, Option<crate::engine::RecordId>)> {
    match action {
        RosterAction::SetSearch(search) => {
            engine.set_search(search);
            None
        }
        RosterAction::SetTeams(teams) => {
            engine.set_teams(teams.iter().cloned());
            None
        }
        RosterAction::SetPositions(positions) => {
            engine.set_positions(positions.iter().cloned());
            None
        }
        RosterAction::SetMinGames(min_games) => {
            engine.set_min_games(*min_games);
            None
        }
        RosterAction::SetBasis(basis) => {
            engine.set_basis(*basis);
            Some((format!("Ranking by {}.", basis.label()), None))
        }
        RosterAction::SortBy(key) => {
            engine.set_sort_key(*key);
            Some((format!("Sorted by {}.", engine.sort_config().describe()), None))
        }
        RosterAction::Remove(id) => {
            let name = engine.record(id).map(|r| r.name.clone());
            if engine.remove(id) {
                let name = name.unwrap_or_else(|| id.to_string());
                Some((format!("Removed {}. Press u to undo.", name), None))
            } else {
                None
            }
        }
        RosterAction::Undo => match engine.undo() {
            Some(id) => {
                let name = engine
                    .record(&id)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| id.to_string());
                let message = if engine.can_undo() {
                    format!("Restored {}. Press u to undo again.", name)
                } else {
                    format!("Restored {}.", name)
                };
                Some((message, Some(id)))
            }
            None => Some(("Nothing to undo.".to_string(), None)),
        },
        RosterAction::ToggleExpanded(id) => {
            engine.toggle_expanded(id);
            None
        }
        RosterAction::Reset => {
            engine.reset();
            Some(("Filters reset.".to_string(), None))
        }
    }
}
