use tracing::debug;

use crate::tui::action::{Action, PickerAction, PickerKind};
use crate::tui::effects::Effect;
use crate::tui::reducers::selection::sync_selection;
use crate::tui::state::{AppState, PickerState};

/// Handle the team/position multi-select modal
///
/// Toggles are staged on the picker and only reach the engine on Apply.
pub fn reduce_picker(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Picker(picker_action) => Ok((apply(state, picker_action), Effect::None)),
        _ => Err(state),
    }
}

fn apply(mut state: AppState, action: &PickerAction) -> AppState {
    match action {
        PickerAction::Open(kind) => open(state, *kind),
        PickerAction::MoveCursor(delta) => {
            if let Some(picker) = state.ui.picker.as_mut() {
                picker.move_cursor(*delta);
            }
            state
        }
        PickerAction::ToggleOption => {
            if let Some(picker) = state.ui.picker.as_mut() {
                picker.toggle();
            }
            state
        }
        PickerAction::Apply => commit(state),
        PickerAction::Cancel => {
            state.ui.picker = None;
            state
        }
    }
}

fn open(mut state: AppState, kind: PickerKind) -> AppState {
    let picker = match state.engine() {
        Ok(engine) => {
            let options = engine.filter_options();
            let filters = engine.filters();
            match kind {
                PickerKind::Teams => PickerState::new(kind, options.teams, filters.teams.clone()),
                PickerKind::Positions => {
                    PickerState::new(kind, options.positions, filters.positions.clone())
                }
            }
        }
        Err(_) => {
            debug!("PICKER: cannot open {:?} before the roster loads", kind);
            return state;
        }
    };
    state.ui.picker = Some(picker);
    state
}

fn commit(mut state: AppState) -> AppState {
    let Some(picker) = state.ui.picker.take() else {
        return state;
    };
    let Ok(engine) = state.engine_mut() else {
        return state;
    };

    match picker.kind {
        PickerKind::Teams => engine.set_teams(picker.selected.iter().cloned()),
        PickerKind::Positions => engine.set_positions(picker.selected.iter().cloned()),
    }
    debug!("PICKER: applied {} {:?}", picker.selected.len(), picker.kind);

    sync_selection(&mut state);
    state
}
