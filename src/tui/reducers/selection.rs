use tracing::trace;

use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

/// Handle cursor movement over the roster rows
pub fn reduce_selection(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::MoveSelection(delta) => Ok((move_selection(state, *delta), Effect::None)),
        Action::SelectFirst => Ok((select_index(state, 0), Effect::None)),
        Action::SelectLast => Ok((select_index(state, usize::MAX), Effect::None)),
        _ => Err(state),
    }
}

fn move_selection(state: AppState, delta: isize) -> AppState {
    let target = state.ui.selected_index.saturating_add_signed(delta);
    select_index(state, target)
}

fn select_index(mut state: AppState, index: usize) -> AppState {
    let len = state.engine().map(|e| e.snapshot().len()).unwrap_or(0);
    if len == 0 {
        state.ui.selected_index = 0;
        state.ui.selected_id = None;
        return state;
    }
    state.ui.selected_index = index.min(len - 1);
    state.ui.selected_id = state.selected_id();
    trace!("SELECT: index={} id={:?}", state.ui.selected_index, state.ui.selected_id);
    state
}

/// Re-anchor the cursor after a recomputation
///
/// The cursor stays on the same record while it is visible, otherwise the
/// previous index is clamped to the new row count.
pub fn sync_selection(state: &mut AppState) {
    let position = match state.engine() {
        Ok(engine) => {
            let snapshot = engine.snapshot();
            if snapshot.is_empty() {
                None
            } else {
                let followed = state
                    .ui
                    .selected_id
                    .as_ref()
                    .and_then(|id| snapshot.position_of(id));
                Some(followed.unwrap_or_else(|| state.ui.selected_index.min(snapshot.len() - 1)))
            }
        }
        Err(_) => None,
    };

    state.ui.selected_index = position.unwrap_or(0);
    state.ui.selected_id = state.selected_id();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::action::RosterAction;
    use crate::tui::reducer::reduce;
    use crate::tui::testing::create_loaded_state;

    #[test]
    fn test_move_selection_is_clamped() {
        let state = create_loaded_state();

        let (state, _) = reduce(state, Action::MoveSelection(-3));
        assert_eq!(state.ui.selected_index, 0);

        let (state, _) = reduce(state, Action::MoveSelection(3));
        assert_eq!(state.ui.selected_index, 3);

        let (state, _) = reduce(state, Action::MoveSelection(100));
        assert_eq!(state.ui.selected_index, 7);
    }

    #[test]
    fn test_select_first_and_last() {
        let (state, _) = reduce(create_loaded_state(), Action::SelectLast);
        assert_eq!(state.ui.selected_index, 7);
        assert_eq!(state.ui.selected_id, state.selected_id());

        let (state, _) = reduce(state, Action::SelectFirst);
        assert_eq!(state.ui.selected_index, 0);
    }

    #[test]
    fn test_selection_without_roster() {
        let (state, _) = reduce(AppState::default(), Action::MoveSelection(2));

        assert_eq!(state.ui.selected_index, 0);
        assert!(state.ui.selected_id.is_none());
    }

    #[test]
    fn test_selection_follows_record_across_sort() {
        let (state, _) = reduce(create_loaded_state(), Action::MoveSelection(2));
        let followed = state.ui.selected_id.clone().unwrap();

        let (state, _) = reduce(
            state,
            Action::Roster(RosterAction::SortBy(crate::engine::SortKey::Name)),
        );

        assert_eq!(state.ui.selected_id.as_ref(), Some(&followed));
        assert_eq!(state.selected_id().as_ref(), Some(&followed));
    }

    #[test]
    fn test_selection_clamps_when_record_hidden() {
        let (state, _) = reduce(create_loaded_state(), Action::SelectLast);

        let (state, _) = reduce(state, Action::Roster(RosterAction::SetMinGames(76)));

        let visible = state.engine().unwrap().snapshot().len();
        assert!(visible < 8);
        assert_eq!(state.ui.selected_index, visible - 1);
        assert_eq!(state.ui.selected_id, state.selected_id());
    }
}
