/// Keyboard event to action mapping
///
/// Key handling is modal: an open picker captures every key, then the search
/// prompt, then the failed-load screen, and finally the roster itself.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::engine::{Basis, SortKey};
use crate::layout_constants::MIN_GAMES_STEP;

use super::action::{Action, PickerAction, PickerKind, RosterAction};
use super::layout::body_rows;
use super::state::{AppState, RosterState};

/// Convert a key press into an action, if it maps to one
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key.code);

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if state.ui.picker.is_some() {
        return handle_picker_keys(key.code);
    }
    if state.ui.search.active {
        return handle_search_keys(key.code);
    }

    match &state.roster {
        RosterState::Ready(_) => handle_roster_keys(key.code, state),
        RosterState::Loading | RosterState::Failed(_) => handle_unloaded_keys(key.code, state),
    }
}

fn handle_picker_keys(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Up | KeyCode::Char('k') => PickerAction::MoveCursor(-1),
        KeyCode::Down | KeyCode::Char('j') => PickerAction::MoveCursor(1),
        KeyCode::Char(' ') => PickerAction::ToggleOption,
        KeyCode::Enter => PickerAction::Apply,
        KeyCode::Esc | KeyCode::Char('q') => PickerAction::Cancel,
        _ => return None,
    };
    Some(Action::Picker(action))
}

fn handle_search_keys(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::ExitSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn handle_unloaded_keys(code: KeyCode, state: &AppState) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('R') if matches!(state.roster, RosterState::Failed(_)) => {
            debug!("KEY: retrying feed load");
            Some(Action::LoadFeed)
        }
        _ => None,
    }
}

fn handle_roster_keys(code: KeyCode, state: &AppState) -> Option<Action> {
    let page = body_rows(state.system.terminal_height) as isize;

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(1)),
        KeyCode::PageUp => Some(Action::MoveSelection(-page)),
        KeyCode::PageDown => Some(Action::MoveSelection(page)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(Action::SelectLast),

        KeyCode::Enter | KeyCode::Char(' ') => selected(state, RosterAction::ToggleExpanded),
        KeyCode::Char('d') | KeyCode::Delete => selected(state, RosterAction::Remove),
        KeyCode::Char('u') => Some(Action::Roster(RosterAction::Undo)),
        KeyCode::Char('r') => Some(Action::Roster(RosterAction::Reset)),

        KeyCode::Char('b') => {
            let next = state.engine().map(|e| e.basis().next()).unwrap_or_default();
            Some(Action::Roster(RosterAction::SetBasis(next)))
        }
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            SortKey::columns()
                .get(index)
                .map(|key| Action::Roster(RosterAction::SortBy(*key)))
        }

        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Char('t') => Some(Action::Picker(PickerAction::Open(PickerKind::Teams))),
        KeyCode::Char('p') => Some(Action::Picker(PickerAction::Open(PickerKind::Positions))),

        KeyCode::Char('+') | KeyCode::Char('=') => min_games_step(state, true),
        KeyCode::Char('-') => min_games_step(state, false),
        KeyCode::Char('0') => Some(Action::Roster(RosterAction::SetMinGames(0))),

        _ => None,
    }
}

/// Wrap the identity under the cursor in a roster action
fn selected<F>(state: &AppState, make: F) -> Option<Action>
where
    F: FnOnce(crate::engine::RecordId) -> RosterAction,
{
    state.selected_id().map(|id| Action::Roster(make(id)))
}

fn min_games_step(state: &AppState, up: bool) -> Option<Action> {
    let engine = state.engine().ok()?;
    let current = engine.filters().min_games;
    let next = if up {
        current
            .saturating_add(MIN_GAMES_STEP)
            .min(engine.max_games_played())
    } else {
        current.saturating_sub(MIN_GAMES_STEP)
    };
    (next != current).then_some(Action::Roster(RosterAction::SetMinGames(next)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::PickerState;
    use crate::tui::testing::{char_key, create_loaded_state, key};

    #[test]
    fn test_quit_keys() {
        let state = create_loaded_state();
        assert!(matches!(key_to_action(char_key('q'), &state), Some(Action::Quit)));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(key_to_action(ctrl_c, &state), Some(Action::Quit)));
    }

    #[test]
    fn test_navigation_keys() {
        let state = create_loaded_state();

        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::MoveSelection(1))
        ));
        assert!(matches!(
            key_to_action(char_key('k'), &state),
            Some(Action::MoveSelection(-1))
        ));
        assert!(matches!(key_to_action(char_key('G'), &state), Some(Action::SelectLast)));
    }

    #[test]
    fn test_page_keys_use_viewport_height() {
        let mut state = create_loaded_state();
        state.system.terminal_height = 24;

        assert!(matches!(
            key_to_action(key(KeyCode::PageDown), &state),
            Some(Action::MoveSelection(19))
        ));
    }

    #[test]
    fn test_row_keys_target_selected_record() {
        let state = create_loaded_state();
        let id = state.selected_id().unwrap();

        match key_to_action(char_key('d'), &state) {
            Some(Action::Roster(RosterAction::Remove(removed))) => assert_eq!(removed, id),
            other => panic!("unexpected {:?}", other),
        }
        match key_to_action(key(KeyCode::Enter), &state) {
            Some(Action::Roster(RosterAction::ToggleExpanded(toggled))) => assert_eq!(toggled, id),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_row_keys_without_rows() {
        let mut state = create_loaded_state();
        state.engine_mut().unwrap().set_search("nobody");

        assert!(key_to_action(char_key('d'), &state).is_none());
    }

    #[test]
    fn test_sort_digits_follow_column_order() {
        let state = create_loaded_state();

        assert!(matches!(
            key_to_action(char_key('2'), &state),
            Some(Action::Roster(RosterAction::SortBy(SortKey::Name)))
        ));
        assert!(matches!(
            key_to_action(char_key('8'), &state),
            Some(Action::Roster(RosterAction::SortBy(SortKey::Metric(_))))
        ));
        assert!(key_to_action(char_key('9'), &state).is_none());
    }

    #[test]
    fn test_basis_key_cycles() {
        let state = create_loaded_state();

        assert!(matches!(
            key_to_action(char_key('b'), &state),
            Some(Action::Roster(RosterAction::SetBasis(Basis::Ironman)))
        ));
    }

    #[test]
    fn test_min_games_keys_are_clamped() {
        let mut state = create_loaded_state();

        assert!(matches!(
            key_to_action(char_key('+'), &state),
            Some(Action::Roster(RosterAction::SetMinGames(5)))
        ));
        assert!(key_to_action(char_key('-'), &state).is_none());

        state.engine_mut().unwrap().set_min_games(80);
        assert!(matches!(
            key_to_action(char_key('+'), &state),
            Some(Action::Roster(RosterAction::SetMinGames(82)))
        ));
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let mut state = create_loaded_state();
        state.ui.search.active = true;

        assert!(matches!(
            key_to_action(char_key('q'), &state),
            Some(Action::SearchInput('q'))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Backspace), &state),
            Some(Action::SearchBackspace)
        ));
        assert!(matches!(key_to_action(key(KeyCode::Esc), &state), Some(Action::ExitSearch)));
    }

    #[test]
    fn test_picker_mode_keys() {
        let mut state = create_loaded_state();
        state.ui.picker = Some(PickerState::new(PickerKind::Teams, Vec::new(), Default::default()));

        assert!(matches!(
            key_to_action(char_key(' '), &state),
            Some(Action::Picker(PickerAction::ToggleOption))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Picker(PickerAction::Apply))
        ));
        assert!(matches!(
            key_to_action(char_key('q'), &state),
            Some(Action::Picker(PickerAction::Cancel))
        ));
    }

    #[test]
    fn test_failed_load_offers_retry() {
        let mut state = AppState::default();
        assert!(key_to_action(char_key('R'), &state).is_none());

        state.roster = RosterState::Failed("gone".to_string());
        assert!(matches!(key_to_action(char_key('R'), &state), Some(Action::LoadFeed)));
        assert!(key_to_action(char_key('d'), &state).is_none());
    }

    #[test]
    fn test_loaded_roster_ignores_reload() {
        let state = create_loaded_state();

        assert!(key_to_action(char_key('R'), &state).is_none());
    }
}
